//! Board rules module - Pure board logic without ECS coupling
//!
//! Holds the occupancy model and the seam to the external rules engine. Nothing
//! here reads or writes Bevy resources, so it runs the same inside systems, on
//! worker threads and in plain unit tests.
//!
//! # Module Structure
//!
//! - `board_state` - Occupancy grid and special-cell classification
//! - `engine` - The consumed rules engine interface and its notifications
//! - `layout` - Text-drawn opening layouts, including standard 9×9 Tavlei
//! - `scripted` - Table-driven engine used for hot-seat tooling and tests

pub mod board_state;
pub mod engine;
pub mod layout;
pub mod scripted;


// Re-export commonly used items
pub use board_state::{special_cells, BoardState};
pub use engine::{EngineNotification, EngineReply, MoveProposal, RulesEngine};
pub use layout::{parse_layout, tavlei_9x9, TAVLEI_9X9};
pub use scripted::ScriptedRules;
