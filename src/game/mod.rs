//! Tavlei board game core - board state, selection and turn coordination
//!
//! Pure game logic lives in plain types that know nothing about the ECS; a thin
//! layer of resources and systems drives them from a Bevy app.
//!
//! # Module Organization
//!
//! - `types` - Positions, sides, pieces, moves, outcomes, game modes
//! - `rules` - Board state, the rules engine boundary, starting layouts
//! - `selection` - Selected piece and per-cell highlights
//! - `channel` - Ordered input queue for one game instance
//! - `coordinator` - The selection & turn state machine
//! - `events` - Bevy messages in and out of the coordinator
//! - `resources` - `ActiveGame` and `Rules`
//! - `systems` - ECS systems feeding and publishing the coordinator
//! - `plugin` - `TavleiPlugin` registering all of the above
//!
//! # Data Flow
//!
//! ```text
//! BoardInput ──▶ GameChannel ──▶ Coordinator ──▶ MoveProposed ──▶ RulesEngine
//!                     ▲                                               │
//!                     └──────────── EngineNotification ◀──────────────┘
//! ```
//!
//! The rules engine decides legality, captures and game end. The coordinator
//! only asks it for legal moves and applies what it commits.

pub mod channel;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod selection;
pub mod system_sets;
pub mod systems;
pub mod types;

pub use plugin::TavleiPlugin;
