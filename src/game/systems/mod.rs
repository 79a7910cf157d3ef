//! ECS systems driving the board coordinator
//!
//! # Modules
//!
//! - [`lifecycle`] - Build and drop the [`ActiveGame`](crate::game::resources::ActiveGame)
//! - [`input`] - Forward inbound messages and engine replies, then dispatch them
//! - [`engine_bridge`] - Hand proposals to the rules engine, publish outbound messages
//!
//! All coordinator mutation happens in [`dispatch_game_inputs`]; the other
//! systems only queue work for it or report what it did. See
//! [`GameSystems`](crate::game::system_sets::GameSystems) for the order.

pub mod engine_bridge;
pub mod input;
pub mod lifecycle;

pub use engine_bridge::*;
pub use input::*;
pub use lifecycle::*;
