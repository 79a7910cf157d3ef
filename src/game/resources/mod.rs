//! Game resources - ECS singletons shared by the board systems
//!
//! # Resources
//!
//! - [`ActiveGame`] - The running game: coordinator, input channel and
//!   in-flight engine replies. Present only while a game runs.
//! - [`Rules`] - The rules engine the next and current game consult
//!
//! The coordinator itself is plain data inside [`ActiveGame`]; systems reach
//! it through the resource:
//!
//! ```rust,ignore
//! fn show_selection(game: Option<Res<ActiveGame>>) {
//!     let Some(game) = game else { return };
//!     if let Some(piece) = game.coordinator.selected() {
//!         info!("{:?} selected at {}", piece.kind, piece.position);
//!     }
//! }
//! ```

pub mod active_game;

#[cfg(test)]
mod tests;

pub use active_game::*;
