//! Board state and move coordination for 9x9 Tavlei
//!
//! Add [`core::CorePlugin`] for config persistence and [`game::TavleiPlugin`]
//! for the coordinator, insert a [`game::resources::Rules`] and write
//! [`game::events::StartGame`].

pub mod core;
pub mod game;

pub use crate::core::CorePlugin;
pub use crate::game::TavleiPlugin;
