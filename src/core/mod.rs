//! Core module - Configuration and error infrastructure
//!
//! Everything the game module needs from its host: the [`GameConfig`] a game
//! instance is built from, its JSON persistence, and the core error type.
//!
//! # Resources
//!
//! - [`GameConfig`] - Board size and game mode for the next game
//! - [`ConfigPath`] - Where the config is persisted
//!
//! # Plugin
//!
//! [`CorePlugin`] loads the config in `PreStartup` and saves it in `Last`
//! whenever it changed.

pub mod config;
pub mod error;
pub mod plugin;
pub mod settings_persistence;

// Re-export commonly used items
pub use config::GameConfig;
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use settings_persistence::{load_config_from, save_config_to, ConfigPath};
