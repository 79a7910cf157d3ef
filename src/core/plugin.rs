//! Core plugin
//!
//! Loads the persisted [`GameConfig`] at startup and writes it back whenever
//! the host app changes it.
//!
//! # Plugin Order
//!
//! Add [`CorePlugin`] before [`crate::game::TavleiPlugin`] so the config is in
//! place before the first game starts. Without it the game plugin runs on the
//! default config (or whatever the host inserted).

use bevy::prelude::*;

use super::config::GameConfig;
use super::settings_persistence::{load_config_system, save_config_system, ConfigPath};

/// Config persistence for the Tavlei core
///
/// # Usage
///
/// ```rust,ignore
/// App::new()
///     .add_plugins(MinimalPlugins)
///     .add_plugins(CorePlugin::default())
///     .add_plugins(TavleiPlugin);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CorePlugin {
    /// Override for the config location; platform config dir when `None`
    pub config_path: Option<std::path::PathBuf>,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let path = self
            .config_path
            .clone()
            .map(ConfigPath)
            .unwrap_or_default();

        app.insert_resource(path)
            .register_type::<GameConfig>()
            .add_systems(PreStartup, load_config_system)
            .add_systems(Last, save_config_system);
    }
}
