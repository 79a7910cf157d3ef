//! Config persistence system
//!
//! Saves and loads [`GameConfig`] to/from a JSON file so the chosen mode and
//! board size survive between sessions.
//!
//! # File Location
//!
//! The config lives in `config.json` in the platform configuration directory
//! (falls back to the working directory when none can be resolved).
//!
//! # Error Handling
//!
//! The path-based functions return [`CoreResult`]. The systems wrapping them
//! never interrupt play:
//! - Load failures (missing, unreadable, invalid) fall back to defaults
//! - Save failures are logged and skipped

use super::config::GameConfig;
use super::error::CoreResult;
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Config filename
const CONFIG_FILENAME: &str = "config.json";

/// Where the config file is read from and written to
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ConfigPath(pub PathBuf);

impl Default for ConfigPath {
    fn default() -> Self {
        Self(default_config_path())
    }
}

/// Resolve `config.json` in the user's configuration directory
///
/// E.g. `~/.config/tavlei/config.json` on Linux.
pub fn default_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "tavlei", "tavlei") {
        proj_dirs.config_dir().join(CONFIG_FILENAME)
    } else {
        PathBuf::from(CONFIG_FILENAME)
    }
}

/// Read and validate a config file
pub fn load_config_from(path: &Path) -> CoreResult<GameConfig> {
    let contents = fs::read_to_string(path)?;
    let config: GameConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Write `config` as pretty JSON, creating parent directories as needed
pub fn save_config_to(path: &Path, config: &GameConfig) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the config on startup
///
/// Keeps an already inserted [`GameConfig`] (set up by the host app) when no
/// file exists, otherwise falls back to defaults.
pub fn load_config_system(
    mut commands: Commands,
    path: Res<ConfigPath>,
    existing: Option<Res<GameConfig>>,
) {
    if path.0.exists() {
        match load_config_from(&path.0) {
            Ok(config) => {
                info!("[CONFIG] Loaded config from {:?}", path.0);
                commands.insert_resource(config);
                return;
            }
            Err(e) => {
                warn!(
                    "[CONFIG] Failed to load config at {:?}: {}. Using defaults.",
                    path.0, e
                );
            }
        }
    } else {
        info!("[CONFIG] No config file found at {:?}", path.0);
    }

    if existing.is_none() {
        commands.insert_resource(GameConfig::default());
    }
}

/// Save the config when it changes
pub fn save_config_system(config: Option<Res<GameConfig>>, path: Res<ConfigPath>) {
    let Some(config) = config else {
        return;
    };
    if !config.is_changed() || config.is_added() {
        return;
    }

    match save_config_to(&path.0, &config) {
        Ok(()) => info!("[CONFIG] Saved config to {:?}", path.0),
        Err(e) => error!("[CONFIG] Failed to save config at {:?}: {}", path.0, e),
    }
}
