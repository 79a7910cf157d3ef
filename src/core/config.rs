//! Game configuration
//!
//! Board size and game mode are read-only inputs to a game instance. They are
//! handed to the coordinator when the game starts; changing the resource later
//! only affects the next game.

use super::error::{CoreError, CoreResult};
use crate::game::types::{GameMode, Side};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Configuration for the next game instance
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side; Tavlei is played on 9
    pub board_size: u8,

    /// Which sides this device may move
    pub mode: GameMode,
}

impl GameConfig {
    pub const DEFAULT_BOARD_SIZE: u8 = 9;
    pub const MIN_BOARD_SIZE: u8 = 5;
    pub const MAX_BOARD_SIZE: u8 = 19;

    pub fn local_two_player() -> Self {
        Self::default()
    }

    pub fn vs_computer(human: Side) -> Self {
        Self {
            mode: GameMode::VsComputer { human },
            ..default()
        }
    }

    pub fn with_board_size(mut self, board_size: u8) -> Self {
        self.board_size = board_size;
        self
    }

    /// Board must be odd-sized (it needs a centre cell) and within range
    pub fn validate(&self) -> CoreResult<()> {
        let size = self.board_size;
        if !(Self::MIN_BOARD_SIZE..=Self::MAX_BOARD_SIZE).contains(&size) {
            return Err(CoreError::InvalidConfig {
                message: format!(
                    "board size {size} outside {}..={}",
                    Self::MIN_BOARD_SIZE,
                    Self::MAX_BOARD_SIZE
                ),
            });
        }
        if size % 2 == 0 {
            return Err(CoreError::InvalidConfig {
                message: format!("board size {size} has no centre cell"),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: Self::DEFAULT_BOARD_SIZE,
            mode: GameMode::LocalTwoPlayer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nine_by_nine_hot_seat() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 9);
        assert_eq!(config.mode, GameMode::LocalTwoPlayer);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_even_and_out_of_range_sizes() {
        assert!(GameConfig::default().with_board_size(8).validate().is_err());
        assert!(GameConfig::default().with_board_size(3).validate().is_err());
        assert!(GameConfig::default().with_board_size(21).validate().is_err());
        assert!(GameConfig::default().with_board_size(11).validate().is_ok());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GameConfig::vs_computer(Side::Defenders).with_board_size(11);
        let json = serde_json::to_string(&config).expect("serialize");
        let parsed: GameConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: GameConfig = serde_json::from_str(r#"{ "board_size": 7 }"#).expect("parse");
        assert_eq!(parsed.board_size, 7);
        assert_eq!(parsed.mode, GameMode::LocalTwoPlayer);
    }
}
