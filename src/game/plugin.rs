//! Tavlei plugin - registers the board coordinator with a Bevy app
//!
//! # Plugin Dependencies
//!
//! - [`crate::core::CorePlugin`] - Optional; loads and saves [`GameConfig`]
//! - A [`Rules`](super::resources::Rules) resource must be inserted before
//!   [`StartGame`] is written
//!
//! # Messages
//!
//! Inbound: [`StartGame`], [`EndGame`], [`BoardInput`].
//! Outbound: [`MoveProposed`], [`MoveReverted`], [`GameOverNotification`],
//! [`BoardRedraw`].
//!
//! The plugin adds no rendering or pointer handling. The presentation layer
//! reads the outbound messages and queries
//! [`ActiveGame`](super::resources::ActiveGame) for cell highlights.

use super::events::*;
use super::system_sets::GameSystems;
use super::systems::*;
use super::types::{CellKind, GameMode, GameOutcome, PieceKind, Position, Side};
use crate::core::GameConfig;
use bevy::prelude::*;

/// Board coordinator plugin
pub struct TavleiPlugin;

impl Plugin for TavleiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>();

        app.register_type::<GameConfig>()
            .register_type::<GameMode>()
            .register_type::<Side>()
            .register_type::<PieceKind>()
            .register_type::<CellKind>()
            .register_type::<Position>()
            .register_type::<GameOutcome>();

        app.add_message::<StartGame>()
            .add_message::<EndGame>()
            .add_message::<BoardInput>()
            .add_message::<MoveProposed>()
            .add_message::<MoveReverted>()
            .add_message::<GameOverNotification>()
            .add_message::<BoardRedraw>();

        app.configure_sets(
            Update,
            (
                GameSystems::Lifecycle,
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Publish,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                (end_game_system, start_game_system)
                    .chain()
                    .in_set(GameSystems::Lifecycle),
                (poll_engine_replies, forward_board_input)
                    .chain()
                    .in_set(GameSystems::Input),
                dispatch_game_inputs.in_set(GameSystems::Execution),
                publish_coordinator_events.in_set(GameSystems::Publish),
            ),
        );
    }
}
