//! Bevy messages in and out of the board coordinator
//!
//! Inbound messages are forwarded onto the active game's channel in the order
//! they were written. Outbound messages mirror
//! [`CoordinatorEvent`](crate::game::coordinator::CoordinatorEvent) for the
//! presentation layer.

use crate::game::channel::GameInput;
use crate::game::rules::EngineNotification;
use crate::game::types::{GameOutcome, Move, Position, Side};
use bevy::prelude::*;

/// Build a fresh game from [`GameConfig`](crate::core::GameConfig) and the
/// current [`Rules`](crate::game::resources::Rules), replacing any running one
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct StartGame;

/// Tear down the active game and its channel
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct EndGame;

/// Anything that should reach the coordinator
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct BoardInput(pub GameInput);

impl BoardInput {
    /// Player tapped `target`; `is_piece` when the tap hit a piece
    pub fn tap(target: Position, is_piece: bool) -> Self {
        Self(GameInput::Tap { target, is_piece })
    }

    pub fn deselect() -> Self {
        Self(GameInput::Deselect)
    }

    pub fn undo() -> Self {
        Self(GameInput::Undo)
    }

    /// Notification from an engine living outside the [`Rules`](crate::game::resources::Rules) resource
    pub fn engine(notification: EngineNotification) -> Self {
        Self(GameInput::Engine(notification))
    }
}

/// A move was applied locally and sent to the rules engine
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct MoveProposed {
    pub mv: Move,
    pub side: Side,
}

/// A local move was rolled back
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct MoveReverted {
    pub mv: Move,
}

/// Terminal result for the presentation layer to announce
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverNotification {
    pub outcome: GameOutcome,
}

/// The board changed without a local tap
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct BoardRedraw;
