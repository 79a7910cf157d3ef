//! Rules engine seam
//!
//! The coordinator never decides legality or captures itself. It asks a
//! [`RulesEngine`] which moves a piece may make, hands it every locally
//! validated proposal and applies whatever the engine reports back.
//!
//! # Replies
//!
//! An engine answers a proposal with an [`EngineReply`]:
//! - `Ready` when the answer is known immediately (a hot-seat echo or a
//!   rejection)
//! - `Pending` when it needs a worker, e.g. while computing a computer reply on
//!   the [`AsyncComputeTaskPool`](bevy::tasks::AsyncComputeTaskPool)
//!
//! Either way the notifications land on the game channel and are applied in
//! arrival order by the single dispatch system; nothing waits on the worker.

use crate::game::types::{GameOutcome, Move, Piece, Position, Side};
use bevy::tasks::Task;
use serde::{Deserialize, Serialize};

/// A locally validated move handed to the engine for commitment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveProposal {
    pub mv: Move,
    pub side: Side,
}

/// What the engine reports back onto the game channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineNotification {
    /// A move is now part of game history, whether proposed locally or by
    /// the computer
    MoveCommitted(Move),
    /// The most recent local proposal broke a rule
    RuleViolated(String),
    GameOver(GameOutcome),
}

/// Answer to a [`MoveProposal`]
pub enum EngineReply {
    Ready(Vec<EngineNotification>),
    Pending(Task<Vec<EngineNotification>>),
}

impl EngineReply {
    pub fn none() -> Self {
        EngineReply::Ready(Vec::new())
    }
}

impl std::fmt::Debug for EngineReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineReply::Ready(notifications) => {
                f.debug_tuple("Ready").field(notifications).finish()
            }
            EngineReply::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// Interface consumed from the rules engine
pub trait RulesEngine: Send + Sync + 'static {
    /// Pieces of the opening position, each with its starting position
    fn starting_position(&self) -> Vec<Piece>;

    /// Legal moves for the piece at `from`
    ///
    /// `None` means the engine cannot answer right now (for example between
    /// games) and is treated exactly like an empty set.
    fn legal_moves_from(&self, from: Position) -> Option<Vec<Move>>;

    /// Take a locally validated proposal and answer it
    fn submit(&mut self, proposal: &MoveProposal) -> EngineReply;
}
