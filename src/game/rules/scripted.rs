//! Table-driven rules engine
//!
//! [`ScriptedRules`] answers legality queries from a lookup table and commits
//! whatever it is asked to commit unless the path was scripted to fail. It is
//! the stand-in engine for hot-seat tooling and for tests; it never computes
//! legality or captures on its own.
//!
//! # Computer replies
//!
//! Follow-up notifications (a computer move, a game over) can be queued with
//! [`ScriptedRules::queue_follow_up`]. Each accepted proposal releases the next
//! queued batch after the commit echo. With [`ScriptedRules::on_worker`] the
//! whole answer is produced on the async compute pool, the way a real engine
//! would think about its reply off the main thread.

use super::engine::{EngineNotification, EngineReply, MoveProposal, RulesEngine};
use super::layout::tavlei_9x9;
use crate::game::types::{Move, Piece, Position};
use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, TaskPool};
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Default)]
pub struct ScriptedRules {
    opening: Vec<Piece>,
    legal: HashMap<Position, Vec<Move>>,
    rejections: Vec<(Move, String)>,
    follow_ups: VecDeque<Vec<EngineNotification>>,
    submitted: Vec<MoveProposal>,
    on_worker: bool,
    offline: bool,
}

impl ScriptedRules {
    /// Engine with the given opening and no legal moves yet
    pub fn new(opening: Vec<Piece>) -> Self {
        Self {
            opening,
            ..default()
        }
    }

    /// Engine with the standard 9×9 Tavlei opening
    pub fn tavlei() -> Self {
        Self::new(tavlei_9x9())
    }

    /// Answer proposals on the async compute pool instead of inline
    pub fn on_worker(mut self) -> Self {
        self.on_worker = true;
        self
    }

    pub fn with_legal_moves(mut self, from: Position, moves: Vec<Move>) -> Self {
        self.set_legal_moves(from, moves);
        self
    }

    /// Replace the legal-move table entry for `from`
    pub fn set_legal_moves(&mut self, from: Position, moves: Vec<Move>) {
        self.legal.insert(from, moves);
    }

    pub fn clear_legal_moves(&mut self) {
        self.legal.clear();
    }

    /// Answer any proposal along the same path as `mv` with a rule violation
    pub fn reject(&mut self, mv: Move, reason: impl Into<String>) {
        self.rejections.push((mv, reason.into()));
    }

    /// Release `notifications` after the next accepted proposal
    pub fn queue_follow_up(&mut self, notifications: Vec<EngineNotification>) {
        self.follow_ups.push_back(notifications);
    }

    /// While offline the engine cannot answer legality queries
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Every proposal received so far, oldest first
    pub fn submitted(&self) -> &[MoveProposal] {
        &self.submitted
    }

    fn answer(&mut self, proposal: &MoveProposal) -> Vec<EngineNotification> {
        if let Some((_, reason)) = self
            .rejections
            .iter()
            .find(|(mv, _)| mv.same_path(&proposal.mv))
        {
            return vec![EngineNotification::RuleViolated(reason.clone())];
        }

        let mut notifications = vec![EngineNotification::MoveCommitted(proposal.mv.clone())];
        if let Some(follow_up) = self.follow_ups.pop_front() {
            notifications.extend(follow_up);
        }
        notifications
    }
}

impl RulesEngine for ScriptedRules {
    fn starting_position(&self) -> Vec<Piece> {
        self.opening.clone()
    }

    fn legal_moves_from(&self, from: Position) -> Option<Vec<Move>> {
        if self.offline {
            return None;
        }
        self.legal.get(&from).cloned()
    }

    fn submit(&mut self, proposal: &MoveProposal) -> EngineReply {
        self.submitted.push(proposal.clone());
        let notifications = self.answer(proposal);

        if !self.on_worker {
            return EngineReply::Ready(notifications);
        }

        debug!("[ENGINE] Answering {} on worker", proposal.mv);
        let task = AsyncComputeTaskPool::get_or_init(TaskPool::default)
            .spawn(async move { notifications });
        EngineReply::Pending(task)
    }
}
