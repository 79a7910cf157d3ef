//! Selection and move-highlight state owned by the coordinator

use crate::game::types::{Move, Piece, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Visual state of a single cell, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellHighlight {
    #[default]
    None,
    /// Legal destination that captures nothing
    Move,
    /// Legal destination of a capturing move
    Capture,
}

/// Currently selected piece, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<Piece>,
}

impl Selection {
    pub fn select(&mut self, piece: Piece) {
        self.selected = Some(piece);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.selected.as_ref()
    }

    pub fn position(&self) -> Option<Position> {
        self.selected.map(|piece| piece.position)
    }
}

/// Highlighted destinations, split into reachable and capturing cells
///
/// The two sets are disjoint. A destination reachable by both a plain and a
/// capturing move is shown as a capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    reachable: BTreeSet<Position>,
    capturing: BTreeSet<Position>,
}

impl Highlights {
    /// Replace the current highlights with the destinations of `moves`
    pub fn apply(&mut self, moves: &[Move]) {
        self.clear();
        for mv in moves {
            if mv.is_capture() {
                self.reachable.remove(&mv.destination());
                self.capturing.insert(mv.destination());
            } else if !self.capturing.contains(&mv.destination()) {
                self.reachable.insert(mv.destination());
            }
        }
    }

    pub fn clear(&mut self) {
        self.reachable.clear();
        self.capturing.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.reachable.is_empty() && self.capturing.is_empty()
    }

    pub fn reachable(&self) -> &BTreeSet<Position> {
        &self.reachable
    }

    pub fn capturing(&self) -> &BTreeSet<Position> {
        &self.capturing
    }

    pub fn contains(&self, position: Position) -> bool {
        self.reachable.contains(&position) || self.capturing.contains(&position)
    }

    /// Every highlighted position, row-major
    pub fn all(&self) -> BTreeSet<Position> {
        self.reachable.union(&self.capturing).copied().collect()
    }

    pub fn at(&self, position: Position) -> CellHighlight {
        if self.capturing.contains(&position) {
            CellHighlight::Capture
        } else if self.reachable.contains(&position) {
            CellHighlight::Move
        } else {
            CellHighlight::None
        }
    }
}
