//! Selection & turn coordinator - the board's state machine
//!
//! The coordinator owns the [`BoardState`] for one game and is the only thing
//! that mutates it. It turns taps into selections and move proposals, and turns
//! rules engine notifications back into board changes.
//!
//! # States
//!
//! ```text
//!            tap own piece                 tap legal destination
//!   Idle ─────────────────▶ PieceSelected ───────────────────────▶ Idle
//!    ▲                        │    ▲   │                      (MoveProposed)
//!    │      deselect / undo   │    └───┘ tap own piece
//!    └────────────────────────┘          (re-select)
//! ```
//!
//! Rejected taps (wrong side, destination not in the legal set) change
//! nothing. The player simply taps again.
//!
//! # Engine notifications
//!
//! - `MoveCommitted` applies the move whatever the selection is. The echo of a
//!   move we already applied finds its start cell empty and is a no-op.
//! - `RuleViolated` undoes the last local move.
//! - `GameOver` is forwarded to the presentation layer; taps stay open.

use crate::core::config::GameConfig;
use crate::game::error::GameResult;
use crate::game::rules::{BoardState, EngineNotification, RulesEngine};
use crate::game::selection::{CellHighlight, Highlights, Selection};
use crate::game::channel::GameInput;
use crate::game::types::{CellKind, GameOutcome, Move, Piece, Position, Side};
use bevy::prelude::*;

/// Coordinator state as seen from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    PieceSelected,
}

/// Everything the coordinator publishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinatorEvent {
    /// A locally validated move was applied and needs engine commitment
    MoveProposed { mv: Move, side: Side },
    /// `mv` was rolled back on the board
    MoveReverted { mv: Move },
    GameOverNotification { outcome: GameOutcome },
    /// Board changed outside a tap; the presentation should redraw
    RedrawRequested,
}

/// Per-game coordinator owning board, selection and highlights
#[derive(Debug)]
pub struct Coordinator {
    config: GameConfig,
    board: BoardState,
    selection: Selection,
    highlights: Highlights,
    last_move: Option<Move>,
    /// Pieces the last local move captured, restored by undo
    last_captured: Vec<Piece>,
    history: Vec<Move>,
    outcome: Option<GameOutcome>,
    events: Vec<CoordinatorEvent>,
}

impl Coordinator {
    /// Build the board for `config` and fill it with the opening snapshot
    pub fn new(config: GameConfig, opening: impl IntoIterator<Item = Piece>) -> GameResult<Self> {
        let mut board = BoardState::new(config.board_size)?;
        for piece in opening {
            board.place(piece, piece.position)?;
        }
        info!(
            "[COORD] New {}x{} game ({:?}) with {} pieces",
            config.board_size,
            config.board_size,
            config.mode,
            board.piece_count()
        );

        Ok(Self {
            config,
            board,
            selection: Selection::default(),
            highlights: Highlights::default(),
            last_move: None,
            last_captured: Vec::new(),
            history: Vec::new(),
            outcome: None,
            events: Vec::new(),
        })
    }

    /// Build a game from the engine's own starting position
    pub fn from_engine(config: GameConfig, rules: &dyn RulesEngine) -> GameResult<Self> {
        Self::new(config, rules.starting_position())
    }

    /// Dispatch one serialized input
    pub fn handle(&mut self, input: GameInput, rules: &dyn RulesEngine) -> GameResult<()> {
        match input {
            GameInput::Tap { target, is_piece } => self.on_tap(target, is_piece, rules),
            GameInput::Deselect => {
                self.deselect();
                Ok(())
            }
            GameInput::Undo => self.undo(),
            GameInput::Engine(notification) => self.on_notification(notification, rules),
        }
    }

    /// The single entry point for player interaction
    ///
    /// `target_is_piece` tells whether the presentation layer hit a piece. A
    /// piece tap selects (when the side may be played from this device);
    /// anything else is a move attempt for the current selection.
    pub fn on_tap(
        &mut self,
        target: Position,
        target_is_piece: bool,
        rules: &dyn RulesEngine,
    ) -> GameResult<()> {
        self.board.cell_at(target)?;

        if target_is_piece {
            if let Some(piece) = self.board.piece_at(target).copied() {
                if !self.config.mode.permits(piece.side) {
                    debug!("[COORD] Ignoring tap on {:?} piece at {target}", piece.side);
                    return Ok(());
                }
                self.select_piece(piece, rules);
                return Ok(());
            }
        }

        let Some(selected) = self.selection.piece().copied() else {
            return Ok(());
        };
        self.local_move(selected, target, rules)
    }

    /// Drop the selection and its highlights
    pub fn deselect(&mut self) {
        self.highlights.clear();
        self.selection.clear();
    }

    /// Deselect and forget the last local move
    pub fn reset(&mut self) {
        self.deselect();
        self.last_move = None;
        self.last_captured.clear();
    }

    /// Roll back the last local move by replaying its inverse
    ///
    /// Legality is not checked: the move being reverted is history. Pieces
    /// the move captured go back on their cells. When the board has moved on
    /// (the piece left the destination, or its start is now taken) the undo is
    /// dropped and the board stays as it is.
    pub fn undo(&mut self) -> GameResult<()> {
        let Some(mv) = self.last_move.take() else {
            debug!("[COORD] Nothing to undo");
            return Ok(());
        };
        let captured = std::mem::take(&mut self.last_captured);

        self.deselect();
        let inverse = mv.inverse();
        if self.board.apply_move(&inverse)? {
            for piece in captured {
                if let Err(e) = self.board.place(piece, piece.position) {
                    warn!("[COORD] Could not restore captured piece: {e}");
                }
            }
            info!("[COORD] Undid {mv}");
            if self.history.last().is_some_and(|last| last.same_path(&mv)) {
                self.history.pop();
            }
            self.events.push(CoordinatorEvent::MoveReverted { mv });
        } else {
            warn!("[COORD] Could not undo {mv}: board has moved on");
        }
        self.events.push(CoordinatorEvent::RedrawRequested);
        Ok(())
    }

    /// Apply one rules engine notification
    pub fn on_notification(
        &mut self,
        notification: EngineNotification,
        rules: &dyn RulesEngine,
    ) -> GameResult<()> {
        match notification {
            EngineNotification::MoveCommitted(mv) => {
                if self.board.apply_move(&mv)? {
                    debug!("[COORD] Applied committed move {mv}");
                }
                self.history.push(mv);
                self.refresh_selection(rules);
                self.events.push(CoordinatorEvent::RedrawRequested);
            }
            EngineNotification::RuleViolated(reason) => {
                warn!("[COORD] Game rule broken: {reason}");
                self.undo()?;
            }
            EngineNotification::GameOver(outcome) => {
                info!("[COORD] Game over: {}", outcome.message());
                self.outcome = Some(outcome);
                self.events
                    .push(CoordinatorEvent::GameOverNotification { outcome });
            }
        }
        Ok(())
    }

    /// Take every event published since the last call
    pub fn drain_events(&mut self) -> Vec<CoordinatorEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[CoordinatorEvent] {
        &self.events
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn board_size(&self) -> u8 {
        self.board.size()
    }

    pub fn cell_kind_at(&self, position: Position) -> GameResult<CellKind> {
        self.board.cell_at(position)
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.board.piece_at(position)
    }

    pub fn cell_highlight(&self, position: Position) -> CellHighlight {
        self.highlights.at(position)
    }

    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    pub fn selected(&self) -> Option<&Piece> {
        self.selection.piece()
    }

    pub fn state(&self) -> CoordinatorState {
        if self.selection.is_selected() {
            CoordinatorState::PieceSelected
        } else {
            CoordinatorState::Idle
        }
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    /// Moves the engine has committed, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    fn select_piece(&mut self, piece: Piece, rules: &dyn RulesEngine) {
        self.highlights.clear();
        self.selection.select(piece);
        let moves = legal_moves(rules, piece.position);
        self.highlights.apply(&moves);
        debug!(
            "[COORD] Selected {:?} {:?} at {} ({} legal moves)",
            piece.side,
            piece.kind,
            piece.position,
            moves.len()
        );
    }

    fn local_move(
        &mut self,
        selected: Piece,
        target: Position,
        rules: &dyn RulesEngine,
    ) -> GameResult<()> {
        let candidate = Move::new(selected.position, target);
        if !self.config.mode.permits(selected.side) {
            debug!("[COORD] Ignoring {candidate}: {:?} is not ours", selected.side);
            return Ok(());
        }

        let Some(mv) = legal_moves(rules, selected.position)
            .into_iter()
            .find(|legal| legal.same_path(&candidate))
        else {
            debug!("[COORD] Ignoring illegal move {candidate}");
            return Ok(());
        };

        let captured = self.board.defeated_pieces(&mv);
        if !self.board.apply_move(&mv)? {
            debug!("[COORD] Ignoring {mv}: destination is taken");
            return Ok(());
        }
        self.last_move = Some(mv.clone());
        self.last_captured = captured;
        self.highlights.clear();
        self.selection.clear();
        debug!("[COORD] Proposing {mv} for {:?}", selected.side);
        self.events.push(CoordinatorEvent::MoveProposed {
            mv,
            side: selected.side,
        });
        Ok(())
    }

    /// Keep selection and highlights true to the board after an outside change
    fn refresh_selection(&mut self, rules: &dyn RulesEngine) {
        let Some(selected) = self.selection.piece().copied() else {
            return;
        };
        match self.board.piece_at(selected.position).copied() {
            Some(piece) if piece.id == selected.id => self.select_piece(piece, rules),
            _ => {
                debug!("[COORD] Selected piece left {}, deselecting", selected.position);
                self.deselect();
            }
        }
    }
}

/// Legal moves for the piece at `from`; an engine that cannot answer yields none
fn legal_moves(rules: &dyn RulesEngine, from: Position) -> Vec<Move> {
    rules.legal_moves_from(from).unwrap_or_else(|| {
        debug!("[COORD] Rules engine has no answer for {from}");
        Vec::new()
    })
}
