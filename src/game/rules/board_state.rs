//! Board state: the single source of truth for what stands where

use crate::game::error::{GameError, GameResult};
use crate::game::types::{CellKind, Move, Piece, Position, Side};
use bevy::prelude::*;

/// Dense occupancy grid plus the cell classification fixed at construction
///
/// Cells are stored row-major (`row * size + column`), so every lookup is a
/// single index. Each stored piece carries its own position, and that position
/// always equals the cell it is stored in.
#[derive(Debug, Clone)]
pub struct BoardState {
    size: u8,
    cells: Vec<CellKind>,
    occupants: Vec<Option<Piece>>,
}

impl BoardState {
    /// Smallest board that still has distinct corners and centre
    pub const MIN_SIZE: u8 = 3;

    /// Build an empty `size`×`size` board with corners and centre marked special
    pub fn new(size: u8) -> GameResult<Self> {
        if size < Self::MIN_SIZE {
            return Err(GameError::InvalidBoardSize {
                size,
                message: format!("must be at least {}", Self::MIN_SIZE),
            });
        }

        let len = usize::from(size) * usize::from(size);
        let mut cells = vec![CellKind::Ordinary; len];
        for position in special_cells(size) {
            cells[index_of(size, position)] = CellKind::Special;
        }

        Ok(Self {
            size,
            cells,
            occupants: vec![None; len],
        })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.is_within(self.size)
    }

    pub fn cell_at(&self, position: Position) -> GameResult<CellKind> {
        let index = self.checked_index(position)?;
        Ok(self.cells[index])
    }

    /// Piece at `position`; positions off the board read as empty
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        if !self.contains(position) {
            return None;
        }
        self.occupants[index_of(self.size, position)].as_ref()
    }

    pub fn is_empty(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// Put `piece` on `position`, overwriting its recorded position
    pub fn place(&mut self, mut piece: Piece, position: Position) -> GameResult<()> {
        let index = self.checked_index(position)?;
        if self.occupants[index].is_some() {
            return Err(GameError::OccupiedCell { position });
        }
        piece.position = position;
        self.occupants[index] = Some(piece);
        Ok(())
    }

    /// Relocate the piece at `mv.start()` and remove every defeated piece
    ///
    /// Returns `Ok(false)` without touching the board when the start cell is
    /// empty or the destination is occupied: a move that arrives after the
    /// board has moved on is stale, not an error.
    pub fn apply_move(&mut self, mv: &Move) -> GameResult<bool> {
        let from = self.checked_index(mv.start())?;
        let to = self.checked_index(mv.destination())?;

        if self.occupants[from].is_none() {
            debug!("[BOARD] Stale move {mv}: no piece at {}", mv.start());
            return Ok(false);
        }
        if from != to && self.occupants[to].is_some() {
            debug!("[BOARD] Stale move {mv}: {} is occupied", mv.destination());
            return Ok(false);
        }

        let Some(mut piece) = self.occupants[from].take() else {
            return Ok(false);
        };
        piece.position = mv.destination();
        self.occupants[to] = Some(piece);

        for &defeated in mv.defeated() {
            if defeated == mv.destination() {
                continue;
            }
            if self.remove_at(defeated).is_some() {
                debug!("[BOARD] Captured piece at {defeated}");
            }
        }
        Ok(true)
    }

    /// Pieces `mv` would capture if applied now
    pub fn defeated_pieces(&self, mv: &Move) -> Vec<Piece> {
        mv.defeated()
            .iter()
            .filter(|&&position| position != mv.destination())
            .filter_map(|&position| self.piece_at(position).copied())
            .collect()
    }

    /// Remove and return the piece at `position`, if any
    pub fn remove_at(&mut self, position: Position) -> Option<Piece> {
        if !self.contains(position) {
            return None;
        }
        self.occupants[index_of(self.size, position)].take()
    }

    /// All pieces, row-major
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.occupants.iter().flatten()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn count_side(&self, side: Side) -> usize {
        self.pieces().filter(|piece| piece.side == side).count()
    }

    fn checked_index(&self, position: Position) -> GameResult<usize> {
        if self.contains(position) {
            Ok(index_of(self.size, position))
        } else {
            Err(GameError::OutOfBounds {
                position,
                size: self.size,
            })
        }
    }
}

fn index_of(size: u8, position: Position) -> usize {
    usize::from(position.row) * usize::from(size) + usize::from(position.column)
}

/// Corners and centre of a `size`×`size` board
pub fn special_cells(size: u8) -> [Position; 5] {
    let last = size.saturating_sub(1);
    let mid = size / 2;
    [
        Position::new(0, 0),
        Position::new(last, 0),
        Position::new(0, last),
        Position::new(last, last),
        Position::new(mid, mid),
    ]
}
