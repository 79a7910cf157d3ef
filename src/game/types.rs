//! Value types shared by the board, the coordinator and the rules engine seam
//!
//! Everything here is plain data: coordinates, sides, pieces and moves. None of
//! these types know about the ECS, so they can be built freely in tests and by
//! rules engines running on worker threads.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Board coordinate as `(column, row)`, both 0-indexed
///
/// Positions are ordered row-major so that sets of positions iterate the same
/// way every time (handy for logging and for comparing highlight sets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub struct Position {
    pub column: u8,
    pub row: u8,
}

impl Position {
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Whether this position lies on a `size`×`size` board
    pub fn is_within(self, size: u8) -> bool {
        self.column < size && self.row < size
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.column).cmp(&(other.row, other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

impl From<(u8, u8)> for Position {
    fn from((column, row): (u8, u8)) -> Self {
        Self::new(column, row)
    }
}

/// Rule classification of a cell, fixed when the board is built
///
/// Special cells are the four corners and the centre. The rules engine decides
/// what that means for occupancy and captures; the board only records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Reflect)]
pub enum CellKind {
    #[default]
    Ordinary,
    Special,
}

/// One of the two opposing factions
///
/// Attackers are the first side, defenders the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub enum Side {
    Attackers,
    Defenders,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Attackers => Side::Defenders,
            Side::Defenders => Side::Attackers,
        }
    }
}

/// Piece types in Tavlei
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Reflect)]
pub enum PieceKind {
    #[default]
    Warrior,
    King,
}

/// Stable identity of a piece for the lifetime of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Reflect)]
pub struct PieceId(pub u16);

/// A piece on the board
///
/// `position` is kept in step with the board grid by
/// [`BoardState`](crate::game::rules::BoardState); outside code never moves a
/// piece by editing this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Reflect)]
pub struct Piece {
    pub id: PieceId,
    pub side: Side,
    pub kind: PieceKind,
    pub position: Position,
}

impl Piece {
    pub fn new(id: u16, side: Side, kind: PieceKind, position: Position) -> Self {
        Self {
            id: PieceId(id),
            side,
            kind,
            position,
        }
    }
}

/// Immutable move record: start, destination and the positions it defeats
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    start: Position,
    destination: Position,
    defeated: BTreeSet<Position>,
}

impl Move {
    /// Plain relocation with nothing captured
    pub fn new(start: Position, destination: Position) -> Self {
        Self {
            start,
            destination,
            defeated: BTreeSet::new(),
        }
    }

    pub fn with_defeated(
        start: Position,
        destination: Position,
        defeated: impl IntoIterator<Item = Position>,
    ) -> Self {
        Self {
            start,
            destination,
            defeated: defeated.into_iter().collect(),
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn destination(&self) -> Position {
        self.destination
    }

    pub fn defeated(&self) -> &BTreeSet<Position> {
        &self.defeated
    }

    pub fn is_capture(&self) -> bool {
        !self.defeated.is_empty()
    }

    /// Same start and destination, regardless of what the move captures
    ///
    /// Tap-built candidates never know their captures; only the rules engine
    /// does. Membership in a legal-move set is therefore decided by path.
    pub fn same_path(&self, other: &Move) -> bool {
        self.start == other.start && self.destination == other.destination
    }

    /// Destination back to start, capturing nothing
    pub fn inverse(&self) -> Move {
        Move::new(self.destination, self.start)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.start, self.destination)?;
        if self.is_capture() {
            write!(f, " x")?;
            for position in &self.defeated {
                write!(f, " {position}")?;
            }
        }
        Ok(())
    }
}

/// Final result reported by the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub enum GameOutcome {
    /// First side wins
    AttackersWin,
    /// Second side wins
    DefendersWin,
    Draw,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::AttackersWin => Some(Side::Attackers),
            GameOutcome::DefendersWin => Some(Side::Defenders),
            GameOutcome::Draw => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::AttackersWin => "Attackers win",
            GameOutcome::DefendersWin => "Defenders win",
            GameOutcome::Draw => "Draw",
        }
    }
}

/// Who may move which pieces from this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum GameMode {
    /// One device controls both sides (hot seat)
    #[default]
    LocalTwoPlayer,
    /// The human controls `human`; the rules engine plays the other side
    VsComputer { human: Side },
}

impl GameMode {
    /// Whether a tap from this device may originate a move for `side`
    pub fn permits(self, side: Side) -> bool {
        match self {
            GameMode::LocalTwoPlayer => true,
            GameMode::VsComputer { human } => human == side,
        }
    }

    /// Side played by the computer, if any
    pub fn computer_side(self) -> Option<Side> {
        match self {
            GameMode::LocalTwoPlayer => None,
            GameMode::VsComputer { human } => Some(human.opponent()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_orders_row_major() {
        let mut positions = vec![
            Position::new(3, 1),
            Position::new(0, 2),
            Position::new(8, 0),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![Position::new(8, 0), Position::new(3, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(8, 8).is_within(9));
        assert!(!Position::new(9, 0).is_within(9));
        assert!(!Position::new(0, 9).is_within(9));
    }

    #[test]
    fn test_move_same_path_ignores_defeated() {
        let plain = Move::new(Position::new(1, 1), Position::new(1, 4));
        let capture = Move::with_defeated(
            Position::new(1, 1),
            Position::new(1, 4),
            [Position::new(2, 4)],
        );
        assert!(plain.same_path(&capture));
        assert_ne!(plain, capture);
        assert!(capture.is_capture());
        assert!(!plain.is_capture());
    }

    #[test]
    fn test_move_inverse_drops_captures() {
        let capture = Move::with_defeated(
            Position::new(4, 2),
            Position::new(6, 2),
            [Position::new(6, 3)],
        );
        let inverse = capture.inverse();
        assert_eq!(inverse.start(), Position::new(6, 2));
        assert_eq!(inverse.destination(), Position::new(4, 2));
        assert!(inverse.defeated().is_empty());
    }

    #[test]
    fn test_game_mode_gating() {
        assert!(GameMode::LocalTwoPlayer.permits(Side::Attackers));
        assert!(GameMode::LocalTwoPlayer.permits(Side::Defenders));

        let mode = GameMode::VsComputer {
            human: Side::Defenders,
        };
        assert!(mode.permits(Side::Defenders));
        assert!(!mode.permits(Side::Attackers));
        assert_eq!(mode.computer_side(), Some(Side::Attackers));
        assert_eq!(GameMode::LocalTwoPlayer.computer_side(), None);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(GameOutcome::AttackersWin.winner(), Some(Side::Attackers));
        assert_eq!(GameOutcome::DefendersWin.winner(), Some(Side::Defenders));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }
}
