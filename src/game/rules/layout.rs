//! Opening layouts
//!
//! Data-driven piece setup: a layout is a list of rows drawn as text, parsed
//! into pieces with stable ids. Rules engines hand the result out from
//! [`RulesEngine::starting_position`](super::RulesEngine::starting_position).
//!
//! | Glyph | Piece |
//! |-------|-------|
//! | `A`   | Attacker warrior |
//! | `D`   | Defender warrior |
//! | `K`   | Defender king |
//! | `.`   | Empty |
//!
//! Row 0 is the first line of the drawing.

use crate::game::error::{GameError, GameResult};
use crate::game::types::{Piece, PieceKind, Position, Side};

/// Standard 9×9 Tavlei opening: king on the centre throne, eight defenders in
/// a cross around it, sixteen attackers in T-shapes on the edges
pub const TAVLEI_9X9: [&str; 9] = [
    "...AAA...",
    "....A....",
    "....D....",
    "A...D...A",
    "AADDKDDAA",
    "A...D...A",
    "....D....",
    "....A....",
    "...AAA...",
];

pub fn tavlei_9x9() -> Vec<Piece> {
    parse_layout(&TAVLEI_9X9).unwrap_or_default()
}

/// Parse a square text drawing into pieces, ids assigned row-major from 0
pub fn parse_layout<S: AsRef<str>>(rows: &[S]) -> GameResult<Vec<Piece>> {
    let size = rows.len();
    if size > usize::from(u8::MAX) {
        return Err(GameError::InvalidLayout {
            message: format!("{size} rows is more than a board can hold"),
        });
    }

    let mut pieces = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let width = line.chars().count();
        if width != size {
            return Err(GameError::InvalidLayout {
                message: format!("row {row} has {width} cells, expected {size}"),
            });
        }

        for (column, glyph) in line.chars().enumerate() {
            let (side, kind) = match glyph {
                '.' => continue,
                'A' => (Side::Attackers, PieceKind::Warrior),
                'D' => (Side::Defenders, PieceKind::Warrior),
                'K' => (Side::Defenders, PieceKind::King),
                other => {
                    return Err(GameError::InvalidLayout {
                        message: format!("unknown glyph '{other}' at ({column}, {row})"),
                    })
                }
            };
            let id = u16::try_from(pieces.len()).map_err(|_| GameError::InvalidLayout {
                message: "too many pieces".to_string(),
            })?;
            pieces.push(Piece::new(
                id,
                side,
                kind,
                Position::new(column as u8, row as u8),
            ));
        }
    }
    Ok(pieces)
}
