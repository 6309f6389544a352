//! Single-square probing shared by every generator.

use chess_core::{Board, Coord, Side};

/// Outcome of probing one destination square.
///
/// `valid` is true for both empty and enemy-occupied squares; `capture`
/// tells them apart. Off-board and friendly-occupied squares are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub valid: bool,
    pub capture: bool,
}

impl Probe {
    const BLOCKED: Probe = Probe {
        valid: false,
        capture: false,
    };
    const EMPTY: Probe = Probe {
        valid: true,
        capture: false,
    };
    const ENEMY: Probe = Probe {
        valid: true,
        capture: true,
    };

    /// The square is on the board and empty.
    #[inline]
    pub const fn is_quiet(self) -> bool {
        self.valid && !self.capture
    }

    /// The square holds an enemy piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.valid && self.capture
    }
}

/// Classifies `coord` for a piece of `moving_side`.
pub fn probe(board: &Board, moving_side: Side, coord: Coord) -> Probe {
    match board.get(coord).map(|sq| sq.piece) {
        None => Probe::BLOCKED,
        Some(None) => Probe::EMPTY,
        Some(Some(piece)) if piece.side != moving_side => Probe::ENEMY,
        Some(Some(_)) => Probe::BLOCKED,
    }
}
