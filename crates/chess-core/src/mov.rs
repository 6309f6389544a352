//! Candidate move representation.

use crate::Coord;
use std::fmt;

/// A pseudo-legal move that has not been applied to any board.
///
/// Produced fresh by each generation query. `from` is always the queried
/// coordinate and `to` is always on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub from: Coord,
    pub to: Coord,
    pub is_capture: bool,
    pub is_en_passant: bool,
}

impl CandidateMove {
    /// Creates a move onto an empty square.
    #[inline]
    pub const fn quiet(from: Coord, to: Coord) -> Self {
        CandidateMove {
            from,
            to,
            is_capture: false,
            is_en_passant: false,
        }
    }

    /// Creates a move that captures the piece standing on `to`.
    #[inline]
    pub const fn capture(from: Coord, to: Coord) -> Self {
        CandidateMove {
            from,
            to,
            is_capture: true,
            is_en_passant: false,
        }
    }

    /// Creates a pawn move that captures en passant.
    ///
    /// `to` is the empty square behind the captured pawn, so `is_capture`
    /// stays false; `is_capture` only marks an enemy piece on `to`.
    #[inline]
    pub const fn en_passant(from: Coord, to: Coord) -> Self {
        CandidateMove {
            from,
            to,
            is_capture: false,
            is_en_passant: true,
        }
    }

    /// Returns true if the destination lies on the given row.
    #[inline]
    pub const fn reaches_row(self, row: i8) -> bool {
        self.to.row == row
    }

    /// Returns the UCI-style notation for this move (e.g., "e2e4").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Placeholder for unused list slots.
    pub const NULL: CandidateMove = CandidateMove::quiet(Coord::new(0, 0), Coord::new(0, 0));
}

impl fmt::Debug for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.is_en_passant {
            " e.p."
        } else if self.is_capture {
            " x"
        } else {
            ""
        };
        write!(f, "Move({}{})", self.to_uci(), suffix)
    }
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
