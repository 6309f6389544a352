//! Board snapshot: an 8x8 grid of squares.

use crate::{Coord, Piece, PieceKind, Side};
use std::fmt;

/// The content of a single board cell.
///
/// `en_passant_eligible` is game-state metadata maintained by whoever applies
/// moves: it marks the pawn that just made a two-square advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Square {
    pub piece: Option<Piece>,
    pub en_passant_eligible: bool,
}

impl Square {
    /// An unoccupied square.
    pub const EMPTY: Square = Square {
        piece: None,
        en_passant_eligible: false,
    };

    #[inline]
    pub const fn occupied(piece: Piece) -> Self {
        Square {
            piece: Some(piece),
            en_passant_eligible: false,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// A read-only snapshot of piece placement, indexed `[row][col]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    /// Returns a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[Square::EMPTY; 8]; 8],
        }
    }

    /// Returns the standard starting position.
    pub fn startpos() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            board.set_piece(Coord::new(0, col), Piece::new(*kind, Side::White));
            board.set_piece(Coord::new(1, col), Piece::new(PieceKind::Pawn, Side::White));
            board.set_piece(Coord::new(6, col), Piece::new(PieceKind::Pawn, Side::Black));
            board.set_piece(Coord::new(7, col), Piece::new(*kind, Side::Black));
        }
        board
    }

    /// Returns the square at `coord`, or `None` when off the board.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<&Square> {
        coord
            .indices()
            .map(|(row, col)| &self.squares[row][col])
    }

    /// Returns the piece at `coord`, if any.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.get(coord).and_then(|sq| sq.piece)
    }

    /// Places a piece, replacing whatever stood there. Off-board coordinates are ignored.
    pub fn set_piece(&mut self, coord: Coord, piece: Piece) {
        if let Some((row, col)) = coord.indices() {
            self.squares[row][col] = Square::occupied(piece);
        }
    }

    /// Empties a square.
    pub fn clear(&mut self, coord: Coord) {
        if let Some((row, col)) = coord.indices() {
            self.squares[row][col] = Square::EMPTY;
        }
    }

    /// Sets or clears the en passant flag on a square.
    pub fn set_en_passant_eligible(&mut self, coord: Coord, eligible: bool) {
        if let Some((row, col)) = coord.indices() {
            self.squares[row][col].en_passant_eligible = eligible;
        }
    }

    /// Iterates over every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(move |coord| self.piece_at(coord).map(|piece| (coord, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

/// Renders the board as eight text lines, rank 8 first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            for col in 0..8 {
                let c = self
                    .piece_at(Coord::new(row, col))
                    .map(Piece::to_fen_char)
                    .unwrap_or('.');
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
