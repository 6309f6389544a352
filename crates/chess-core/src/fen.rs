//! FEN (Forsyth-Edwards Notation) board loading and serialization.
//!
//! Only the fields that affect move generation are interpreted: piece
//! placement and the en passant target. The remaining fields of a full FEN
//! are checked for shape and otherwise ignored.

use crate::{Board, Coord, Piece, PieceKind, Side};
use thiserror::Error;

/// Errors that can occur when loading a board from FEN.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),
}

/// The standard starting position FEN.
pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Loads a board from a full six-field FEN or a bare placement field.
    ///
    /// When the en passant field names a target square, the pawn that just
    /// advanced past it is flagged `en_passant_eligible`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        match parts.len() {
            1 => Self::from_placement(parts[0]),
            6 => {
                let mut board = Self::from_placement(parts[0])?;
                if !matches!(parts[1], "w" | "b") {
                    return Err(FenError::InvalidActiveColor(parts[1].to_string()));
                }
                if let Some(pawn) = en_passant_pawn(parts[3])? {
                    match board.piece_at(pawn.coord) {
                        Some(p) if p == Piece::new(PieceKind::Pawn, pawn.side) => {
                            board.set_en_passant_eligible(pawn.coord, true);
                        }
                        _ => return Err(FenError::InvalidEnPassantSquare(parts[3].to_string())),
                    }
                }
                Ok(board)
            }
            n => Err(FenError::InvalidPartCount(n)),
        }
    }

    /// Loads a board from the piece placement field alone.
    pub fn from_placement(placement: &str) -> Result<Self, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (i, rank) in ranks.iter().enumerate() {
            let row = 7 - i as i8;
            let mut col: u32 = 0;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    board.set_piece(Coord::new(row, col as i8), piece);
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
                if col > 8 {
                    break;
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - i,
                    col
                )));
            }
        }

        Ok(board)
    }

    /// Serializes the piece placement field.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for row in (0..8).rev() {
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Coord::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }
}

struct EnPassantPawn {
    coord: Coord,
    side: Side,
}

/// Maps an en passant target (e.g. "e3") to the pawn that just double-pushed.
fn en_passant_pawn(field: &str) -> Result<Option<EnPassantPawn>, FenError> {
    if field == "-" {
        return Ok(None);
    }

    let target =
        Coord::from_algebraic(field).ok_or_else(|| FenError::InvalidEnPassantSquare(field.to_string()))?;

    // The pushed pawn stands one row past the target, in its own direction.
    let side = match target.row {
        2 => Side::White,
        5 => Side::Black,
        _ => return Err(FenError::InvalidEnPassantSquare(field.to_string())),
    };
    Ok(Some(EnPassantPawn {
        coord: target.offset(side.pawn_direction(), 0),
        side,
    }))
}
