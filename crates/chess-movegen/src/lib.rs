//! Pseudo-legal move generation for a single piece.
//!
//! Given a read-only [`Board`] snapshot and a coordinate, this crate lists
//! every destination the piece's movement geometry allows: on the board, not
//! onto a friendly piece, with captures resolved. Moves are not checked for
//! leaving the mover's king in check, and castling and promotion are left
//! to callers.
//!
//! # Architecture
//!
//! Every generator is built on [`probe`], which classifies one square as
//! off-board, empty, friendly or enemy:
//! - sliding pieces cast rays along the [`ROOK_DIRECTIONS`] and
//!   [`BISHOP_DIRECTIONS`] tables
//! - knights and kings probe the [`KNIGHT_OFFSETS`] and [`KING_OFFSETS`] tables
//! - pawns have their own generator for pushes, captures and en passant
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Coord};
//! use chess_movegen::moves_at;
//!
//! let board = Board::startpos();
//! let moves = moves_at(&board, Coord::from_algebraic("g1").unwrap()).unwrap();
//! assert_eq!(moves.len(), 2);
//! ```

mod leaper;
mod list;
mod pawn;
mod probe;
mod ray;

use chess_core::{Board, CandidateMove, Coord, Piece, PieceKind, Side};

pub use leaper::{offset_moves, KING_OFFSETS, KNIGHT_OFFSETS};
pub use list::MoveList;
pub use pawn::pawn_moves;
pub use probe::{probe, Probe};
pub use ray::{cast_ray, slider_moves, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

/// A (row, col) step.
pub type Delta = (i8, i8);

/// Generates pseudo-legal moves for `piece` standing on `from`.
///
/// The caller guarantees that `board` actually holds `piece` at `from`; this
/// is not re-checked. The result is ordered by the direction tables of the
/// piece's generator.
pub fn possible_moves(board: &Board, piece: Piece, from: Coord) -> MoveList {
    let side = piece.side;
    match piece.kind {
        PieceKind::King => offset_moves(board, side, from, &KING_OFFSETS),
        PieceKind::Queen => slider_moves(board, side, from, &QUEEN_DIRECTIONS),
        PieceKind::Bishop => slider_moves(board, side, from, &BISHOP_DIRECTIONS),
        PieceKind::Knight => offset_moves(board, side, from, &KNIGHT_OFFSETS),
        PieceKind::Rook => slider_moves(board, side, from, &ROOK_DIRECTIONS),
        PieceKind::Pawn => pawn_moves(board, side, from),
    }
}

/// Generates moves for whatever piece stands on `coord`.
///
/// Returns `None` for an empty or off-board square.
pub fn moves_at(board: &Board, coord: Coord) -> Option<MoveList> {
    board
        .piece_at(coord)
        .map(|piece| possible_moves(board, piece, coord))
}

/// Generates moves for every piece of `side`, in row-major board order.
pub fn side_moves(board: &Board, side: Side) -> Vec<CandidateMove> {
    let mut moves = Vec::new();
    for (coord, piece) in board.pieces().filter(|(_, piece)| piece.side == side) {
        moves.extend_from_slice(possible_moves(board, piece, coord).as_slice());
    }
    moves
}
