//! Pawn move generation.
//!
//! Moves are emitted in a fixed order: single push, capture toward the
//! lower column, capture toward the higher column, double push, then en
//! passant toward the lower and the higher column. Promotion is not
//! resolved here; a push or capture onto the last row is an ordinary move.

use crate::probe::probe;
use crate::MoveList;
use chess_core::{Board, CandidateMove, Coord, Side};

/// Column deltas of the two diagonals, lower column first.
const DIAGONALS: [i8; 2] = [-1, 1];

/// Generates pseudo-legal moves for a pawn of `side` standing on `from`.
pub fn pawn_moves(board: &Board, side: Side, from: Coord) -> MoveList {
    let mut moves = MoveList::new();
    let dir = side.pawn_direction();

    // Pushes never capture, so the destination must be empty.
    let single = from.offset(dir, 0);
    let single_open = probe(board, side, single).is_quiet();
    if single_open {
        moves.push(CandidateMove::quiet(from, single));
    }

    for col_delta in DIAGONALS {
        let to = from.offset(dir, col_delta);
        if probe(board, side, to).is_capture() {
            moves.push(CandidateMove::capture(from, to));
        }
    }

    if from.row == side.pawn_home_row() && single_open {
        let double = from.offset(2 * dir, 0);
        if probe(board, side, double).is_quiet() {
            moves.push(CandidateMove::quiet(from, double));
        }
    }

    for col_delta in DIAGONALS {
        let beside = from.offset(0, col_delta);
        if !is_en_passant_victim(board, side, beside) {
            continue;
        }
        let to = from.offset(dir, col_delta);
        if probe(board, side, to).is_quiet() {
            moves.push(CandidateMove::en_passant(from, to));
        }
    }

    moves
}

/// True when `coord` holds an enemy piece flagged as having just double-pushed.
fn is_en_passant_victim(board: &Board, side: Side, coord: Coord) -> bool {
    match board.get(coord) {
        Some(sq) => sq.en_passant_eligible && sq.piece.is_some_and(|p| p.side != side),
        None => false,
    }
}
