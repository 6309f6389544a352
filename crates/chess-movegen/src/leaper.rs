//! Fixed-offset generation for knights and kings.

use crate::probe::probe;
use crate::{Delta, MoveList};
use chess_core::{Board, CandidateMove, Coord, Side};

/// Knight jumps.
pub const KNIGHT_OFFSETS: [Delta; 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

/// King steps: orthogonal neighbours, then diagonal neighbours.
pub const KING_OFFSETS: [Delta; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Probes each offset once and keeps every valid destination.
///
/// Squares attacked by the opponent are not filtered out.
pub fn offset_moves(board: &Board, side: Side, from: Coord, offsets: &[Delta]) -> MoveList {
    let mut moves = MoveList::new();
    for &(row_delta, col_delta) in offsets {
        let to = from.offset(row_delta, col_delta);
        let p = probe(board, side, to);
        if p.valid {
            moves.push(CandidateMove {
                from,
                to,
                is_capture: p.capture,
                is_en_passant: false,
            });
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind};

    #[test]
    fn knight_in_corner() {
        let moves = offset_moves(&Board::empty(), Side::White, Coord::new(0, 0), &KNIGHT_OFFSETS);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].to, Coord::new(2, 1));
        assert_eq!(moves[1].to, Coord::new(1, 2));
    }

    #[test]
    fn knight_in_centre() {
        let moves = offset_moves(&Board::empty(), Side::Black, Coord::new(4, 4), &KNIGHT_OFFSETS);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn king_on_edge() {
        let moves = offset_moves(&Board::empty(), Side::White, Coord::new(0, 4), &KING_OFFSETS);
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn capture_flag_comes_from_probe() {
        let mut board = Board::empty();
        board.set_piece(Coord::new(4, 3), Piece::new(PieceKind::Rook, Side::Black));
        board.set_piece(Coord::new(4, 4), Piece::new(PieceKind::Rook, Side::White));

        let moves = offset_moves(&board, Side::White, Coord::new(3, 3), &KING_OFFSETS);
        assert_eq!(moves.len(), 7);
        assert!(moves.find_to(Coord::new(4, 3)).unwrap().is_capture);
        assert!(!moves.contains_to(Coord::new(4, 4)));
        assert_eq!(moves.iter().filter(|m| m.is_capture).count(), 1);
    }
}
