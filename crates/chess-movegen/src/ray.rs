//! Ray casting for sliding pieces (rook, bishop, queen).

use crate::probe::probe;
use crate::{Delta, MoveList};
use chess_core::{Board, CandidateMove, Coord, Side};

/// Orthogonal directions: up, down, left, right.
pub const ROOK_DIRECTIONS: [Delta; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal directions: up-left, up-right, down-left, down-right.
pub const BISHOP_DIRECTIONS: [Delta; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonals followed by diagonals.
pub const QUEEN_DIRECTIONS: [Delta; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Walks from `from` along `direction`, pushing quiet moves until the ray
/// leaves the board or meets a piece. An enemy piece ends the ray with one
/// capture; a friendly piece ends it with nothing.
pub fn cast_ray(board: &Board, side: Side, from: Coord, direction: Delta, moves: &mut MoveList) {
    let (row_delta, col_delta) = direction;
    debug_assert!(direction != (0, 0));

    let mut to = from;
    loop {
        to = to.offset(row_delta, col_delta);
        let p = probe(board, side, to);

        if !p.valid {
            break;
        }
        if p.capture {
            moves.push(CandidateMove::capture(from, to));
            break;
        }
        moves.push(CandidateMove::quiet(from, to));
    }
}

/// Casts one ray per direction, in table order.
pub fn slider_moves(board: &Board, side: Side, from: Coord, directions: &[Delta]) -> MoveList {
    let mut moves = MoveList::new();
    for &direction in directions {
        cast_ray(board, side, from, direction, &mut moves);
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind};

    fn ray(board: &Board, from: Coord, direction: Delta) -> MoveList {
        let mut moves = MoveList::new();
        cast_ray(board, Side::White, from, direction, &mut moves);
        moves
    }

    #[test]
    fn open_ray_runs_to_edge() {
        let moves = ray(&Board::empty(), Coord::new(0, 0), (1, 0));
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0].to, Coord::new(1, 0));
        assert_eq!(moves[6].to, Coord::new(7, 0));
        assert!(moves.iter().all(|m| !m.is_capture && m.from == Coord::new(0, 0)));
    }

    #[test]
    fn ray_off_board_immediately_is_empty() {
        assert!(ray(&Board::empty(), Coord::new(0, 0), (-1, 0)).is_empty());
        assert!(ray(&Board::empty(), Coord::new(7, 7), (1, 1)).is_empty());
    }

    #[test]
    fn ray_stops_on_enemy_with_one_capture() {
        let mut board = Board::empty();
        board.set_piece(Coord::new(0, 3), Piece::new(PieceKind::Pawn, Side::Black));
        board.set_piece(Coord::new(0, 5), Piece::new(PieceKind::Pawn, Side::Black));

        let moves = ray(&board, Coord::new(0, 0), (0, 1));
        assert_eq!(moves.len(), 3);
        assert!(!moves[0].is_capture);
        assert!(!moves[1].is_capture);
        assert_eq!(moves[2], CandidateMove::capture(Coord::new(0, 0), Coord::new(0, 3)));
    }

    #[test]
    fn ray_stops_before_friend() {
        let mut board = Board::empty();
        board.set_piece(Coord::new(1, 1), Piece::new(PieceKind::Pawn, Side::White));

        assert!(ray(&board, Coord::new(0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn queen_directions_are_rook_then_bishop() {
        assert_eq!(&QUEEN_DIRECTIONS[..4], &ROOK_DIRECTIONS);
        assert_eq!(&QUEEN_DIRECTIONS[4..], &BISHOP_DIRECTIONS);
    }

    #[test]
    fn slider_order_follows_direction_table() {
        let moves = slider_moves(&Board::empty(), Side::White, Coord::new(3, 3), &ROOK_DIRECTIONS);
        // up (3 squares), down (4), left (3), right (4)
        assert_eq!(moves.len(), 14);
        assert_eq!(moves[0].to, Coord::new(2, 3));
        assert_eq!(moves[3].to, Coord::new(4, 3));
        assert_eq!(moves[7].to, Coord::new(3, 2));
        assert_eq!(moves[10].to, Coord::new(3, 4));
    }
}
