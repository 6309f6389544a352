//! Property tests for move generation over randomly populated boards.

use chess_core::{Board, Coord, Piece, PieceKind, Side};
use chess_movegen::{possible_moves, side_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = Coord> {
    (0i8..8, 0i8..8).prop_map(|(row, col)| Coord::new(row, col))
}

fn piece() -> impl Strategy<Value = Piece> {
    (
        prop::sample::select(PieceKind::ALL.to_vec()),
        prop::bool::ANY.prop_map(|white| if white { Side::White } else { Side::Black }),
    )
        .prop_map(|(kind, side)| Piece::new(kind, side))
}

fn board() -> impl Strategy<Value = Board> {
    prop::collection::vec((coord(), piece(), prop::bool::weighted(0.1)), 0..24).prop_map(
        |placements| {
            let mut board = Board::empty();
            for (at, piece, eligible) in placements {
                board.set_piece(at, piece);
                board.set_en_passant_eligible(at, eligible);
            }
            board
        },
    )
}

/// A board plus one occupied coordinate on it.
fn board_and_piece() -> impl Strategy<Value = (Board, Coord, Piece)> {
    (board(), coord(), piece()).prop_map(|(mut board, at, piece)| {
        board.set_piece(at, piece);
        (board, at, piece)
    })
}

proptest! {
    #[test]
    fn moves_start_at_query_and_land_on_board((board, at, piece) in board_and_piece()) {
        for m in &possible_moves(&board, piece, at) {
            prop_assert_eq!(m.from, at);
            prop_assert!(m.to.is_on_board());
            prop_assert_ne!(m.to, at);
        }
    }

    #[test]
    fn moves_never_land_on_friends((board, at, piece) in board_and_piece()) {
        for m in &possible_moves(&board, piece, at) {
            let target = board.piece_at(m.to);
            prop_assert!(target.map_or(true, |t| t.side != piece.side));
        }
    }

    #[test]
    fn capture_flag_matches_target((board, at, piece) in board_and_piece()) {
        for m in &possible_moves(&board, piece, at) {
            let occupied = board.piece_at(m.to).is_some();
            prop_assert_eq!(m.is_capture, occupied);
            if m.is_en_passant {
                prop_assert!(!occupied);
                prop_assert_eq!(piece.kind, PieceKind::Pawn);
            }
        }
    }

    #[test]
    fn generation_is_idempotent((board, at, piece) in board_and_piece()) {
        prop_assert_eq!(
            possible_moves(&board, piece, at),
            possible_moves(&board, piece, at)
        );
    }

    #[test]
    fn generation_leaves_board_untouched(board in board()) {
        let before = board.clone();
        let _ = side_moves(&board, Side::White);
        let _ = side_moves(&board, Side::Black);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn slider_paths_are_clear((board, at, _piece) in board_and_piece()) {
        let queen = Piece::new(PieceKind::Queen, Side::White);
        let mut board = board;
        board.set_piece(at, queen);

        for m in &possible_moves(&board, queen, at) {
            let dr = (m.to.row - at.row).signum();
            let dc = (m.to.col - at.col).signum();
            prop_assert!(ROOK_DIRECTIONS.contains(&(dr, dc)) || BISHOP_DIRECTIONS.contains(&(dr, dc)));

            let mut step = at.offset(dr, dc);
            while step != m.to {
                prop_assert!(board.piece_at(step).is_none());
                step = step.offset(dr, dc);
            }
        }
    }

    #[test]
    fn pawn_moves_go_forward((board, at, side) in (board(), coord(), prop::bool::ANY)) {
        let side = if side { Side::White } else { Side::Black };
        let pawn = Piece::new(PieceKind::Pawn, side);
        let mut board = board;
        board.set_piece(at, pawn);

        for m in &possible_moves(&board, pawn, at) {
            let advance = (m.to.row - at.row) * side.pawn_direction();
            prop_assert!(advance == 1 || advance == 2);
            if advance == 2 {
                prop_assert_eq!(at.row, side.pawn_home_row());
                prop_assert!(!m.is_capture);
            }
        }
    }
}
