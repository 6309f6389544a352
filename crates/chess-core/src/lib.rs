//! Core types for chess.
//!
//! This crate provides the fundamental types shared by move generation and
//! the command-line tools:
//! - [`Side`], [`PieceKind`] and [`Piece`] for piece representation
//! - [`Coord`] for (row, col) board coordinates
//! - [`Square`] and [`Board`] for read-only board snapshots
//! - [`CandidateMove`] for pseudo-legal, unapplied moves
//! - FEN loading and serialization

mod board;
mod coord;
mod fen;
mod mov;
mod piece;
mod side;

pub use board::{Board, Square};
pub use coord::{Coord, BOARD_SIZE};
pub use fen::{FenError, STARTPOS_FEN};
pub use mov::CandidateMove;
pub use piece::{Piece, PieceKind};
pub use side::Side;
