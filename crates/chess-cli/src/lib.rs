//! Command-line tooling around the move generator.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration with defaults for every setting
//! - [`pgn`] - splitting PGN files into game records and writing them back
//! - [`walk`] - recursive discovery of game files
//! - [`sample`] - reservoir sampling of games across many files
//! - [`output`] - text and JSON rendering of generated moves

pub mod config;
pub mod output;
pub mod pgn;
pub mod sample;
pub mod walk;
