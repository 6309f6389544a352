//! Uniform sampling of game records from a stream of files.
//!
//! Collections can hold millions of games, so records are streamed through a
//! fixed-size [`Reservoir`] instead of being loaded all at once.

use crate::pgn::{parse_games, GameRecord, PgnError};
use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons a game file is skipped during sampling.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("failed to read game file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to split games: {0}")]
    Pgn(#[from] PgnError),
}

/// Keeps a uniform random sample of at most `capacity` items from a stream
/// of unknown length.
#[derive(Debug, Clone)]
pub struct Reservoir<T> {
    items: Vec<T>,
    capacity: usize,
    seen: u64,
}

impl<T> Reservoir<T> {
    pub fn new(capacity: usize) -> Self {
        Reservoir {
            items: Vec::with_capacity(capacity.min(1 << 16)),
            capacity,
            seen: 0,
        }
    }

    /// Offers the next item of the stream.
    ///
    /// The first `capacity` items are kept. After that the k-th item replaces
    /// a random slot with probability `capacity / k`.
    pub fn offer<R: Rng>(&mut self, item: T, rng: &mut R) {
        self.seen += 1;
        if self.items.len() < self.capacity {
            self.items.push(item);
            return;
        }
        let slot = rng.gen_range(0..self.seen);
        if slot < self.capacity as u64 {
            self.items[slot as usize] = item;
        }
    }

    /// Number of items offered so far.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Result of sampling a set of files.
#[derive(Debug, Clone)]
pub struct Sample {
    pub games: Vec<GameRecord>,
    /// Files that were read and split successfully.
    pub files_read: usize,
    /// Files skipped because they could not be read or split.
    pub files_skipped: Vec<PathBuf>,
    /// Total games offered to the reservoir.
    pub games_seen: u64,
}

/// Streams every game of every file through a reservoir of `size` slots.
///
/// A file that cannot be read or split is logged and skipped; it does not
/// abort the run.
pub fn sample_games<R: Rng>(files: &[PathBuf], size: usize, rng: &mut R) -> Sample {
    let mut reservoir = Reservoir::new(size);
    let mut files_read = 0;
    let mut files_skipped = Vec::new();

    for path in files {
        tracing::info!("{}", path.display());
        match read_games(path) {
            Ok(games) => {
                tracing::debug!(file = %path.display(), games = games.len(), "split file");
                files_read += 1;
                for game in games {
                    reservoir.offer(game, rng);
                }
            }
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "skipping file");
                files_skipped.push(path.clone());
            }
        }
    }

    Sample {
        games_seen: reservoir.seen(),
        games: reservoir.into_items(),
        files_read,
        files_skipped,
    }
}

/// Reads `path` and splits it into games.
pub fn read_games(path: &Path) -> Result<Vec<GameRecord>, SampleError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_games(&text)?)
}
