//! Recursive discovery of game files.

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while searching a directory tree.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("directory not found: {0}")]
    MissingDir(PathBuf),
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to read directory entry: {0}")]
    Entry(#[from] glob::GlobError),
}

/// Returns every file under `dir` (recursively) whose extension is `ext`,
/// ignoring case, sorted by path.
pub fn find_game_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, WalkError> {
    if !dir.is_dir() {
        return Err(WalkError::MissingDir(dir.to_path_buf()));
    }

    let pattern = format!(
        "{}/**/*.{}",
        Pattern::escape(&dir.to_string_lossy()),
        Pattern::escape(ext)
    );
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
