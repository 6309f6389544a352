//! PGN (Portable Game Notation) game records.
//!
//! A PGN file holds any number of games, each a block of tag-pair lines
//! (`[Event "..."]`) followed by movetext. This module splits a file into
//! [`GameRecord`]s and writes records back out. Movetext is kept verbatim;
//! interpreting the moves themselves is left to other tools.

use std::io::Write;
use thiserror::Error;

/// Errors that can occur when splitting PGN text into games.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PgnError {
    #[error("malformed tag pair on line {line}: {text}")]
    MalformedTag { line: usize, text: String },
}

/// One game: its tag pairs in file order and its raw movetext.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameRecord {
    pub tags: Vec<(String, String)>,
    pub movetext: String,
}

impl GameRecord {
    /// Returns the value of the first tag called `name`.
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the game result tag ("1-0", "0-1", "1/2-1/2" or "*").
    pub fn result(&self) -> Option<&str> {
        self.tag("Result")
    }

    fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.movetext.is_empty()
    }
}

/// Splits PGN text into game records.
///
/// A tag line that follows movetext starts a new game. Blank lines and `%`
/// escape lines are skipped.
///
/// # Errors
///
/// Returns [`PgnError::MalformedTag`] for a line that starts with `[` but is
/// not a well-formed `[Name "Value"]` pair.
pub fn parse_games(text: &str) -> Result<Vec<GameRecord>, PgnError> {
    let mut games = Vec::new();
    let mut current = GameRecord::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        if line.starts_with('[') {
            if !current.movetext.is_empty() {
                games.push(std::mem::take(&mut current));
            }
            let tag = parse_tag(line).ok_or_else(|| PgnError::MalformedTag {
                line: index + 1,
                text: line.to_string(),
            })?;
            current.tags.push(tag);
        } else {
            if !current.movetext.is_empty() {
                current.movetext.push(' ');
            }
            current.movetext.push_str(line);
        }
    }

    if !current.is_empty() {
        games.push(current);
    }
    Ok(games)
}

/// Parses `[Name "Value"]`, honouring `\"` and `\\` escapes in the value.
fn parse_tag(line: &str) -> Option<(String, String)> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    let (name, rest) = inner.split_once(char::is_whitespace)?;
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let quoted = rest.trim();
    let body = quoted.strip_prefix('"')?.strip_suffix('"')?;

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => value.push(chars.next()?),
            '"' => return None,
            _ => value.push(c),
        }
    }
    Some((name.to_string(), value))
}

fn escape_tag_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes games as PGN, one blank line between tags, movetext and the next game.
///
/// Movetext is wrapped at 80 columns on token boundaries.
pub fn write_pgn<W: Write>(mut out: W, games: &[GameRecord]) -> std::io::Result<()> {
    for game in games {
        for (name, value) in &game.tags {
            writeln!(out, "[{} \"{}\"]", name, escape_tag_value(value))?;
        }
        writeln!(out)?;

        let mut width = 0;
        for token in game.movetext.split_whitespace() {
            if width > 0 && width + 1 + token.len() > 80 {
                writeln!(out)?;
                width = 0;
            }
            if width > 0 {
                write!(out, " ")?;
                width += 1;
            }
            write!(out, "{}", token)?;
            width += token.len();
        }
        writeln!(out)?;
        writeln!(out)?;
    }
    Ok(())
}
