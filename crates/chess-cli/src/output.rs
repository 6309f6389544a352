//! Rendering of generated moves for the terminal or as JSON.

use chess_core::CandidateMove;
use serde::Serialize;

/// Serializable view of a [`CandidateMove`] using algebraic squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveView {
    pub from: String,
    pub to: String,
    pub capture: bool,
    pub en_passant: bool,
}

impl From<&CandidateMove> for MoveView {
    fn from(m: &CandidateMove) -> Self {
        MoveView {
            from: m.from.to_string(),
            to: m.to.to_string(),
            capture: m.is_capture,
            en_passant: m.is_en_passant,
        }
    }
}

/// One move per line: UCI notation followed by a capture marker if any.
pub fn render_text(moves: &[CandidateMove]) -> String {
    let mut out = String::new();
    for m in moves {
        out.push_str(&m.to_uci());
        if m.is_en_passant {
            out.push_str(" en-passant");
        } else if m.is_capture {
            out.push_str(" capture");
        }
        out.push('\n');
    }
    out
}

/// Pretty-printed JSON array of [`MoveView`]s.
pub fn render_json(moves: &[CandidateMove]) -> serde_json::Result<String> {
    let views: Vec<MoveView> = moves.iter().map(MoveView::from).collect();
    serde_json::to_string_pretty(&views)
}
