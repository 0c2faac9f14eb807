use serde::{Deserialize, Serialize};

/// One accepted before/after revision for a resume fragment.
///
/// `improved_text` is guaranteed non-empty and, after trim+lowercase,
/// different from `original_text` — the change filter enforces this before
/// a suggestion is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Canonical section label (e.g. "education"), not necessarily the key
    /// the section was found under.
    pub section: String,
    /// Human-readable description of the detected problem.
    pub issue: String,
    pub original_text: String,
    pub improved_text: String,
}
