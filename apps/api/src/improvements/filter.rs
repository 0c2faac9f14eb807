//! Change filter — the single gate every candidate rewrite passes through.
//!
//! A candidate is surfaced only when it is non-empty and, after trimming and
//! lowercasing, differs from the normalized original. No handler may bypass
//! this: it is the only place no-op rewrites are suppressed.

use crate::models::suggestion::Suggestion;

/// Appends a suggestion only if the oracle produced a real change.
/// `improved` is `None` when the oracle failed or returned nothing.
/// The emitted suggestion carries the unnormalized original and candidate.
pub fn push_if_changed(
    out: &mut Vec<Suggestion>,
    section: &str,
    issue: &str,
    original: &str,
    improved: Option<String>,
) {
    let improved = match improved {
        Some(text) if !text.is_empty() => text,
        _ => return,
    };

    let orig_norm = original.trim().to_lowercase();
    let imp_norm = improved.trim().to_lowercase();
    if imp_norm.is_empty() || imp_norm == orig_norm {
        return;
    }

    out.push(Suggestion {
        section: section.to_string(),
        issue: issue.to_string(),
        original_text: original.to_string(),
        improved_text: improved,
    });
}
