//! Section alias resolution over loosely shaped resume / analysis JSON.
//!
//! Parsed resumes come from several upstream parsers that disagree on key
//! names, so every logical section carries an ordered alias list. Resolution
//! is first-alias-wins — no merging across aliases.

use serde_json::{Map, Value};

// Alias lists, in priority order. The first entry is the canonical key.
pub const EXPERIENCE_KEYS: &[&str] = &[
    "experience",
    "work_experience",
    "work",
    "professional_experience",
];
pub const INTERNSHIP_KEYS: &[&str] = &["internships", "internship"];
pub const EDUCATION_KEYS: &[&str] = &["education", "educations"];
pub const AWARDS_KEYS: &[&str] = &["awards_achievements", "awards", "achievements", "honors"];
pub const POR_KEYS: &[&str] = &["positions_of_responsibility", "leadership", "por"];
pub const CO_CURRICULAR_KEYS: &[&str] = &[
    "co_curricular",
    "co_curricular_activities",
    "cocurricular",
];
pub const EXTRA_CURRICULAR_KEYS: &[&str] = &[
    "extra_curricular",
    "extracurricular",
    "extracurricular_activities",
];
pub const SKILLS_KEYS: &[&str] = &["skills"];
pub const SUMMARY_KEYS: &[&str] = &["summary", "objective", "profile"];

/// Returns the items under the first alias whose value is a list.
/// Values of any other type do not count as a match. Empty slice when no
/// alias matches — callers treat that as "section absent".
pub fn resolve_items<'a>(document: &'a Value, aliases: &[&str]) -> &'a [Value] {
    if let Some(map) = document.as_object() {
        for key in aliases {
            if let Some(Value::Array(items)) = map.get(*key) {
                return items;
            }
        }
    }
    &[]
}

/// Returns the issue payload under the first alias present in the analysis,
/// verbatim — a list (per-item flags) and a mapping (section-level flags)
/// both pass through unmodified. `None` is the absent marker; a
/// present-but-empty mapping stays `Some`.
pub fn resolve_issues<'a>(analysis: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    let map = analysis.as_object()?;
    aliases.iter().find_map(|key| map.get(*key))
}

/// Truthiness of a flag value: null, false, zero, and empty strings or
/// containers are falsy; everything else is truthy. Upstream analyzers emit
/// flags as booleans but occasionally as counts or non-empty strings.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// True when `key` is present in `flags` with a truthy value.
pub fn flag_set(flags: &Map<String, Value>, key: &str) -> bool {
    flags.get(key).map(is_truthy).unwrap_or(false)
}

/// True when any of `keys` is set in `flags`.
pub fn any_flag_set(flags: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().any(|key| flag_set(flags, key))
}
