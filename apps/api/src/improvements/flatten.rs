//! Entry flattening — reduces one polymorphic section item to a single line
//! of text for the rewrite oracle. Total and non-destructive: any well-formed
//! JSON value maps to a string, `""` when nothing usable exists, and no text
//! is ever invented.

use serde_json::{Map, Value};

/// Separator used when joining bullets or harvested fragments.
pub const BULLET_SEP: &str = " • ";

/// Explicit fields tried first on mapping-shaped items, in priority order.
const FIELD_PRIORITY: &[&str] = &["description", "details", "summary", "line", "text"];

/// Skill group keys read from mapping-shaped skills, in output order.
const SKILL_GROUP_KEYS: &[&str] = &["technical", "tools", "languages", "frameworks", "soft"];

/// One section item viewed through its JSON shape.
enum EntryShape<'a> {
    Text(&'a str),
    BulletList(&'a [Value]),
    Fields(&'a Map<String, Value>),
    Unusable,
}

impl<'a> EntryShape<'a> {
    fn classify(entry: &'a Value) -> Self {
        match entry {
            Value::String(s) => EntryShape::Text(s),
            Value::Array(items) => EntryShape::BulletList(items),
            Value::Object(fields) => EntryShape::Fields(fields),
            _ => EntryShape::Unusable,
        }
    }
}

/// Flattens one item of unknown shape into a single display/rewrite line.
pub fn flatten_entry(entry: &Value) -> String {
    match EntryShape::classify(entry) {
        EntryShape::Text(s) => s.to_string(),
        EntryShape::BulletList(items) => join_strings(items),
        EntryShape::Fields(fields) => flatten_fields(fields),
        EntryShape::Unusable => String::new(),
    }
}

/// Flattens every item and joins them into one section-level block.
pub fn flatten_block(items: &[Value]) -> String {
    items
        .iter()
        .map(flatten_entry)
        .collect::<Vec<_>>()
        .join(BULLET_SEP)
}

/// Flattens the document's skills into a comma-separated string.
/// A list keeps only its string elements; a mapping concatenates string-list
/// values under the fixed group keys, in their declared order.
pub fn skills_text(document: &Value) -> String {
    let mut flat: Vec<&str> = Vec::new();
    match document.get("skills") {
        Some(Value::Array(items)) => flat.extend(items.iter().filter_map(Value::as_str)),
        Some(Value::Object(groups)) => {
            for key in SKILL_GROUP_KEYS {
                if let Some(Value::Array(items)) = groups.get(*key) {
                    flat.extend(items.iter().filter_map(Value::as_str));
                }
            }
        }
        _ => {}
    }
    flat.join(", ")
}

fn flatten_fields(fields: &Map<String, Value>) -> String {
    // Explicit fields win when non-blank.
    for key in FIELD_PRIORITY {
        if let Some(Value::String(s)) = fields.get(*key) {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    // Then a bullets list, joined as-is.
    if let Some(Value::Array(bullets)) = fields.get("bullets") {
        if !bullets.is_empty() {
            return join_strings(bullets);
        }
    }

    // Last resort: harvest every string-valued field and every string element
    // inside a list-valued field, in field order, keeping non-blank ones.
    let mut parts: Vec<&str> = Vec::new();
    for value in fields.values() {
        match value {
            Value::String(s) => parts.push(s),
            Value::Array(items) => parts.extend(items.iter().filter_map(Value::as_str)),
            _ => {}
        }
    }
    parts.retain(|part| !part.trim().is_empty());
    parts.join(BULLET_SEP)
}

fn join_strings(items: &[Value]) -> String {
    items
        .iter()
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join(BULLET_SEP)
}
