#![allow(dead_code)]

// All rewrite instruction constants and flag dispatch tables for the
// Improvements module. Handlers iterate these tables in declared order, so
// the per-flag behavior (and the emitted suggestion order) is data, not
// branching code.

/// One row of a flag dispatch table: if any of `flags` is set on an item,
/// one rewrite is requested with `instruction` and surfaced under `issue`.
pub struct FlagRule {
    pub flags: &'static [&'static str],
    pub instruction: &'static str,
    pub issue: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Experience-like sections (experience, internships)
// ────────────────────────────────────────────────────────────────────────────

pub const EXPERIENCE_RULES: &[FlagRule] = &[
    FlagRule {
        flags: &["no_metrics", "missing_metrics"],
        instruction: "Add measurable impact and metrics without inventing facts",
        issue: "No measurable impact",
    },
    FlagRule {
        flags: &["weak_action_verbs"],
        instruction: "Strengthen action verbs; start with a strong verb",
        issue: "Weak action verbs",
    },
    FlagRule {
        flags: &["responsibility_over_achievement"],
        instruction: "Rewrite as an achievement with outcome and scale",
        issue: "Not achievement-oriented",
    },
    FlagRule {
        flags: &["too_wordy", "too_long"],
        instruction: "Make this a concise one-line resume bullet",
        issue: "Too wordy",
    },
    FlagRule {
        flags: &["missing_keywords"],
        instruction: "Include job-relevant keywords naturally if present in input",
        issue: "Missing keywords",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Simple-list sections (awards, POR, co-/extra-curricular)
// ────────────────────────────────────────────────────────────────────────────

// The generic-polish instruction is per-section; everything else is shared.
pub const SIMPLE_GENERIC_FLAGS: &[&str] = &["too_generic", "missing_impact"];
pub const SIMPLE_CONCISE_FLAGS: &[&str] = &["too_wordy", "too_long"];
pub const SIMPLE_SECTION_LEVEL_FLAGS: &[&str] = &["too_generic", "too_long", "missing_impact"];

pub const SIMPLE_CONCISE_INSTRUCTION: &str = "Make this concise, single resume bullet";

pub const ISSUE_TOO_GENERIC: &str = "Too generic";
pub const ISSUE_TOO_WORDY: &str = "Too wordy";
/// Fallback label for items whose flags are all unrecognized — every
/// explicitly flagged item still gets one generic-polish attempt.
pub const ISSUE_IMPROVE_PHRASING: &str = "Improve phrasing";
pub const ISSUE_SECTION_TOO_GENERIC: &str = "Section too generic";

/// Per-section generic-polish instructions.
pub const AWARDS_POLISH: &str =
    "Rewrite as crisp, impact-focused bullets; keep titles and recognition clear";
pub const POR_POLISH: &str =
    "Emphasize leadership, scope, and outcomes; keep bullets concise and achievement-focused";
pub const CO_CURRICULAR_POLISH: &str =
    "Refine to concise bullets showing relevance and impact; avoid fluff";
pub const EXTRA_CURRICULAR_POLISH: &str =
    "Highlight leadership, scale, achievements; keep it to tight resume bullets";

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub const EDUCATION_RULES: &[FlagRule] = &[
    FlagRule {
        flags: &["too_generic"],
        instruction: "Rewrite as a clean one-line education entry: \
            Degree, Major — Institute, Location — Dates. \
            Include GPA/CGPA and honors only if present in input. Do not invent.",
        issue: "Too generic",
    },
    FlagRule {
        flags: &["missing_dates"],
        instruction: "Standardize dates to MMM YYYY or YYYY range if present; keep concise; do not fabricate.",
        issue: "Missing dates",
    },
    FlagRule {
        flags: &["missing_gpa"],
        instruction: "If GPA/CGPA is present in the input, include it in a standard format; otherwise omit.",
        issue: "GPA/CGPA formatting",
    },
    FlagRule {
        flags: &["too_wordy", "too_long"],
        instruction: "Make this a single concise line focusing on degree, institute, location, dates (and GPA if present).",
        issue: "Too wordy",
    },
];

pub const EDUCATION_SECTION_LEVEL_FLAGS: &[&str] = &["too_generic", "too_long"];
pub const EDUCATION_SECTION_INSTRUCTION: &str =
    "Polish education entries to one-line standardized format: \
    Degree, Major — Institute, Location — Dates — GPA/CGPA (if present). \
    Do not invent any data.";
pub const ISSUE_SECTION_STANDARDIZATION: &str = "Section needs standardization";

// ────────────────────────────────────────────────────────────────────────────
// Skills and summary
// ────────────────────────────────────────────────────────────────────────────

pub const SKILLS_INSTRUCTION: &str =
    "Cluster by category (e.g., Languages, Frameworks, Tools) and include proficiency levels \
    only if present in input. Keep it concise.";
pub const ISSUE_SKILLS_TOO_GENERIC: &str = "Skills too generic";
pub const ISSUE_MISSING_PROFICIENCY: &str = "Missing proficiency levels";

pub const SUMMARY_RULES: &[FlagRule] = &[
    FlagRule {
        flags: &["too_generic"],
        instruction: "Make summary specific and tailored to the target role",
        issue: "Summary too generic",
    },
    FlagRule {
        flags: &["too_long"],
        instruction: "Make summary concise (2–3 lines)",
        issue: "Summary too long",
    },
    FlagRule {
        flags: &["missing_keywords"],
        instruction: "Include job-relevant keywords naturally if present in input",
        issue: "Missing keywords",
    },
];
