//! Suggestion generation — dispatches each resume section to its handler.
//!
//! Flow: resolve items + issues per section → flatten the flagged entry →
//!       oracle rewrite per matched flag → change filter → collect.
//!
//! The output order is part of the contract: sections in the fixed order
//! below, then item order within a section, then the declared flag-rule
//! order. Malformed section data never errors — it resolves to "absent" and
//! the section is skipped.

use serde_json::Value;
use tracing::debug;

use crate::improvements::filter::push_if_changed;
use crate::improvements::flatten::{flatten_block, flatten_entry, skills_text};
use crate::improvements::instructions::{
    AWARDS_POLISH, CO_CURRICULAR_POLISH, EDUCATION_RULES,
    EDUCATION_SECTION_INSTRUCTION, EDUCATION_SECTION_LEVEL_FLAGS, EXPERIENCE_RULES,
    EXTRA_CURRICULAR_POLISH, ISSUE_IMPROVE_PHRASING, ISSUE_MISSING_PROFICIENCY,
    ISSUE_SECTION_STANDARDIZATION, ISSUE_SECTION_TOO_GENERIC, ISSUE_SKILLS_TOO_GENERIC,
    ISSUE_TOO_GENERIC, ISSUE_TOO_WORDY, POR_POLISH, SIMPLE_CONCISE_FLAGS,
    SIMPLE_CONCISE_INSTRUCTION, SIMPLE_GENERIC_FLAGS, SIMPLE_SECTION_LEVEL_FLAGS,
    SKILLS_INSTRUCTION, SUMMARY_RULES,
};
use crate::improvements::oracle::RewriteOracle;
use crate::improvements::resolver::{
    any_flag_set, flag_set, resolve_issues, resolve_items, AWARDS_KEYS, CO_CURRICULAR_KEYS,
    EDUCATION_KEYS, EXPERIENCE_KEYS, EXTRA_CURRICULAR_KEYS, INTERNSHIP_KEYS, POR_KEYS,
    SKILLS_KEYS, SUMMARY_KEYS,
};
use crate::models::suggestion::Suggestion;

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Generates improvement suggestions from a precomputed analysis and a parsed
/// resume document. Empty or absent inputs yield an empty list — this
/// function never fails, whatever shape the inputs take.
pub async fn generate_improvements(
    oracle: &dyn RewriteOracle,
    analysis: &Value,
    document: &Value,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let empty = |v: &Value| v.as_object().map(|m| m.is_empty()).unwrap_or(true);
    if empty(analysis) || empty(document) {
        return suggestions;
    }

    // Experience-like: work experience, then internships.
    let items = resolve_items(document, EXPERIENCE_KEYS);
    if let Some(issues) = resolve_issues(analysis, EXPERIENCE_KEYS) {
        if !items.is_empty() {
            process_experience_like(&mut suggestions, oracle, "experience", items, issues).await;
        }
    }

    let items = resolve_items(document, INTERNSHIP_KEYS);
    if let Some(issues) = resolve_issues(analysis, INTERNSHIP_KEYS) {
        if !items.is_empty() {
            process_experience_like(&mut suggestions, oracle, "internships", items, issues).await;
        }
    }

    // Education.
    let items = resolve_items(document, EDUCATION_KEYS);
    if let Some(issues) = resolve_issues(analysis, EDUCATION_KEYS) {
        if !items.is_empty() {
            process_education(&mut suggestions, oracle, items, issues).await;
        }
    }

    // Simple-list sections, each with its own generic-polish instruction.
    let simple_sections: &[(&[&str], &str, &str)] = &[
        (AWARDS_KEYS, "awards_achievements", AWARDS_POLISH),
        (POR_KEYS, "positions_of_responsibility", POR_POLISH),
        (CO_CURRICULAR_KEYS, "co_curricular", CO_CURRICULAR_POLISH),
        (EXTRA_CURRICULAR_KEYS, "extra_curricular", EXTRA_CURRICULAR_POLISH),
    ];
    for (aliases, label, polish) in simple_sections {
        let items = resolve_items(document, aliases);
        if let Some(issues) = resolve_issues(analysis, aliases) {
            if !items.is_empty() {
                process_simple_list(&mut suggestions, oracle, label, items, issues, polish).await;
            }
        }
    }

    // Skills and summary read the document directly rather than an item list.
    if let Some(issues) = resolve_issues(analysis, SKILLS_KEYS) {
        process_skills(&mut suggestions, oracle, document, issues).await;
    }

    if let Some(issues) = resolve_issues(analysis, SUMMARY_KEYS) {
        process_summary(&mut suggestions, oracle, document, issues).await;
    }

    debug!("Generated {} suggestions", suggestions.len());
    suggestions
}

// ────────────────────────────────────────────────────────────────────────────
// Section handlers
// ────────────────────────────────────────────────────────────────────────────

/// Handles sections that are lists of role entries: experience / internships.
/// Issues must be a list aligned with the item list by index; any other shape
/// skips the section. Items whose flags are all unrecognized produce no
/// suggestion — there is deliberately no generic fallback here.
async fn process_experience_like(
    out: &mut Vec<Suggestion>,
    oracle: &dyn RewriteOracle,
    section_label: &str,
    items: &[Value],
    issues: &Value,
) {
    let Some(issue_list) = issues.as_array() else {
        return;
    };

    for (idx, entry) in issue_list.iter().enumerate() {
        let Some(flags) = entry.as_object() else {
            continue;
        };
        // An out-of-range index flattens to empty and skips the item.
        let original = items.get(idx).map(flatten_entry).unwrap_or_default();
        if original.is_empty() {
            continue;
        }

        for rule in EXPERIENCE_RULES {
            if any_flag_set(flags, rule.flags) {
                let improved = oracle.rewrite(&original, rule.instruction).await;
                push_if_changed(out, section_label, rule.issue, &original, improved);
            }
        }
    }
}

/// Handles bullet-like sections (awards, POR, co-/extra-curricular).
/// Per-item flags when issues is a list; one whole-section polish when it is
/// a mapping with a section-level flag set.
async fn process_simple_list(
    out: &mut Vec<Suggestion>,
    oracle: &dyn RewriteOracle,
    section_label: &str,
    items: &[Value],
    issues: &Value,
    generic_instruction: &str,
) {
    match issues {
        Value::Array(issue_list) => {
            for (idx, entry) in issue_list.iter().enumerate() {
                let Some(flags) = entry.as_object() else {
                    continue;
                };
                let original = items.get(idx).map(flatten_entry).unwrap_or_default();
                if original.is_empty() {
                    continue;
                }

                let mut matched = false;
                if any_flag_set(flags, SIMPLE_GENERIC_FLAGS) {
                    let improved = oracle.rewrite(&original, generic_instruction).await;
                    push_if_changed(out, section_label, ISSUE_TOO_GENERIC, &original, improved);
                    matched = true;
                }

                if any_flag_set(flags, SIMPLE_CONCISE_FLAGS) {
                    let improved = oracle.rewrite(&original, SIMPLE_CONCISE_INSTRUCTION).await;
                    push_if_changed(out, section_label, ISSUE_TOO_WORDY, &original, improved);
                    matched = true;
                }

                // Explicitly flagged but unrecognized: still attempt one
                // generic polish so no flagged item is silently dropped.
                if !matched && !flags.is_empty() {
                    let improved = oracle.rewrite(&original, generic_instruction).await;
                    push_if_changed(out, section_label, ISSUE_IMPROVE_PHRASING, &original, improved);
                }
            }
        }
        Value::Object(flags) if any_flag_set(flags, SIMPLE_SECTION_LEVEL_FLAGS) => {
            let block = flatten_block(items);
            if !block.is_empty() {
                let improved = oracle.rewrite(&block, generic_instruction).await;
                push_if_changed(out, section_label, ISSUE_SECTION_TOO_GENERIC, &block, improved);
            }
        }
        _ => {}
    }
}

/// Handles education entries, typically list-of-mapping. All suggestions use
/// the fixed "education" label regardless of which alias matched.
async fn process_education(
    out: &mut Vec<Suggestion>,
    oracle: &dyn RewriteOracle,
    items: &[Value],
    issues: &Value,
) {
    match issues {
        Value::Array(issue_list) => {
            for (idx, entry) in issue_list.iter().enumerate() {
                let Some(flags) = entry.as_object() else {
                    continue;
                };
                let original = items.get(idx).map(flatten_entry).unwrap_or_default();
                if original.is_empty() {
                    continue;
                }

                for rule in EDUCATION_RULES {
                    if any_flag_set(flags, rule.flags) {
                        let improved = oracle.rewrite(&original, rule.instruction).await;
                        push_if_changed(out, "education", rule.issue, &original, improved);
                    }
                }
            }
        }
        Value::Object(flags) if any_flag_set(flags, EDUCATION_SECTION_LEVEL_FLAGS) => {
            let block = flatten_block(items);
            if !block.is_empty() {
                let improved = oracle.rewrite(&block, EDUCATION_SECTION_INSTRUCTION).await;
                push_if_changed(out, "education", ISSUE_SECTION_STANDARDIZATION, &block, improved);
            }
        }
        _ => {}
    }
}

/// Handles skills as one flattened comma-separated string. At most one
/// oracle call; "too_generic" outranks "missing_proficiency" for the label.
async fn process_skills(
    out: &mut Vec<Suggestion>,
    oracle: &dyn RewriteOracle,
    document: &Value,
    issues: &Value,
) {
    let original = skills_text(document);
    if original.is_empty() {
        return;
    }
    let Some(flags) = issues.as_object() else {
        return;
    };

    let too_generic = flag_set(flags, "too_generic");
    if too_generic || flag_set(flags, "missing_proficiency") {
        let issue = if too_generic {
            ISSUE_SKILLS_TOO_GENERIC
        } else {
            ISSUE_MISSING_PROFICIENCY
        };
        let improved = oracle.rewrite(&original, SKILLS_INSTRUCTION).await;
        push_if_changed(out, "skills", issue, &original, improved);
    }
}

/// Handles the summary. The original text is the document's `summary` field
/// if and only if it is a string; all three flags fire independently.
async fn process_summary(
    out: &mut Vec<Suggestion>,
    oracle: &dyn RewriteOracle,
    document: &Value,
    issues: &Value,
) {
    let original = match document.get("summary") {
        Some(Value::String(s)) if !s.is_empty() => s.as_str(),
        _ => return,
    };
    let Some(flags) = issues.as_object() else {
        return;
    };

    for rule in SUMMARY_RULES {
        if any_flag_set(flags, rule.flags) {
            let improved = oracle.rewrite(original, rule.instruction).await;
            push_if_changed(out, "summary", rule.issue, original, improved);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Prefixes the input so every rewrite is a real change; records calls.
    #[derive(Default)]
    struct PrefixOracle {
        calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl RewriteOracle for PrefixOracle {
        async fn rewrite(&self, text: &str, instruction: &str) -> Option<String> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), instruction.to_string()));
            Some(format!("Improved: {text}"))
        }
    }

    /// Returns the input unchanged (modulo casing) — always filtered out.
    struct EchoOracle;

    #[async_trait]
    impl RewriteOracle for EchoOracle {
        async fn rewrite(&self, text: &str, _instruction: &str) -> Option<String> {
            Some(format!("  {}  ", text.to_uppercase()))
        }
    }

    /// Always fails.
    struct DownOracle;

    #[async_trait]
    impl RewriteOracle for DownOracle {
        async fn rewrite(&self, _text: &str, _instruction: &str) -> Option<String> {
            None
        }
    }

    #[tokio::test]
    async fn test_empty_or_absent_inputs_yield_empty_list() {
        let oracle = PrefixOracle::default();
        let document = json!({"summary": "text"});
        let analysis = json!({"summary": {"too_long": true}});

        assert!(generate_improvements(&oracle, &Value::Null, &document).await.is_empty());
        assert!(generate_improvements(&oracle, &json!({}), &document).await.is_empty());
        assert!(generate_improvements(&oracle, &analysis, &Value::Null).await.is_empty());
        assert!(generate_improvements(&oracle, &analysis, &json!({})).await.is_empty());
        assert!(
            oracle.calls.lock().unwrap().is_empty(),
            "no oracle calls for empty inputs"
        );
    }

    #[tokio::test]
    async fn test_generic_summary_produces_one_tailored_suggestion() {
        let oracle = PrefixOracle::default();
        let document = json!({"summary": "I am a hardworking person."});
        let analysis = json!({"summary": {"too_generic": true}});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].section, "summary");
        assert_eq!(out[0].issue, "Summary too generic");
        assert_eq!(out[0].original_text, "I am a hardworking person.");
        assert_eq!(out[0].improved_text, "Improved: I am a hardworking person.");
    }

    #[tokio::test]
    async fn test_education_multi_flag_two_suggestions_same_original() {
        let oracle = PrefixOracle::default();
        let document = json!({"education": [{"description": "BS CS, MIT, 2020"}]});
        let analysis = json!({"education": [{"too_generic": true, "missing_dates": true}]});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|s| s.section == "education"));
        assert_eq!(out[0].issue, "Too generic");
        assert_eq!(out[1].issue, "Missing dates");
        assert_eq!(out[0].original_text, out[1].original_text);
        assert_eq!(out[0].original_text, "BS CS, MIT, 2020");
    }

    #[tokio::test]
    async fn test_experience_multi_flag_independence() {
        let oracle = PrefixOracle::default();
        let document = json!({"experience": ["Responsible for backend services"]});
        let analysis = json!({"experience": [{"no_metrics": true, "weak_action_verbs": true}]});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 2, "each flag produces its own suggestion");
        assert_eq!(out[0].issue, "No measurable impact");
        assert_eq!(out[1].issue, "Weak action verbs");
        assert_eq!(out[0].original_text, out[1].original_text);

        let calls = oracle.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_ne!(calls[0].1, calls[1].1, "each flag uses its own instruction");
    }

    #[tokio::test]
    async fn test_unchanged_rewrite_is_filtered_out() {
        let document = json!({"experience": ["Shipped the payments service"]});
        let analysis = json!({"experience": [{"too_wordy": true}]});

        let out = generate_improvements(&EchoOracle, &analysis, &document).await;
        assert!(out.is_empty(), "case/whitespace-only changes are no-ops");
    }

    #[tokio::test]
    async fn test_oracle_failure_yields_no_suggestions_without_error() {
        let document = json!({
            "experience": ["Did backend work"],
            "summary": "I am a person."
        });
        let analysis = json!({
            "experience": [{"no_metrics": true}],
            "summary": {"too_long": true}
        });

        let out = generate_improvements(&DownOracle, &analysis, &document).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_issue_index_is_skipped() {
        let oracle = PrefixOracle::default();
        let document = json!({"awards": ["Dean's list"]});
        // Two issue entries but only one item: index 1 flattens to empty.
        let analysis = json!({"awards": [{}, {"too_generic": true}]});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert!(out.is_empty());
        assert!(oracle.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_alias_precedence_picks_first_populated_key() {
        let oracle = PrefixOracle::default();
        let document = json!({
            "work_experience": ["from the alias"],
            "experience": ["from the canonical key"]
        });
        let analysis = json!({"work_experience": [{"missing_keywords": true}]});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].original_text, "from the canonical key",
            "experience outranks work_experience for items"
        );
    }

    #[tokio::test]
    async fn test_experience_unknown_flags_produce_nothing() {
        // Deliberate asymmetry: experience-like items have no generic
        // fallback, unlike simple-list sections.
        let oracle = PrefixOracle::default();
        let document = json!({"experience": ["Built a service"]});
        let analysis = json!({"experience": [{"passive_voice": true}]});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert!(out.is_empty());
        assert!(oracle.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_simple_list_unknown_flags_fall_back_to_generic_polish() {
        let oracle = PrefixOracle::default();
        let document = json!({"awards": ["Won the hackathon"]});
        let analysis = json!({"awards": [{"passive_voice": true}]});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].issue, "Improve phrasing");
        assert_eq!(out[0].section, "awards_achievements");

        let calls = oracle.calls.lock().unwrap();
        assert_eq!(calls[0].1, AWARDS_POLISH);
    }

    #[tokio::test]
    async fn test_simple_list_all_false_known_flags_still_fall_back() {
        // A non-empty flag mapping where no known flag is truthy still gets
        // the one generic-polish attempt.
        let oracle = PrefixOracle::default();
        let document = json!({"awards": ["Won the hackathon"]});
        let analysis = json!({"awards": [{"too_generic": false}]});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].issue, "Improve phrasing");
    }

    #[tokio::test]
    async fn test_simple_list_empty_flag_mapping_produces_nothing() {
        let oracle = PrefixOracle::default();
        let document = json!({"awards": ["Won the hackathon"]});
        let analysis = json!({"awards": [{}]});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_simple_list_both_known_flags_fire_independently() {
        let oracle = PrefixOracle::default();
        let document = json!({"positions_of_responsibility": ["Club president duties"]});
        let analysis = json!({
            "positions_of_responsibility": [{"missing_impact": true, "too_long": true}]
        });

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].issue, "Too generic");
        assert_eq!(out[1].issue, "Too wordy");

        let calls = oracle.calls.lock().unwrap();
        assert_eq!(calls[0].1, POR_POLISH);
        assert_eq!(calls[1].1, SIMPLE_CONCISE_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_simple_list_section_level_flags_polish_whole_block() {
        let oracle = PrefixOracle::default();
        let document = json!({"extra_curricular": ["Debate club", "Football team"]});
        let analysis = json!({"extra_curricular": {"missing_impact": true}});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].issue, "Section too generic");
        assert_eq!(out[0].original_text, "Debate club • Football team");
    }

    #[tokio::test]
    async fn test_education_section_level_standardization() {
        let oracle = PrefixOracle::default();
        let document = json!({"education": [
            {"description": "BS CS, MIT"},
            {"description": "MS CS, Stanford"}
        ]});
        let analysis = json!({"education": {"too_long": true}});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].section, "education");
        assert_eq!(out[0].issue, "Section needs standardization");
        assert_eq!(out[0].original_text, "BS CS, MIT • MS CS, Stanford");
    }

    #[tokio::test]
    async fn test_skills_too_generic_outranks_missing_proficiency() {
        let oracle = PrefixOracle::default();
        let document = json!({"skills": {"technical": ["Rust"], "soft": ["writing"]}});
        let analysis = json!({"skills": {"too_generic": true, "missing_proficiency": true}});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 1, "skills makes at most one oracle call");
        assert_eq!(out[0].issue, "Skills too generic");
        assert_eq!(out[0].original_text, "Rust, writing");
    }

    #[tokio::test]
    async fn test_skills_missing_proficiency_label_when_alone() {
        let oracle = PrefixOracle::default();
        let document = json!({"skills": ["Rust", "SQL"]});
        let analysis = json!({"skills": {"missing_proficiency": true}});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].issue, "Missing proficiency levels");
    }

    #[tokio::test]
    async fn test_skills_empty_flattening_makes_no_call() {
        let oracle = PrefixOracle::default();
        let document = json!({"skills": "Rust, SQL", "summary": "x"});
        let analysis = json!({"skills": {"too_generic": true}});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert!(out.is_empty(), "scalar skills flatten to empty, no call made");
        assert!(oracle.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_summary_non_string_is_treated_as_absent() {
        let oracle = PrefixOracle::default();
        let document = json!({"summary": ["not", "a", "string"]});
        let analysis = json!({"summary": {"too_generic": true}});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_non_list_issue_data_for_experience_is_ignored() {
        let oracle = PrefixOracle::default();
        let document = json!({"experience": ["Built things"]});
        let analysis = json!({"experience": {"no_metrics": true}});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert!(out.is_empty(), "section-level flags are not supported for experience");
        assert!(oracle.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_output_follows_fixed_section_order() {
        let oracle = PrefixOracle::default();
        let document = json!({
            "summary": "I work hard.",
            "skills": ["Rust"],
            "awards": ["Gold medal"],
            "education": [{"description": "BS CS"}],
            "internships": ["Intern at Acme"],
            "experience": ["Engineer at Beta"]
        });
        let analysis = json!({
            "summary": {"too_long": true},
            "skills": {"too_generic": true},
            "awards": [{"too_generic": true}],
            "education": [{"missing_dates": true}],
            "internships": [{"too_wordy": true}],
            "experience": [{"no_metrics": true}]
        });

        let out = generate_improvements(&oracle, &analysis, &document).await;
        let sections: Vec<&str> = out.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(
            sections,
            vec![
                "experience",
                "internships",
                "education",
                "awards_achievements",
                "skills",
                "summary",
            ]
        );
    }

    #[tokio::test]
    async fn test_item_order_precedes_flag_order_within_section() {
        let oracle = PrefixOracle::default();
        let document = json!({"experience": ["first role", "second role"]});
        let analysis = json!({"experience": [
            {"too_wordy": true, "no_metrics": true},
            {"weak_action_verbs": true}
        ]});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        let pairs: Vec<(&str, &str)> = out
            .iter()
            .map(|s| (s.original_text.as_str(), s.issue.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                // Item 0, flags in declared rule order (metrics before wordy)
                ("first role", "No measurable impact"),
                ("first role", "Too wordy"),
                // Then item 1
                ("second role", "Weak action verbs"),
            ]
        );
    }

    #[tokio::test]
    async fn test_mapping_items_flatten_through_description_field() {
        let oracle = PrefixOracle::default();
        let document = json!({"experience": [{
            "company": "Acme",
            "description": "Maintained the billing pipeline"
        }]});
        let analysis = json!({"experience": [{"responsibility_over_achievement": true}]});

        let out = generate_improvements(&oracle, &analysis, &document).await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].issue, "Not achievement-oriented");
        assert_eq!(out[0].original_text, "Maintained the billing pipeline");
    }
}
