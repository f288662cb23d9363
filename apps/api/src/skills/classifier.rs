//! Skill Classifier — maps one skill token onto a taxonomy category.
//!
//! Two passes over the shared rule table: exact tokens first, then the ordered
//! substring heuristics. Anything unmatched lands in "Other Tools".

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::skills::taxonomy::{Category, EXACT_TOKENS, HEURISTICS};

fn exact_index() -> &'static HashMap<&'static str, Category> {
    static INDEX: OnceLock<HashMap<&'static str, Category>> = OnceLock::new();
    INDEX.get_or_init(|| {
        EXACT_TOKENS
            .iter()
            .flat_map(|(category, tokens)| tokens.iter().map(move |t| (*t, *category)))
            .collect()
    })
}

/// Lower-cases, trims and collapses inner whitespace so "Spring  Boot" and
/// "spring boot" hit the same token.
fn fold(skill: &str) -> String {
    skill
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Classifies a skill. Total and deterministic: every input, including the
/// empty string, maps to exactly one built-in category.
pub fn classify(skill: &str) -> Category {
    let needle = fold(skill);
    if needle.is_empty() {
        return Category::OtherTools;
    }

    if let Some(category) = exact_index().get(needle.as_str()) {
        return *category;
    }

    HEURISTICS
        .iter()
        .find(|rule| rule.matches(&needle))
        .map(|rule| rule.category)
        .unwrap_or(Category::OtherTools)
}
