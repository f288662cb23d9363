//! ChangeSet — the tags describing what one merge pass changed.
//!
//! Presentation only: the UI highlights tagged sections, nothing downstream
//! interprets the tags. Serialized as a sorted array of unique strings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet(BTreeSet<String>);

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn extend(&mut self, other: ChangeSet) {
        self.0.extend(other.0);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tag vocabulary
// ────────────────────────────────────────────────────────────────────────────

pub const SKILLS_UPDATED: &str = "skills-ai-update";

pub fn rewrite_tag(section: &str) -> String {
    format!("{section}-ai-rewrite")
}

pub fn skill_tag(category: &str, skill: &str) -> String {
    format!("skills-{category}-{skill}")
}

pub fn entry_tag(section: &str, index: usize) -> String {
    format!("{section}-{index}-ai-rewrite")
}

pub fn added_tag(section: &str, id: &str) -> String {
    format!("{section}-{id}-ai-added")
}
