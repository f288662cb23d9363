//! CategoryMap — category name → ordered, de-duplicated skill list.
//!
//! Always holds the 14 built-in categories (possibly empty) plus any custom
//! categories. There is no way to construct one without them: `Default`
//! seeds the taxonomy and `Deserialize` routes through the normalizer.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::skills::normalizer::normalize_skills;
use crate::skills::taxonomy::{Category, TAXONOMY};

#[derive(Debug, Clone)]
pub struct CategoryMap {
    entries: Vec<(String, Vec<String>)>,
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::with_taxonomy()
    }
}

impl CategoryMap {
    /// Every built-in category, each with an empty list.
    pub fn with_taxonomy() -> Self {
        Self {
            entries: TAXONOMY
                .iter()
                .map(|c| (c.as_str().to_string(), Vec::new()))
                .collect(),
        }
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(category))
    }

    /// The key `category` is stored under: an existing key matched
    /// case-insensitively, else the canonical built-in spelling, else the
    /// trimmed name. A blank name resolves to "Other Tools".
    pub fn resolve_category(&self, category: &str) -> String {
        let category = category.trim();
        if category.is_empty() {
            return Category::OtherTools.as_str().to_string();
        }
        if let Some(index) = self.position(category) {
            return self.entries[index].0.clone();
        }
        Category::from_name(category)
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| category.to_string())
    }

    pub fn get(&self, category: &str) -> &[String] {
        self.position(category.trim())
            .map(|i| self.entries[i].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: &str, skill: &str) -> bool {
        let skill = skill.trim();
        self.get(category)
            .iter()
            .any(|existing| existing.to_lowercase() == skill.to_lowercase())
    }

    /// Creates an empty custom category. Returns false when it already exists.
    pub fn add_category(&mut self, category: &str) -> bool {
        let key = self.resolve_category(category);
        if self.position(&key).is_some() {
            return false;
        }
        self.entries.push((key, Vec::new()));
        true
    }

    /// Appends `skill` unless the category already holds it (case-insensitive).
    /// Creates the category when absent. Returns whether anything was added.
    pub fn insert(&mut self, category: &str, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() {
            return false;
        }
        let key = self.resolve_category(category);
        if self.contains(&key, skill) {
            return false;
        }
        match self.position(&key) {
            Some(index) => self.entries[index].1.push(skill.to_string()),
            None => self.entries.push((key, vec![skill.to_string()])),
        }
        true
    }

    /// Removes `skill` from `category` (case-insensitive). The category itself
    /// stays, so built-in categories can be emptied but never dropped.
    pub fn remove(&mut self, category: &str, skill: &str) -> bool {
        let skill = skill.trim().to_lowercase();
        let Some(index) = self.position(category.trim()) else {
            return false;
        };
        let items = &mut self.entries[index].1;
        let before = items.len();
        items.retain(|existing| existing.to_lowercase() != skill);
        items.len() != before
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Categories outside the built-in taxonomy, in insertion order.
    pub fn custom_categories(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|name| Category::from_name(name).is_none())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skill_count(&self) -> usize {
        self.entries.iter().map(|(_, items)| items.len()).sum()
    }
}

/// Map equality: same categories holding the same ordered lists, regardless
/// of category order.
impl PartialEq for CategoryMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(name, items)| match other.position(name) {
                    Some(i) => other.entries[i].0 == *name && other.entries[i].1 == *items,
                    None => false,
                })
    }
}

impl Eq for CategoryMap {}

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, items) in &self.entries {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(normalize_skills(&raw))
    }
}
