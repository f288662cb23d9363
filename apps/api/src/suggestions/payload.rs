//! Typed view of the untrusted suggestion payload.
//!
//! The suggestion producer wraps sections in an `appliedRewrites` or
//! `sectionSuggestions` envelope (or neither) and changes a section's shape
//! between versions: a string, a list, an object keyed by category. The JSON
//! is decoded once here; every shape that can't be used is logged and dropped
//! for that section only.

use serde_json::{Map, Value};
use tracing::warn;

use crate::fields::{coerce_scalar, lookup};
use crate::resume::ingest::record_fields;

/// Envelope levels in precedence order; the payload root comes last.
const ENVELOPES: &[&str] = &["appliedRewrites", "sectionSuggestions"];

const SUMMARY_KEYS: &[&str] = &["summary", "professionalSummary"];
const OBJECTIVE_KEYS: &[&str] = &["objective", "careerObjective"];
const SKILLS_KEYS: &[&str] = &["skills", "technicalSkills"];
const EXPERIENCE_KEYS: &[&str] = &["workExperience", "experience"];
const EDUCATION_KEYS: &[&str] = &["education"];
const PROJECT_KEYS: &[&str] = &["projects"];
const CERTIFICATION_KEYS: &[&str] = &["certifications"];
const KEYWORD_KEYS: &[&str] = &[
    "missingKeywords",
    "criticalKeywords",
    "missingSkills",
    "criticalSkills",
];

/// Fields a text section object may carry its replacement under.
const TEXT_KEYS: &[&str] = &["rewrite", "suggested", "text", "content"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionPayload {
    pub summary: Option<String>,
    pub objective: Option<String>,
    pub skills: Option<SkillsSuggestion>,
    pub experience: Option<EntryRewrite>,
    pub education: Option<EntryRewrite>,
    pub projects: Vec<Map<String, Value>>,
    pub certifications: Vec<Map<String, Value>>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkillsSuggestion {
    /// `{"Languages": "Go, Rust", "Cloud": ["AWS"]}`, tokens already split.
    Categorized(Vec<(String, Vec<String>)>),
    /// `["Languages: Go, Rust", "Jira"]`, parsed during merge.
    Lines(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryRewrite {
    /// Rewrite text for the first entry.
    Single(String),
    /// Rewrite text per entry index; `None` leaves that entry alone.
    Indexed(Vec<Option<String>>),
}

impl SuggestionPayload {
    pub fn from_value(raw: &Value) -> Self {
        let Some(root) = raw.as_object() else {
            if !raw.is_null() {
                warn!("Suggestion payload is not an object; ignoring it");
            }
            return Self::default();
        };

        let mut levels: Vec<&Map<String, Value>> = ENVELOPES
            .iter()
            .filter_map(|key| root.get(*key).and_then(Value::as_object))
            .collect();
        levels.push(root);

        let section = |keys: &[&str]| levels.iter().find_map(|level| lookup(level, keys));

        Self {
            summary: section(SUMMARY_KEYS).and_then(|v| text_section("summary", v)),
            objective: section(OBJECTIVE_KEYS).and_then(|v| text_section("objective", v)),
            skills: section(SKILLS_KEYS).and_then(skills_section),
            experience: section(EXPERIENCE_KEYS).and_then(|v| entry_rewrite("experience", v)),
            education: section(EDUCATION_KEYS).and_then(|v| entry_rewrite("education", v)),
            projects: section(PROJECT_KEYS)
                .map(|v| new_records("projects", v))
                .unwrap_or_default(),
            certifications: section(CERTIFICATION_KEYS)
                .map(|v| new_records("certifications", v))
                .unwrap_or_default(),
            keywords: levels
                .iter()
                .flat_map(|level| {
                    KEYWORD_KEYS
                        .iter()
                        .filter_map(move |key| level.get(*key))
                })
                .flat_map(split_tokens)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section decoders
// ────────────────────────────────────────────────────────────────────────────

/// Non-blank replacement text, from a string or a wrapping object.
fn text_section(section: &str, value: &Value) -> Option<String> {
    let text = match value {
        Value::Object(obj) => lookup(obj, TEXT_KEYS).and_then(coerce_scalar),
        other => {
            let text = coerce_scalar(other);
            if text.is_none() {
                warn!("Skipping {section} suggestion of unexpected shape: {other}");
            }
            text
        }
    }?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn skills_section(value: &Value) -> Option<SkillsSuggestion> {
    match value {
        Value::Object(map) => {
            let categories: Vec<(String, Vec<String>)> = map
                .iter()
                .filter(|(category, _)| !category.trim().is_empty())
                .map(|(category, tokens)| (category.trim().to_string(), split_tokens(tokens)))
                .collect();
            (!categories.is_empty()).then_some(SkillsSuggestion::Categorized(categories))
        }
        Value::Array(items) => {
            let lines: Vec<String> = items
                .iter()
                .filter_map(|item| {
                    let line = coerce_scalar(item);
                    if line.is_none() {
                        warn!("Skipping skills line of unexpected shape: {item}");
                    }
                    line
                })
                .filter(|line| !line.trim().is_empty())
                .collect();
            (!lines.is_empty()).then_some(SkillsSuggestion::Lines(lines))
        }
        Value::String(text) => {
            let lines: Vec<String> = text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect();
            (!lines.is_empty()).then_some(SkillsSuggestion::Lines(lines))
        }
        other => {
            warn!("Skipping skills suggestion of unexpected shape: {other}");
            None
        }
    }
}

fn entry_rewrite(section: &str, value: &Value) -> Option<EntryRewrite> {
    match value {
        Value::Array(items) => {
            let rewrites: Vec<Option<String>> = items
                .iter()
                .map(|item| match item {
                    Value::Null => None,
                    item => text_section(section, item),
                })
                .collect();
            rewrites
                .iter()
                .any(Option::is_some)
                .then_some(EntryRewrite::Indexed(rewrites))
        }
        other => text_section(section, other).map(EntryRewrite::Single),
    }
}

/// Items to append as new records. A lone object or string counts as one item.
fn new_records(section: &str, value: &Value) -> Vec<Map<String, Value>> {
    match value {
        Value::Array(items) => items.iter().filter_map(record_fields).collect(),
        Value::Object(_) | Value::String(_) => record_fields(value).into_iter().collect(),
        other => {
            warn!("Skipping {section} suggestion of unexpected shape: {other}");
            Vec::new()
        }
    }
}

/// Comma-separated string or list of scalars → trimmed, non-blank tokens.
fn split_tokens(value: &Value) -> Vec<String> {
    let raw: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(coerce_scalar).collect(),
        Value::Null => Vec::new(),
        other => match coerce_scalar(other) {
            Some(s) => vec![s],
            None => {
                warn!("Skipping skill tokens of unexpected shape: {other}");
                Vec::new()
            }
        },
    };
    raw.iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
