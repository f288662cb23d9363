//! The canonical resume document exchanged with the editor UI.
//!
//! Every field defaults to empty, so any partial JSON object deserializes.
//! `skills` goes through the category normalizer on the way in.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::fields::coerce_scalar;
use crate::skills::CategoryMap;
use crate::text::segment;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub basic_details: BasicDetails,
    pub summary: String,
    pub objective: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: CategoryMap,
    pub languages: Vec<LanguageEntry>,
    pub projects: Vec<Record>,
    pub certifications: Vec<Record>,
    pub references: Vec<Record>,
    pub activities: Vec<Record>,
    pub custom_sections: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicDetails {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub location: String,
}

impl ExperienceEntry {
    pub fn bullets(&self) -> Vec<String> {
        segment(&self.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub year: String,
    pub description: String,
    pub grade: String,
    pub location: String,
}

impl EducationEntry {
    pub fn bullets(&self) -> Vec<String> {
        segment(&self.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageEntry {
    pub name: String,
    pub proficiency: String,
}

/// A loosely-typed section record (project, certification, reference, ...).
/// Only `id` is interpreted; every other field is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }
}

/// Accepts string, numeric or boolean ids; anything else reads as "".
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    Ok(coerce_scalar(&raw).unwrap_or_default())
}
