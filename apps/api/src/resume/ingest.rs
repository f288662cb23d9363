//! Resume Ingestor — raw extracted resume JSON → canonical [`ResumeDocument`].
//!
//! Extraction producers disagree on field names (`company` vs `Company`,
//! `title` vs `Role` vs `jobTitle`, ...), so every field is read through an
//! alias list. Ingestion is total: anything that isn't an object yields the
//! empty document, and unexpected field types leave that field empty.

use serde_json::{Map, Value};
use tracing::debug;

use crate::fields::{coerce_scalar, lookup, split_date_range, string_field, text_field};
use crate::ids::IdGenerator;
use crate::models::{
    BasicDetails, EducationEntry, ExperienceEntry, LanguageEntry, Record, ResumeDocument,
};
use crate::skills::normalize_skills;

const BASIC_DETAILS_KEYS: &[&str] = &["basicDetails", "basics", "personalInfo", "contact"];
const EXPERIENCE_KEYS: &[&str] = &["experience", "workExperience", "work", "employment"];

pub fn ingest_resume(raw: &Value, ids: &dyn IdGenerator) -> ResumeDocument {
    let Some(root) = raw.as_object() else {
        debug!("Ingest input is not an object; returning empty document");
        return ResumeDocument::default();
    };

    ResumeDocument {
        basic_details: basic_details(root),
        summary: text_field(root, &["summary", "professionalSummary", "profile", "about"]),
        objective: text_field(root, &["objective", "careerObjective"]),
        experience: objects(root, EXPERIENCE_KEYS)
            .map(|obj| experience_entry(obj, ids))
            .collect(),
        education: objects(root, &["education"])
            .map(|obj| education_entry(obj, ids))
            .collect(),
        skills: lookup(root, &["skills", "technicalSkills"])
            .map(normalize_skills)
            .unwrap_or_default(),
        languages: languages(root),
        projects: records(root, "projects", ids),
        certifications: records(root, "certifications", ids),
        references: records(root, "references", ids),
        activities: records(root, "activities", ids),
        custom_sections: records(root, "customSections", ids),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn basic_details(root: &Map<String, Value>) -> BasicDetails {
    let source = lookup(root, BASIC_DETAILS_KEYS)
        .and_then(Value::as_object)
        .unwrap_or(root);

    BasicDetails {
        name: string_field(source, &["name", "fullName"]),
        title: string_field(source, &["title", "jobTitle", "headline"]),
        email: string_field(source, &["email"]),
        phone: string_field(source, &["phone", "mobile"]),
        location: string_field(source, &["location", "address"]),
        website: string_field(source, &["website", "portfolio"]),
        linkedin: string_field(source, &["linkedin"]),
        github: string_field(source, &["github"]),
    }
}

fn experience_entry(obj: &Map<String, Value>, ids: &dyn IdGenerator) -> ExperienceEntry {
    let mut start_date = string_field(obj, &["startDate", "start_date", "from", "start"]);
    let mut end_date = string_field(obj, &["endDate", "end_date", "to", "end"]);
    if start_date.is_empty() && end_date.is_empty() {
        let range = string_field(obj, &["dates", "duration", "period"]);
        (start_date, end_date) = split_date_range(&range);
    }

    ExperienceEntry {
        id: existing_id(obj).unwrap_or_else(|| ids.next_id()),
        company: string_field(obj, &["company", "employer", "organization"]),
        position: string_field(
            obj,
            &["position", "title", "role", "jobTitle", "designation"],
        ),
        start_date,
        end_date,
        description: text_field(
            obj,
            &["description", "responsibilities", "achievements", "details"],
        ),
        location: string_field(obj, &["location"]),
    }
}

fn education_entry(obj: &Map<String, Value>, ids: &dyn IdGenerator) -> EducationEntry {
    EducationEntry {
        id: existing_id(obj).unwrap_or_else(|| ids.next_id()),
        institution: string_field(obj, &["institution", "school", "university", "college"]),
        degree: string_field(obj, &["degree", "qualification"]),
        year: string_field(obj, &["year", "graduationYear", "endDate", "dates"]),
        description: text_field(obj, &["description"]),
        grade: string_field(obj, &["grade", "gpa", "cgpa", "percentage"]),
        location: string_field(obj, &["location"]),
    }
}

fn languages(root: &Map<String, Value>) -> Vec<LanguageEntry> {
    match lookup(root, &["languages"]) {
        Some(Value::Array(items)) => items.iter().filter_map(language_entry).collect(),
        Some(Value::String(list)) => list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| LanguageEntry {
                name: name.to_string(),
                proficiency: String::new(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn language_entry(item: &Value) -> Option<LanguageEntry> {
    let entry = match item {
        Value::Object(obj) => LanguageEntry {
            name: string_field(obj, &["name", "language"]),
            proficiency: string_field(obj, &["proficiency", "level"]),
        },
        other => LanguageEntry {
            name: coerce_scalar(other)?.trim().to_string(),
            proficiency: String::new(),
        },
    };
    (!entry.name.is_empty()).then_some(entry)
}

fn records(root: &Map<String, Value>, key: &str, ids: &dyn IdGenerator) -> Vec<Record> {
    let Some(Value::Array(items)) = lookup(root, &[key]) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let fields = record_fields(item)?;
            let id = item
                .as_object()
                .and_then(existing_id)
                .unwrap_or_else(|| ids.next_id());
            Some(Record::new(id, fields))
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Object items of the first array found under `keys`; other items are skipped.
fn objects<'a>(
    root: &'a Map<String, Value>,
    keys: &[&str],
) -> impl Iterator<Item = &'a Map<String, Value>> {
    let items: &[Value] = match lookup(root, keys) {
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => {
            debug!("Skipping non-list section under {keys:?}: {other}");
            &[]
        }
        None => &[],
    };
    items.iter().filter_map(Value::as_object)
}

fn existing_id(obj: &Map<String, Value>) -> Option<String> {
    obj.get("id")
        .and_then(coerce_scalar)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
}

/// Fields of a loosely-typed record, without its id. Objects are taken as-is,
/// non-blank strings become `{name}`, anything else is rejected.
pub(crate) fn record_fields(item: &Value) -> Option<Map<String, Value>> {
    match item {
        Value::Object(obj) => {
            let mut fields = obj.clone();
            fields.remove("id");
            Some(fields)
        }
        Value::String(name) if !name.trim().is_empty() => {
            let mut fields = Map::new();
            fields.insert("name".to_string(), Value::String(name.trim().to_string()));
            Some(fields)
        }
        other => {
            debug!("Skipping record of unexpected shape: {other}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use serde_json::json;

    fn ingest(raw: Value) -> ResumeDocument {
        ingest_resume(&raw, &SequentialIdGenerator::new("id"))
    }

    #[test]
    fn test_non_object_yields_empty_document() {
        for raw in [json!(null), json!("resume"), json!([1, 2]), json!(3)] {
            assert_eq!(ingest(raw), ResumeDocument::default());
        }
    }

    #[test]
    fn test_basic_details_from_nested_object() {
        let doc = ingest(json!({
            "basics": {"fullName": "Ada Lovelace", "headline": "Engineer", "mobile": 5551234}
        }));
        assert_eq!(doc.basic_details.name, "Ada Lovelace");
        assert_eq!(doc.basic_details.title, "Engineer");
        assert_eq!(doc.basic_details.phone, "5551234");
    }

    #[test]
    fn test_basic_details_fall_back_to_root() {
        let doc = ingest(json!({"Name": "Grace", "email": "g@example.com", "address": "NYC"}));
        assert_eq!(doc.basic_details.name, "Grace");
        assert_eq!(doc.basic_details.email, "g@example.com");
        assert_eq!(doc.basic_details.location, "NYC");
    }

    #[test]
    fn test_alias_keys_match_canonical_keys() {
        let canonical = ingest(json!({
            "experience": [{
                "id": "e1",
                "company": "Acme",
                "position": "Engineer",
                "startDate": "Jan 2020",
                "endDate": "Present"
            }]
        }));
        let aliased = ingest(json!({
            "workExperience": [{
                "id": "e1",
                "Company": "Acme",
                "Role": "Engineer",
                "dates": "Jan 2020 - Present"
            }]
        }));
        assert_eq!(canonical.experience, aliased.experience);

        let job_title = ingest(json!({
            "work": [{"id": "e1", "employer": "Acme", "jobTitle": "Engineer",
                      "from": "Jan 2020", "to": "Present"}]
        }));
        assert_eq!(canonical.experience, job_title.experience);
    }

    #[test]
    fn test_missing_ids_are_generated_and_existing_kept() {
        let doc = ingest(json!({
            "experience": [{"company": "A"}, {"id": "keep-me", "company": "B"}, {"id": "", "company": "C"}],
            "education": [{"school": "MIT"}]
        }));
        let ids: Vec<_> = doc.experience.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["id-1", "keep-me", "id-2"]);
        assert_eq!(doc.education[0].id, "id-3");
    }

    #[test]
    fn test_description_arrays_are_joined() {
        let doc = ingest(json!({
            "experience": [{"responsibilities": ["Led team", "Shipped v2"]}]
        }));
        assert_eq!(doc.experience[0].description, "Led team\nShipped v2");
        assert_eq!(doc.experience[0].bullets(), ["Led team", "Shipped v2"]);
    }

    #[test]
    fn test_education_aliases() {
        let doc = ingest(json!({
            "education": [{"university": "MIT", "qualification": "BSc", "graduationYear": 2019, "gpa": 3.9}]
        }));
        let entry = &doc.education[0];
        assert_eq!(entry.institution, "MIT");
        assert_eq!(entry.degree, "BSc");
        assert_eq!(entry.year, "2019");
        assert_eq!(entry.grade, "3.9");
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let doc = ingest(json!({"experience": ["freelance", {"company": "A"}], "education": "MIT"}));
        assert_eq!(doc.experience.len(), 1);
        assert!(doc.education.is_empty());
    }

    #[test]
    fn test_skills_are_normalized() {
        let doc = ingest(json!({"technicalSkills": ["Rust", "Docker"]}));
        assert_eq!(doc.skills.get("Languages"), ["Rust"]);
        assert_eq!(doc.skills.get("Cloud"), ["Docker"]);
        assert_eq!(doc.skills.len(), 14);

        assert_eq!(ingest(json!({})).skills.len(), 14);
    }

    #[test]
    fn test_languages_from_strings_and_objects() {
        let doc = ingest(json!({
            "languages": ["English", {"language": "Hindi", "level": "Native"}, {"proficiency": "x"}]
        }));
        assert_eq!(
            doc.languages,
            [
                LanguageEntry { name: "English".into(), proficiency: String::new() },
                LanguageEntry { name: "Hindi".into(), proficiency: "Native".into() },
            ]
        );
    }

    #[test]
    fn test_records_keep_fields_and_wrap_strings() {
        let doc = ingest(json!({
            "projects": [{"id": "p1", "name": "Compiler", "tech": ["Rust"]}, "Side project", 42],
            "customSections": [{"title": "Volunteering"}]
        }));
        assert_eq!(doc.projects.len(), 2);
        assert_eq!(doc.projects[0].id, "p1");
        assert_eq!(doc.projects[0].fields["tech"], json!(["Rust"]));
        assert!(!doc.projects[0].fields.contains_key("id"));
        assert_eq!(doc.projects[1].get_str("name"), Some("Side project"));
        assert_eq!(doc.projects[1].id, "id-1");
        assert_eq!(doc.custom_sections[0].get_str("title"), Some("Volunteering"));
    }

    #[test]
    fn test_summary_aliases() {
        let doc = ingest(json!({"professionalSummary": "  Builder of things. ", "careerObjective": "Ship"}));
        assert_eq!(doc.summary, "Builder of things.");
        assert_eq!(doc.objective, "Ship");
    }
}
