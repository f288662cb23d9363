//! Suggestion Merge Engine — overlays a suggestion payload onto a resume.
//!
//! A pure reducer: the starting resume is never mutated, each section is
//! merged independently, and the result is a new resume plus the tags of
//! what changed. Sections the payload doesn't address are carried over
//! untouched. Skills are add-only; projects and certifications are
//! append-only; summary, objective and targeted entries are overwritten.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::ids::IdGenerator;
use crate::models::{Record, ResumeDocument};
use crate::skills::{classify, Category, CategoryMap};
use crate::suggestions::change_set::{
    added_tag, entry_tag, rewrite_tag, skill_tag, ChangeSet, SKILLS_UPDATED,
};
use crate::suggestions::payload::{EntryRewrite, SkillsSuggestion, SuggestionPayload};
use crate::suggestions::rewrite::RewriteTarget;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeOutcome {
    pub resume: ResumeDocument,
    pub changes: ChangeSet,
}

/// Decodes an untrusted payload and merges it.
pub fn merge_value(resume: &ResumeDocument, raw: &Value, ids: &dyn IdGenerator) -> MergeOutcome {
    merge_suggestions(resume, &SuggestionPayload::from_value(raw), ids)
}

pub fn merge_suggestions(
    resume: &ResumeDocument,
    payload: &SuggestionPayload,
    ids: &dyn IdGenerator,
) -> MergeOutcome {
    let mut changes = ChangeSet::new();

    let (summary, c) = merge_text("summary", &resume.summary, payload.summary.as_deref());
    changes.extend(c);
    let (objective, c) = merge_text("objective", &resume.objective, payload.objective.as_deref());
    changes.extend(c);
    let (skills, c) = merge_skills(&resume.skills, payload.skills.as_ref(), &payload.keywords);
    changes.extend(c);
    let (experience, c) = merge_entries(&resume.experience, payload.experience.as_ref(), ids);
    changes.extend(c);
    let (education, c) = merge_entries(&resume.education, payload.education.as_ref(), ids);
    changes.extend(c);
    let (projects, c) = append_records("projects", &resume.projects, &payload.projects, ids);
    changes.extend(c);
    let (certifications, c) = append_records(
        "certifications",
        &resume.certifications,
        &payload.certifications,
        ids,
    );
    changes.extend(c);

    debug!("Merge produced {} change(s)", changes.len());

    MergeOutcome {
        resume: ResumeDocument {
            summary,
            objective,
            skills,
            experience,
            education,
            projects,
            certifications,
            ..resume.clone()
        },
        changes,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Summary / objective
// ────────────────────────────────────────────────────────────────────────────

fn merge_text(section: &str, current: &str, replacement: Option<&str>) -> (String, ChangeSet) {
    let mut changes = ChangeSet::new();
    match replacement.map(str::trim).filter(|r| !r.is_empty()) {
        Some(text) => {
            changes.insert(rewrite_tag(section));
            (text.to_string(), changes)
        }
        None => (current.to_string(), changes),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

fn merge_skills(
    current: &CategoryMap,
    suggestion: Option<&SkillsSuggestion>,
    keywords: &[String],
) -> (CategoryMap, ChangeSet) {
    let mut skills = current.clone();
    let mut changes = ChangeSet::new();
    let mut touched = false;

    match suggestion {
        Some(SkillsSuggestion::Categorized(categories)) => {
            for (category, tokens) in categories {
                if skills.add_category(category) {
                    debug!("Created skills category '{category}' from suggestion");
                    touched = true;
                }
                for token in tokens {
                    touched |= add_skill(&mut skills, &mut changes, category, token);
                }
            }
        }
        Some(SkillsSuggestion::Lines(lines)) => {
            for line in lines {
                let (category, tokens) = parse_skill_line(line);
                for token in tokens {
                    touched |= add_skill(&mut skills, &mut changes, category, token);
                }
            }
        }
        None => {}
    }

    for keyword in keywords {
        let category = classify(keyword);
        touched |= add_skill(&mut skills, &mut changes, category.as_str(), keyword);
    }

    if touched {
        changes.insert(SKILLS_UPDATED);
    }
    (skills, changes)
}

/// Inserts `token` unless already present, tagging the addition.
fn add_skill(
    skills: &mut CategoryMap,
    changes: &mut ChangeSet,
    category: &str,
    token: &str,
) -> bool {
    if !skills.insert(category, token) {
        return false;
    }
    let key = skills.resolve_category(category);
    changes.insert(skill_tag(&key, token.trim()));
    true
}

/// `"Languages: Go, Rust"` → `("Languages", ["Go", "Rust"])`. A line without
/// a colon lists skills for "Other Tools".
fn parse_skill_line(line: &str) -> (&str, Vec<&str>) {
    let (category, list) = match line.split_once(':') {
        Some((category, list)) => (category.trim(), list),
        None => (Category::OtherTools.as_str(), line),
    };
    let tokens = list
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    (category, tokens)
}

// ────────────────────────────────────────────────────────────────────────────
// Experience / education
// ────────────────────────────────────────────────────────────────────────────

fn merge_entries<T: RewriteTarget>(
    current: &[T],
    rewrite: Option<&EntryRewrite>,
    ids: &dyn IdGenerator,
) -> (Vec<T>, ChangeSet) {
    let mut entries = current.to_vec();
    let mut changes = ChangeSet::new();

    match rewrite {
        Some(EntryRewrite::Single(text)) => {
            if entries.is_empty() {
                entries.push(T::blank(ids.next_id()));
            }
            entries[0].apply_rewrite(text);
            changes.insert(entry_tag(T::SECTION, 0));
        }
        Some(EntryRewrite::Indexed(rewrites)) => {
            for (index, text) in rewrites.iter().enumerate() {
                let Some(text) = text else { continue };
                match entries.get_mut(index) {
                    Some(entry) => {
                        entry.apply_rewrite(text);
                        changes.insert(entry_tag(T::SECTION, index));
                    }
                    None => debug!(
                        "Skipping {} rewrite #{index}: only {} entries",
                        T::SECTION,
                        current.len()
                    ),
                }
            }
        }
        None => {}
    }

    (entries, changes)
}

// ────────────────────────────────────────────────────────────────────────────
// Projects / certifications
// ────────────────────────────────────────────────────────────────────────────

fn append_records(
    section: &str,
    current: &[Record],
    additions: &[Map<String, Value>],
    ids: &dyn IdGenerator,
) -> (Vec<Record>, ChangeSet) {
    let mut records = current.to_vec();
    let mut changes = ChangeSet::new();
    for fields in additions {
        let id = ids.next_id();
        changes.insert(added_tag(section, &id));
        records.push(Record::new(id, fields.clone()));
    }
    (records, changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use crate::models::{EducationEntry, ExperienceEntry};
    use serde_json::json;

    fn ids() -> SequentialIdGenerator {
        SequentialIdGenerator::new("new")
    }

    fn resume() -> ResumeDocument {
        serde_json::from_value(json!({
            "basicDetails": {"name": "Ada"},
            "summary": "Original summary",
            "objective": "Original objective",
            "experience": [
                {"id": "e1", "company": "Acme", "position": "Engineer",
                 "startDate": "2019", "endDate": "2021", "description": "Built things"},
                {"id": "e2", "company": "Globex", "position": "Intern", "description": "Learned"}
            ],
            "education": [{"id": "ed1", "institution": "MIT", "degree": "BSc", "year": "2018"}],
            "skills": {"Languages": ["Python"], "Soft Skills": ["Empathy"]},
            "projects": [{"id": "p1", "name": "Compiler"}]
        }))
        .unwrap()
    }

    fn merge(resume: &ResumeDocument, payload: Value) -> MergeOutcome {
        merge_value(resume, &payload, &ids())
    }

    #[test]
    fn test_empty_payload_is_noop() {
        let start = resume();
        for payload in [json!(null), json!({}), json!({"summary": "", "skills": [], "projects": null})] {
            let outcome = merge(&start, payload);
            assert_eq!(outcome.resume, start);
            assert!(outcome.changes.is_empty());
        }
    }

    #[test]
    fn test_summary_only_payload_leaves_other_sections() {
        let start = resume();
        let outcome = merge(&start, json!({"summary": "Sharper summary"}));
        assert_eq!(outcome.resume.summary, "Sharper summary");
        assert_eq!(outcome.resume.experience, start.experience);
        assert_eq!(outcome.resume.education, start.education);
        assert_eq!(outcome.resume.skills, start.skills);
        assert_eq!(outcome.resume.objective, "Original objective");
        assert_eq!(outcome.changes.iter().collect::<Vec<_>>(), ["summary-ai-rewrite"]);
    }

    #[test]
    fn test_input_resume_is_not_mutated() {
        let start = resume();
        let snapshot = start.clone();
        let _ = merge(&start, json!({"summary": "x", "skills": {"Cloud": "AWS"}, "projects": ["y"]}));
        assert_eq!(start, snapshot);
    }

    #[test]
    fn test_line_skills_add_only_with_dedup() {
        let start = resume();
        let outcome = merge(&start, json!({"skills": ["Languages: Python, Python, Go"]}));
        assert_eq!(outcome.resume.skills.get("Languages"), ["Python", "Go"]);
        assert!(outcome.changes.contains("skills-Languages-Go"));
        assert!(!outcome.changes.contains("skills-Languages-Python"));
        assert!(outcome.changes.contains("skills-ai-update"));
    }

    #[test]
    fn test_bare_skill_lines_go_to_other_tools() {
        let outcome = merge(&resume(), json!({"skills": ["Jira, Figma"]}));
        assert_eq!(outcome.resume.skills.get("Other Tools"), ["Jira", "Figma"]);
        assert!(outcome.changes.contains("skills-Other Tools-Figma"));
    }

    #[test]
    fn test_categorized_skills_create_new_category() {
        let start = resume();
        let outcome = merge(
            &start,
            json!({"sectionSuggestions": {"skills": {"languages": "go, PYTHON", "Hardware": "FPGA"}}}),
        );
        let skills = &outcome.resume.skills;
        assert_eq!(skills.get("Languages"), ["Python", "go"]);
        assert_eq!(skills.get("Hardware"), ["FPGA"]);
        assert_eq!(skills.get("Soft Skills"), ["Empathy"]);
        assert_eq!(skills.len(), 16);
        assert!(outcome.changes.contains("skills-Languages-go"));
        assert!(outcome.changes.contains("skills-Hardware-FPGA"));
    }

    #[test]
    fn test_keywords_are_classified_and_added() {
        let outcome = merge(
            &resume(),
            json!({"missingKeywords": ["Kubernetes", "python"], "criticalKeywords": "PostgreSQL"}),
        );
        let skills = &outcome.resume.skills;
        assert_eq!(skills.get("Cloud"), ["Kubernetes"]);
        assert_eq!(skills.get("Database"), ["PostgreSQL"]);
        assert_eq!(skills.get("Languages"), ["Python"]);
        assert!(outcome.changes.contains("skills-Cloud-Kubernetes"));
        assert!(!outcome.changes.iter().any(|t| t.starts_with("skills-Languages")));
    }

    #[test]
    fn test_add_only_merge_is_idempotent() {
        let payload = json!({
            "skills": {"Languages": "Go", "Cloud": ["AWS"], "Hardware": []},
            "missingKeywords": ["Terraform"]
        });
        let first = merge(&resume(), payload.clone());
        assert!(!first.changes.is_empty());
        let second = merge(&first.resume, payload);
        assert_eq!(second.resume, first.resume);
        assert!(second.changes.is_empty());
    }

    #[test]
    fn test_experience_rewrite_creates_first_entry() {
        let start = ResumeDocument::default();
        let outcome = merge(
            &start,
            json!({"workExperience": "Senior Engineer | Acme Corp | Jan 2020 - Present\n* Led migration\n* Reduced latency 30%"}),
        );
        let entries = &outcome.resume.experience;
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.id, "new-1");
        assert_eq!(entry.position, "Senior Engineer");
        assert_eq!(entry.company, "Acme Corp");
        assert_eq!(entry.start_date, "Jan 2020");
        assert_eq!(entry.end_date, "Present");
        assert_eq!(entry.description, "Led migration\nReduced latency 30%");
        assert!(outcome.changes.contains("experience-0-ai-rewrite"));
    }

    #[test]
    fn test_single_rewrite_targets_first_existing_entry() {
        let start = resume();
        let outcome = merge(&start, json!({"appliedRewrites": {"experience": "Just better words."}}));
        let entries = &outcome.resume.experience;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "e1");
        assert_eq!(entries[0].company, "Acme");
        assert_eq!(entries[0].description, "Just better words.");
        assert_eq!(entries[1], start.experience[1]);
    }

    #[test]
    fn test_indexed_rewrites_touch_only_matching_entries() {
        let start = resume();
        let outcome = merge(
            &start,
            json!({"experience": [null, "Lead Intern | Globex | 2021\n* Ran standups", "Ghost | Nowhere | 2030"]}),
        );
        let entries = &outcome.resume.experience;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], start.experience[0]);
        assert_eq!(entries[1].position, "Lead Intern");
        assert_eq!(entries[1].start_date, "2021");
        assert_eq!(entries[1].description, "Ran standups");
        assert_eq!(
            outcome.changes.iter().collect::<Vec<_>>(),
            ["experience-1-ai-rewrite"]
        );
    }

    #[test]
    fn test_education_rewrite() {
        let outcome = merge(&resume(), json!({"education": "MSc | Stanford | 2020"}));
        let entry: &EducationEntry = &outcome.resume.education[0];
        assert_eq!(entry.id, "ed1");
        assert_eq!(entry.degree, "MSc");
        assert_eq!(entry.institution, "Stanford");
        assert!(outcome.changes.contains("education-0-ai-rewrite"));
    }

    #[test]
    fn test_projects_append_with_fresh_ids_every_time() {
        let start = resume();
        let payload = json!({"projects": [{"id": "p1", "name": "Search engine"}, "CLI"]});
        let first = merge_value(&start, &payload, &SequentialIdGenerator::new("a"));
        let names: Vec<_> = first.resume.projects.iter().filter_map(|p| p.get_str("name")).collect();
        assert_eq!(names, ["Compiler", "Search engine", "CLI"]);
        assert_eq!(first.resume.projects[1].id, "a-1");
        assert!(first.changes.contains("projects-a-1-ai-added"));
        assert!(first.changes.contains("projects-a-2-ai-added"));

        let second = merge_value(&first.resume, &payload, &SequentialIdGenerator::new("b"));
        assert_eq!(second.resume.projects.len(), 5);
        assert_eq!(second.resume.projects[3].id, "b-1");
    }

    #[test]
    fn test_certifications_append() {
        let outcome = merge(&resume(), json!({"certifications": [{"name": "CKA"}]}));
        assert_eq!(outcome.resume.certifications.len(), 1);
        assert!(outcome.changes.contains("certifications-new-1-ai-added"));
    }

    #[test]
    fn test_malformed_sections_skip_only_themselves() {
        let start = resume();
        let outcome = merge(
            &start,
            json!({"summary": "Kept", "skills": 42, "experience": {"unexpected": true}, "projects": 7}),
        );
        assert_eq!(outcome.resume.summary, "Kept");
        assert_eq!(outcome.resume.skills, start.skills);
        assert_eq!(outcome.resume.experience, start.experience);
        assert_eq!(outcome.resume.projects, start.projects);
        assert_eq!(outcome.changes.len(), 1);
    }

    #[test]
    fn test_untargeted_fields_survive() {
        let start = resume();
        let outcome = merge(&start, json!({"objective": "New objective"}));
        assert_eq!(outcome.resume.basic_details, start.basic_details);
        assert_eq!(outcome.resume.projects, start.projects);
        let first: &ExperienceEntry = &outcome.resume.experience[0];
        assert_eq!(first.description, "Built things");
    }
}
