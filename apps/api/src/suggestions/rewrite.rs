//! Parsing of experience/education rewrite text.
//!
//! A rewrite looks like:
//!
//! ```text
//! Senior Engineer | Acme Corp | Jan 2020 - Present | Berlin
//! * Led migration
//! * Reduced latency 30%
//! ```
//!
//! The pipe-delimited header fills structured fields, the bullet lines become
//! the description. Text with no bullet lines is used as the description
//! verbatim.

use crate::fields::split_date_range;
use crate::models::{EducationEntry, ExperienceEntry};
use crate::text::CANONICAL_BULLET;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRewrite {
    /// Trimmed header fields, when a header line was found.
    pub header: Option<Vec<String>>,
    pub description: String,
}

fn bullet_body(line: &str) -> Option<&str> {
    let line = line.trim_start();
    line.strip_prefix('*')
        .or_else(|| line.strip_prefix(CANONICAL_BULLET))
        .map(str::trim)
}

pub fn parse_rewrite(text: &str) -> ParsedRewrite {
    let header = text
        .lines()
        .filter(|line| bullet_body(line).is_none())
        .find(|line| line.contains('|'))
        .map(|line| line.split('|').map(|f| f.trim().to_string()).collect());

    let bullets: Vec<&str> = text
        .lines()
        .filter_map(bullet_body)
        .filter(|b| !b.is_empty())
        .collect();

    let description = if bullets.is_empty() {
        text.trim().to_string()
    } else {
        bullets.join("\n")
    };

    ParsedRewrite {
        header,
        description,
    }
}

/// An entry kind the merge engine can rewrite from suggestion text.
pub trait RewriteTarget: Clone {
    /// Section name used in change tags.
    const SECTION: &'static str;

    fn blank(id: String) -> Self;

    /// Applies header fields in section order. Empty fields keep the
    /// current value.
    fn apply_header(&mut self, fields: &[String]);

    fn set_description(&mut self, description: String);

    fn apply_rewrite(&mut self, text: &str) {
        let parsed = parse_rewrite(text);
        if let Some(fields) = &parsed.header {
            self.apply_header(fields);
        }
        self.set_description(parsed.description);
    }
}

fn set_if_present(target: &mut String, value: Option<&String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *target = value.clone();
    }
}

impl RewriteTarget for ExperienceEntry {
    const SECTION: &'static str = "experience";

    fn blank(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// `position | company | dates [| location]`
    fn apply_header(&mut self, fields: &[String]) {
        set_if_present(&mut self.position, fields.first());
        set_if_present(&mut self.company, fields.get(1));
        if let Some(dates) = fields.get(2) {
            let (start, end) = split_date_range(dates);
            set_if_present(&mut self.start_date, Some(&start));
            set_if_present(&mut self.end_date, Some(&end));
        }
        set_if_present(&mut self.location, fields.get(3));
    }

    fn set_description(&mut self, description: String) {
        self.description = description;
    }
}

impl RewriteTarget for EducationEntry {
    const SECTION: &'static str = "education";

    fn blank(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// `degree | institution | year`
    fn apply_header(&mut self, fields: &[String]) {
        set_if_present(&mut self.degree, fields.first());
        set_if_present(&mut self.institution, fields.get(1));
        set_if_present(&mut self.year, fields.get(2));
    }

    fn set_description(&mut self, description: String) {
        self.description = description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_bullets() {
        let parsed = parse_rewrite(
            "Senior Engineer | Acme Corp | Jan 2020 - Present\n* Led migration\n* Reduced latency 30%",
        );
        assert_eq!(
            parsed.header,
            Some(vec![
                "Senior Engineer".to_string(),
                "Acme Corp".to_string(),
                "Jan 2020 - Present".to_string()
            ])
        );
        assert_eq!(parsed.description, "Led migration\nReduced latency 30%");
    }

    #[test]
    fn test_glyph_bullets_count() {
        let parsed = parse_rewrite("• Built it\n  * Ran it");
        assert_eq!(parsed.header, None);
        assert_eq!(parsed.description, "Built it\nRan it");
    }

    #[test]
    fn test_no_bullets_uses_text_verbatim() {
        let parsed = parse_rewrite("  Rewrote the whole thing.\nTwice.  ");
        assert_eq!(parsed.header, None);
        assert_eq!(parsed.description, "Rewrote the whole thing.\nTwice.");
    }

    #[test]
    fn test_pipe_inside_bullet_is_not_a_header() {
        let parsed = parse_rewrite("* Used A | B testing");
        assert_eq!(parsed.header, None);
        assert_eq!(parsed.description, "Used A | B testing");
    }

    #[test]
    fn test_experience_header_with_location() {
        let mut entry = ExperienceEntry::blank("e1".into());
        entry.apply_rewrite("Engineer | Acme | 2018 to 2020 | Berlin\n* Did things");
        assert_eq!(entry.id, "e1");
        assert_eq!(entry.position, "Engineer");
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.start_date, "2018");
        assert_eq!(entry.end_date, "2020");
        assert_eq!(entry.location, "Berlin");
        assert_eq!(entry.description, "Did things");
    }

    #[test]
    fn test_empty_header_fields_keep_existing_values() {
        let mut entry = ExperienceEntry {
            id: "e1".into(),
            company: "Acme".into(),
            position: "Engineer".into(),
            start_date: "2019".into(),
            end_date: "2021".into(),
            ..Default::default()
        };
        entry.apply_rewrite("Staff Engineer |  | \n* Led platform");
        assert_eq!(entry.position, "Staff Engineer");
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.start_date, "2019");
        assert_eq!(entry.end_date, "2021");
    }

    #[test]
    fn test_education_header() {
        let mut entry = EducationEntry::blank("ed1".into());
        entry.apply_rewrite("BSc Computer Science | MIT | 2019");
        assert_eq!(entry.degree, "BSc Computer Science");
        assert_eq!(entry.institution, "MIT");
        assert_eq!(entry.year, "2019");
        assert_eq!(entry.description, "BSc Computer Science | MIT | 2019");
    }
}
