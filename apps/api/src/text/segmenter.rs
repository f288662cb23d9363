//! Text Segmenter — splits a free-form description into bullet strings.
//!
//! Attempts, first non-empty result wins:
//! 1. glyph normalization (every known bullet glyph → `•`)
//! 2. split on `•`
//! 3. dash/asterisk-marked lines, when they are the majority shape
//! 4. prose sentences (needs at least two)
//! 5. the whole trimmed text as a single item
//!
//! Total: no input makes it panic, and it never drops non-whitespace content
//! other than the markers it recognizes.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::fields::coerce_scalar;

pub const CANONICAL_BULLET: char = '•';

const BULLET_GLYPHS: &[char] = &[
    '\u{2022}', // •
    '\u{2023}', // ‣
    '\u{25CF}', // ●
    '\u{25CB}', // ○
    '\u{25E6}', // ◦
    '\u{25AA}', // ▪
    '\u{25AB}', // ▫
    '\u{25A0}', // ■
    '\u{25A1}', // □
    '\u{25BA}', // ►
    '\u{27A2}', // ➢
    '\u{2043}', // ⁃
    '\u{00B7}', // middle dot
    '\u{2219}', // bullet operator
    '\u{F0B7}', // Wingdings private-use bullets
    '\u{F0A7}',
    '\u{F076}',
    '\u{F0D8}',
    '\u{F0FC}',
];

fn dash_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-*–—]\s+").expect("static regex"))
}

fn sentence_end() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([.!?])\s*([\p{L}(])").expect("static regex"))
}

/// Normalizes line endings, non-breaking spaces and bullet glyph variants.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .map(|c| match c {
            '\r' => '\n',
            '\u{00A0}' | '\u{202F}' => ' ',
            c if BULLET_GLYPHS.contains(&c) => CANONICAL_BULLET,
            c => c,
        })
        .collect()
}

fn non_empty_trimmed<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Each glyph starts a new item; text before the first glyph is kept as an item.
fn split_on_glyph(text: &str) -> Vec<String> {
    non_empty_trimmed(text.split(CANONICAL_BULLET))
}

/// Returns the stripped lines when strictly more than half of the non-empty
/// lines carry a `-`, `*`, en-dash or em-dash marker.
fn split_marked_lines(text: &str) -> Option<Vec<String>> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }

    let marked = lines.iter().filter(|l| dash_marker().is_match(l)).count();
    if marked * 2 <= lines.len() {
        return None;
    }

    let items: Vec<String> = lines
        .iter()
        .map(|l| dash_marker().replace(l, "").trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();
    (!items.is_empty()).then_some(items)
}

/// Breaks prose after `.`/`!`/`?` followed by a letter or `(` (with or without
/// the missing space) and after `;`. Existing line breaks also split.
fn split_sentences(text: &str) -> Vec<String> {
    let broken = sentence_end().replace_all(text, "$1\n$2");
    let broken = broken.replace(';', ";\n");
    non_empty_trimmed(broken.split('\n'))
}

pub fn segment(text: &str) -> Vec<String> {
    let text = normalize(text);

    if text.contains(CANONICAL_BULLET) {
        let items = split_on_glyph(&text);
        if !items.is_empty() {
            return items;
        }
    }

    if let Some(items) = split_marked_lines(&text) {
        return items;
    }

    let sentences = split_sentences(&text);
    if sentences.len() >= 2 {
        return sentences;
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![trimmed.to_string()]
    }
}

/// Segments an untyped value. Null, arrays and objects yield nothing; numbers
/// and booleans are stringified first.
pub fn segment_value(value: &Value) -> Vec<String> {
    coerce_scalar(value)
        .map(|text| segment(&text))
        .unwrap_or_default()
}
