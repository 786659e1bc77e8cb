//! Flag detection: keyword hits and word-proximity hits.

use crate::catalog::{FlagPattern, ProximityRule};
use docveil_types::{Category, Severity};
use regex_lite::Regex;
use tracing::debug;

/// Fixed average word length used to convert a word-count distance into a
/// character distance. Deliberately approximate; see [`ProximityRule`].
pub const AVERAGE_WORD_LEN: usize = 6;

/// A raw flag trigger prior to same-category merging.
#[derive(Debug, Clone)]
pub struct FlagCandidate {
    pub category: Category,
    /// Start byte offset (inclusive) of the trigger.
    pub start: usize,
    /// End byte offset (exclusive) of the trigger.
    pub end: usize,
    pub excerpt: String,
    pub reason: String,
    pub severity: Severity,
}

/// Scans `text` with every flag pattern, emitting one candidate per keyword
/// hit and one per satisfied proximity rule.
pub fn detect(text: &str, patterns: &[FlagPattern]) -> Vec<FlagCandidate> {
    let mut candidates = Vec::new();
    if text.is_empty() {
        return candidates;
    }

    for pattern in patterns {
        for keyword in &pattern.keywords {
            let regex = word_regex(keyword);
            for found in regex.find_iter(text) {
                candidates.push(FlagCandidate {
                    category: pattern.category.clone(),
                    start: found.start(),
                    end: found.end(),
                    excerpt: excerpt(text, found.start(), pattern.excerpt_len),
                    reason: format!("Contains term '{keyword}'"),
                    severity: pattern.severity,
                });
            }
        }
        for rule in &pattern.proximity_rules {
            if let Some(candidate) = proximity_hit(text, pattern, rule) {
                candidates.push(candidate);
            }
        }
    }

    debug!(candidates = candidates.len(), "flag detection complete");
    candidates
}

/// Case-insensitive, word-boundary-anchored matcher for a literal keyword
/// or phrase.
fn word_regex(keyword: &str) -> Regex {
    let escaped = escape_literal(keyword);
    Regex::new(&format!(r"(?i)\b{escaped}\b")).expect("escaped keyword must compile")
}

/// Escapes regex metacharacters in a literal keyword.
fn escape_literal(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());
    for c in literal.chars() {
        if !c.is_alphanumeric() && c != ' ' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Evaluates one proximity rule over the whole text.
///
/// Collects every occurrence of each word and fires on the first pair (in
/// offset order) whose character distance is within
/// `max_word_distance × AVERAGE_WORD_LEN`. The reported position is the
/// earlier of the pair's offsets.
fn proximity_hit(text: &str, pattern: &FlagPattern, rule: &ProximityRule) -> Option<FlagCandidate> {
    let hits_a: Vec<(usize, usize)> = word_regex(rule.word_a)
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();
    if hits_a.is_empty() {
        return None;
    }
    let hits_b: Vec<(usize, usize)> = word_regex(rule.word_b)
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let max_distance = rule.max_word_distance * AVERAGE_WORD_LEN;
    let mut best: Option<(usize, usize)> = None;
    for &(start_a, end_a) in &hits_a {
        for &(start_b, end_b) in &hits_b {
            let distance = start_a.abs_diff(start_b);
            if distance > max_distance {
                continue;
            }
            let (start, end) = if start_a <= start_b {
                (start_a, end_a)
            } else {
                (start_b, end_b)
            };
            if best.map_or(true, |(current, _)| start < current) {
                best = Some((start, end));
            }
        }
    }

    best.map(|(start, end)| FlagCandidate {
        category: pattern.category.clone(),
        start,
        end,
        excerpt: excerpt(text, start, pattern.excerpt_len),
        reason: format!(
            "Terms '{}' and '{}' appear within {} words of each other",
            rule.word_a, rule.word_b, rule.max_word_distance
        ),
        severity: pattern.severity,
    })
}

/// Context window of roughly `len` bytes centred on `position`, clamped to
/// UTF-8 character boundaries.
fn excerpt(text: &str, position: usize, len: usize) -> String {
    let half = len / 2;
    let mut start = position.saturating_sub(half);
    let mut end = (position + half).min(text.len());
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    text[start..end].to_string()
}
