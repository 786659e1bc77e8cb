//! Candidate scanner for the redaction layer.
//!
//! Applies every pattern to the text independently; patterns know nothing of
//! each other at this stage, so the output may contain overlapping and
//! duplicate spans. Overlap resolution happens later in `resolve`.

use crate::catalog::Pattern;
use docveil_types::{Category, Confidence};
use tracing::{debug, trace};

/// An unvalidated-or-unmerged raw pattern match, owned by the resolver
/// within one invocation.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub category: Category,
    pub text: String,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    pub confidence: Confidence,
    pub priority: i32,
}

/// Scans `text` with every pattern, emitting validator-accepted candidates.
///
/// Matches within one pattern are the standard greedy, non-overlapping
/// left-to-right set; the input is never mutated.
pub fn scan(text: &str, patterns: &[Pattern]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    if text.is_empty() {
        return candidates;
    }

    for pattern in patterns {
        let before = candidates.len();
        for found in pattern.regex.find_iter(text) {
            if !pattern.validator.accept(found.as_str()) {
                trace!(
                    category = pattern.category.as_str(),
                    start = found.start(),
                    "candidate rejected by validator"
                );
                continue;
            }
            candidates.push(Candidate {
                category: pattern.category.clone(),
                text: found.as_str().to_string(),
                start: found.start(),
                end: found.end(),
                confidence: pattern.confidence,
                priority: pattern.priority,
            });
        }
        trace!(
            category = pattern.category.as_str(),
            accepted = candidates.len() - before,
            "pattern scanned"
        );
    }

    debug!(
        candidates = candidates.len(),
        patterns = patterns.len(),
        "scan complete"
    );
    candidates
}
