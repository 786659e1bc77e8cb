//! Conflict resolution for both layers.
//!
//! Redaction demands strictly non-overlapping output spans, so overlapping
//! candidates are swept into maximal merged spans with priority arbitration.
//! Flags may legitimately describe overlapping concerns; only same-category
//! flags within a fixed character window are merged, by concatenating their
//! reasons.
//!
//! Both resolvers are deterministic: identical input always produces
//! identical spans in identical order.

use crate::flags::FlagCandidate;
use crate::scanner::Candidate;
use docveil_types::{Category, Confidence};
use tracing::debug;

/// Same-category flags whose positions differ by at most this many bytes
/// collapse into one record.
pub const FLAG_MERGE_WINDOW: usize = 50;

/// A maximal merged span carrying the highest-priority contributor's
/// category and confidence.
#[derive(Debug, Clone)]
pub struct MergedSpan {
    pub category: Category,
    pub start: usize,
    pub end: usize,
    pub confidence: Confidence,
    pub priority: i32,
}

/// Collapses raw candidates into the minimal set of maximal, non-overlapping
/// spans, sorted by start offset.
///
/// Candidates are ordered by start ascending with priority descending as the
/// tie-break, then swept left to right. A candidate starting at or before
/// the open span's end (an exact touch counts as overlap) extends it; a
/// higher-priority contributor also takes over the span's category and
/// confidence. Multiple patterns frequently match the same substring — an
/// address fragment scanning as a date, a card number as a phone — and
/// position-merge with priority arbitration keeps exactly one label per
/// region.
pub fn merge_spans(mut candidates: Vec<Candidate>) -> Vec<MergedSpan> {
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.priority.cmp(&a.priority))
    });

    let mut merged: Vec<MergedSpan> = Vec::new();
    for candidate in candidates {
        match merged.last_mut() {
            Some(current) if candidate.start <= current.end => {
                current.end = current.end.max(candidate.end);
                if candidate.priority > current.priority {
                    current.category = candidate.category;
                    current.confidence = candidate.confidence;
                    current.priority = candidate.priority;
                }
            }
            _ => merged.push(MergedSpan {
                category: candidate.category,
                start: candidate.start,
                end: candidate.end,
                confidence: candidate.confidence,
                priority: candidate.priority,
            }),
        }
    }

    debug!(spans = merged.len(), "candidate merge complete");
    merged
}

/// Collapses raw flag candidates without the strict non-overlap guarantee.
///
/// Candidates are swept in position order; a candidate of the *same*
/// category within [`FLAG_MERGE_WINDOW`] bytes of the open flag's position
/// folds its reason into the open flag (skipped when already listed), which
/// keeps the earlier position and excerpt. Different categories never merge,
/// even at identical positions — a privilege hit and a PHI hit at the same
/// location both surface.
pub fn merge_flags(mut candidates: Vec<FlagCandidate>) -> Vec<FlagCandidate> {
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });

    let mut merged: Vec<FlagCandidate> = Vec::new();
    for candidate in candidates {
        match merged.last_mut() {
            Some(open)
                if open.category == candidate.category
                    && candidate.start - open.start <= FLAG_MERGE_WINDOW =>
            {
                if !open.reason.contains(&candidate.reason) {
                    open.reason.push_str("; ");
                    open.reason.push_str(&candidate.reason);
                }
            }
            _ => merged.push(candidate),
        }
    }

    debug!(flags = merged.len(), "flag merge complete");
    merged
}
