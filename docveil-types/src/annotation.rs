//! Finalized redaction records.

use crate::{Category, Confidence};
use serde::{Deserialize, Serialize};

/// A finalized, ID-tagged redaction record with offsets into the original
/// text.
///
/// The annotation set for one input is the authoritative ledger that enables
/// exact restoration: each record stores the original substring alongside the
/// byte span it was cut from. Offsets are byte offsets into the *original*
/// text (`start` inclusive, `end` exclusive) and always fall on UTF-8
/// character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Stable ID of the form `<CATEGORY>#<n>`, where `n` is a 1-based
    /// per-category counter assigned in final left-to-right order.
    pub id: String,
    /// Category of the winning pattern.
    pub category: Category,
    /// The original matched text, verbatim.
    pub text: String,
    /// Start byte offset (inclusive) in the original text.
    pub start: usize,
    /// End byte offset (exclusive) in the original text.
    pub end: usize,
    /// Confidence of the winning pattern.
    pub confidence: Confidence,
}

impl Annotation {
    /// The literal placeholder this annotation was replaced with in the
    /// rewritten text.
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("[REDACTED:{}]", self.id)
    }

    /// Length of the original span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the span is empty (never produced by the engine, but kept
    /// total for callers constructing annotations by hand).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// True when this span overlaps or touches `other`.
    #[must_use]
    pub fn overlaps(&self, other: &Annotation) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
