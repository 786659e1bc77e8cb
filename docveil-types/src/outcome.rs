//! Summary and outcome shapes returned by the engine entry points.

use crate::{Annotation, Flag, RiskLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-category tallies for one redaction pass.
///
/// Keys are lower-cased category names; a `BTreeMap` keeps key order (and
/// therefore serialized output) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionSummary {
    pub by_category: BTreeMap<String, usize>,
    pub total: usize,
}

/// Per-category tallies plus the derived risk level for one flagging pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSummary {
    pub by_category: BTreeMap<String, usize>,
    pub total: usize,
    pub high_severity: usize,
    pub risk_level: RiskLevel,
}

impl Default for FlagSummary {
    fn default() -> Self {
        Self {
            by_category: BTreeMap::new(),
            total: 0,
            high_severity: 0,
            risk_level: RiskLevel::Low,
        }
    }
}

/// Everything produced by one redaction pass over one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionOutcome {
    /// Input text with every annotated span replaced by its placeholder.
    pub rewritten_text: String,
    /// Non-overlapping annotations, sorted by start offset ascending.
    pub annotations: Vec<Annotation>,
    pub summary: RedactionSummary,
}

/// Everything produced by one flagging pass over one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggingOutcome {
    /// Flags sorted by start offset ascending.
    pub flags: Vec<Flag>,
    pub summary: FlagSummary,
}
