//! Finalized content-concern records.

use crate::{Category, Severity};
use serde::{Deserialize, Serialize};

/// A finalized, ID-tagged content-concern record (privilege, PHI mention,
/// confidentiality, risky clause).
///
/// Unlike [`crate::Annotation`] spans, flags of *different* categories may
/// legitimately describe overlapping text; only same-category flags within a
/// fixed proximity window are merged by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Stable ID of the form `F<n>`, globally sequential in final order.
    pub id: String,
    /// Concern category (`PRIVILEGE`, `PHI`, `CONFIDENTIAL`, `RISKY_TERMS`).
    pub category: Category,
    /// Context window around the triggering position.
    pub excerpt: String,
    /// Start byte offset (inclusive) of the first trigger in the text.
    pub start: usize,
    /// End byte offset (exclusive) of the first trigger.
    pub end: usize,
    /// Human-readable justification; merged flags concatenate the reasons of
    /// every trigger, each listed once.
    pub reason: String,
    pub severity: Severity,
}
