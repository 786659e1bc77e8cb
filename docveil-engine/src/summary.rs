//! Summary aggregation. Pure tallies; no failure modes.

use docveil_types::{Annotation, Flag, FlagSummary, RedactionSummary, RiskLevel, Severity};

/// Tallies annotations per lower-cased category name.
pub fn summarize_annotations(annotations: &[Annotation]) -> RedactionSummary {
    let mut summary = RedactionSummary::default();
    for annotation in annotations {
        *summary
            .by_category
            .entry(annotation.category.summary_key())
            .or_insert(0) += 1;
    }
    summary.total = annotations.len();
    summary
}

/// Tallies flags per lower-cased category name and derives the coarse risk
/// level from the high-severity count.
pub fn summarize_flags(flags: &[Flag]) -> FlagSummary {
    let mut summary = FlagSummary::default();
    for flag in flags {
        *summary
            .by_category
            .entry(flag.category.summary_key())
            .or_insert(0) += 1;
        if flag.severity == Severity::High {
            summary.high_severity += 1;
        }
    }
    summary.total = flags.len();
    summary.risk_level = RiskLevel::from_high_severity_count(summary.high_severity);
    summary
}
