//! Dual annotation engine for document text.
//!
//! Produces two independent, parallel annotation layers over one input
//! string:
//! - a **redaction** layer that locates sensitive identifiers (SSNs, card
//!   numbers, emails, bank details, ...) and replaces them with stable,
//!   reversible placeholders, and
//! - a **flagging** layer that locates content suggestive of legal
//!   privilege, PHI, confidentiality, or risky contractual language.
//!
//! Both layers share the same algorithmic core: multi-pattern scanning,
//! candidate validation, deterministic conflict resolution, and stable
//! identifier assignment, all while preserving exact byte offsets so output
//! text and metadata stay consistent with the input.
//!
//! The engine is synchronous and holds no state across calls; hosts may
//! invoke it concurrently on separate documents without coordination.

pub mod catalog;
pub mod error;
pub mod flags;
pub mod resolve;
pub mod rewrite;
pub mod scanner;
pub mod summary;
pub mod validate;

pub use catalog::{
    CustomPattern, FlagPattern, FlaggingOptions, Pattern, ProximityRule, RedactionOptions,
};
pub use error::{Error, Result};
pub use scanner::Candidate;
pub use validate::{CustomValidatorFn, Validator};

use docveil_types::{Annotation, FlaggingOutcome, RedactionOutcome};
use tracing::debug;

/// Scans `text` for sensitive identifiers and rewrites every finalized span
/// to a `[REDACTED:<CATEGORY>#<n>]` placeholder.
///
/// The produced annotation set is sorted by start offset, pairwise
/// non-overlapping, and sufficient to reverse the rewrite exactly via
/// [`restore_original`]. Re-running on identical input and options yields
/// identical IDs, offsets, and ordering.
///
/// Empty input is not an error: it produces an empty outcome. A malformed
/// caller-supplied custom pattern is a configuration error and fails the
/// whole call before any scanning.
pub fn annotate_for_redaction(text: &str, options: &RedactionOptions) -> Result<RedactionOutcome> {
    // Custom patterns are compiled up front so configuration errors surface
    // even for degenerate inputs.
    let patterns = catalog::build_catalog(options)?;
    if text.is_empty() {
        return Ok(RedactionOutcome::default());
    }

    let candidates = scanner::scan(text, &patterns);
    let spans = resolve::merge_spans(candidates);
    let (rewritten_text, annotations) = rewrite::assign_and_rewrite(text, &spans);
    let summary = summary::summarize_annotations(&annotations);

    debug!(
        annotations = annotations.len(),
        "redaction pass complete"
    );
    Ok(RedactionOutcome {
        rewritten_text,
        annotations,
        summary,
    })
}

/// Reverses [`annotate_for_redaction`]: splices every annotation's original
/// text back over its placeholder in `rewritten`.
///
/// Restoration is offset-driven, not a blind placeholder string search, so a
/// document that coincidentally contains placeholder-shaped literals still
/// restores correctly. If the expected placeholder is not found at the
/// computed offset the annotation set does not belong to `rewritten` and
/// [`Error::RestoreMismatch`] is returned instead of corrupted text.
pub fn restore_original(rewritten: &str, annotations: &[Annotation]) -> Result<String> {
    rewrite::restore(rewritten, annotations)
}

/// Scans `text` for privilege, PHI, confidentiality, and risky-language
/// concerns using keyword and word-proximity heuristics.
///
/// Flags of the same category within a 50-character window are merged into
/// one record whose reason lists every distinct trigger; different
/// categories always surface independently, even at the same position.
pub fn annotate_for_flagging(text: &str, options: &FlaggingOptions) -> FlaggingOutcome {
    if text.is_empty() {
        return FlaggingOutcome::default();
    }

    let patterns = catalog::flag_catalog(options);
    let candidates = flags::detect(text, &patterns);
    let merged = resolve::merge_flags(candidates);
    let flags = rewrite::assign_flag_ids(merged);
    let summary = summary::summarize_flags(&flags);

    debug!(flags = flags.len(), "flagging pass complete");
    FlaggingOutcome { flags, summary }
}
