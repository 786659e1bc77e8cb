//! Identifier assignment, placeholder rewrite, and exact restoration.
//!
//! IDs are assigned only after all merging is final, so re-running the
//! pipeline on identical input yields identical IDs. The rewrite replaces
//! spans back to front: placeholder length generally differs from span
//! length, and descending order keeps every not-yet-processed offset valid.

use crate::error::{Error, Result};
use crate::resolve::MergedSpan;
use docveil_types::Annotation;
use std::collections::HashMap;

use crate::flags::FlagCandidate;
use docveil_types::Flag;

/// Assigns per-category sequence IDs to the final merged spans and builds
/// the rewritten text.
///
/// `spans` must be sorted by start offset ascending (the resolver's output
/// order); counters run 1-based per category in that order.
pub fn assign_and_rewrite(text: &str, spans: &[MergedSpan]) -> (String, Vec<Annotation>) {
    let mut counters: HashMap<&str, usize> = HashMap::new();
    let mut annotations = Vec::with_capacity(spans.len());

    for span in spans {
        let counter = counters.entry(span.category.as_str()).or_insert(0);
        *counter += 1;
        annotations.push(Annotation {
            id: format!("{}#{}", span.category, counter),
            category: span.category.clone(),
            text: text[span.start..span.end].to_string(),
            start: span.start,
            end: span.end,
            confidence: span.confidence,
        });
    }

    let mut rewritten = text.to_string();
    for annotation in annotations.iter().rev() {
        rewritten.replace_range(annotation.start..annotation.end, &annotation.placeholder());
    }

    (rewritten, annotations)
}

/// Splices every annotation's original text back over its placeholder.
///
/// Works from explicit offsets: walking annotations in ascending start
/// order, the position of each placeholder in the rewritten text is the
/// original start shifted by the accumulated length delta of the earlier
/// replacements. The placeholder literal is verified before splicing, so an
/// annotation set applied to the wrong text fails loudly.
pub fn restore(rewritten: &str, annotations: &[Annotation]) -> Result<String> {
    let mut ordered: Vec<&Annotation> = annotations.iter().collect();
    ordered.sort_by_key(|a| a.start);

    let mut restored = rewritten.to_string();
    let mut delta: isize = 0;
    for annotation in ordered {
        let placeholder = annotation.placeholder();
        let offset = annotation.start as isize + delta;
        let offset = usize::try_from(offset).map_err(|_| Error::RestoreMismatch {
            id: annotation.id.clone(),
            offset: annotation.start,
        })?;
        let end = offset + placeholder.len();
        let found = restored
            .get(offset..end)
            .map_or(false, |slice| slice == placeholder);
        if !found {
            return Err(Error::RestoreMismatch {
                id: annotation.id.clone(),
                offset,
            });
        }
        restored.replace_range(offset..end, &annotation.text);
        delta += annotation.text.len() as isize - placeholder.len() as isize;
    }

    Ok(restored)
}

/// Assigns globally sequential `F<n>` IDs to the final merged flag list.
pub fn assign_flag_ids(candidates: Vec<FlagCandidate>) -> Vec<Flag> {
    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| Flag {
            id: format!("F{}", index + 1),
            category: candidate.category,
            excerpt: candidate.excerpt,
            start: candidate.start,
            end: candidate.end,
            reason: candidate.reason,
            severity: candidate.severity,
        })
        .collect()
}
