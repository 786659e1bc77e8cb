//! Property-based tests for the engine's core guarantees:
//! - Round-trip: restore(rewrite(T)) == T for all inputs
//! - Non-overlap: finalized annotation spans never overlap and are sorted
//! - Determinism: identical input and options yield identical output
//! - ID stability: counters are per-category (annotations) / global (flags)

use docveil_engine::{
    annotate_for_flagging, annotate_for_redaction, restore_original, FlaggingOptions,
    RedactionOptions,
};
use docveil_types::Severity;
use proptest::prelude::*;

/// Sensitive tokens mixed with filler words, to steer generated documents
/// toward interesting pattern collisions.
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("alice@example.com".to_string()),
        Just("987-65-4321".to_string()),
        Just("4532015112830366".to_string()),
        Just("4532-0151-1283-0366".to_string()),
        Just("(555) 867-5309".to_string()),
        Just("17 Elm Street".to_string()),
        Just("03/14/2021".to_string()),
        Just("routing 021000021".to_string()),
        Just("account no. 1122334455".to_string()),
        Just("confidential".to_string()),
        Just("attorney-client privilege".to_string()),
        Just("hipaa".to_string()),
        Just("indemnify".to_string()),
        "[a-z]{1,10}",
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(token_strategy(), 0..30).prop_map(|tokens| tokens.join(" "))
}

fn raw_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~\n]{0,300}").unwrap()
}

proptest! {
    #[test]
    fn roundtrip_on_structured_documents(text in document_strategy()) {
        let outcome = annotate_for_redaction(&text, &RedactionOptions::default()).unwrap();
        let restored = restore_original(&outcome.rewritten_text, &outcome.annotations).unwrap();
        prop_assert_eq!(restored, text);
    }

    #[test]
    fn roundtrip_on_arbitrary_text(text in raw_text_strategy()) {
        let outcome = annotate_for_redaction(&text, &RedactionOptions::default()).unwrap();
        let restored = restore_original(&outcome.rewritten_text, &outcome.annotations).unwrap();
        prop_assert_eq!(restored, text);
    }

    #[test]
    fn annotations_are_sorted_and_disjoint(text in document_strategy()) {
        let outcome = annotate_for_redaction(&text, &RedactionOptions::default()).unwrap();
        for pair in outcome.annotations.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn redaction_is_deterministic(text in document_strategy()) {
        let first = annotate_for_redaction(&text, &RedactionOptions::default()).unwrap();
        let second = annotate_for_redaction(&text, &RedactionOptions::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn annotation_ids_count_per_category(text in document_strategy()) {
        let outcome = annotate_for_redaction(&text, &RedactionOptions::default()).unwrap();
        let mut seen: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
        for annotation in &outcome.annotations {
            let counter = seen.entry(annotation.category.as_str().to_string()).or_insert(0);
            *counter += 1;
            prop_assert_eq!(
                &annotation.id,
                &format!("{}#{}", annotation.category, counter)
            );
        }
    }

    #[test]
    fn redaction_summary_is_consistent(text in document_strategy()) {
        let outcome = annotate_for_redaction(&text, &RedactionOptions::default()).unwrap();
        prop_assert_eq!(outcome.summary.total, outcome.annotations.len());
        let sum: usize = outcome.summary.by_category.values().sum();
        prop_assert_eq!(sum, outcome.annotations.len());
    }

    #[test]
    fn flags_are_sorted_with_sequential_ids(text in document_strategy()) {
        let outcome = annotate_for_flagging(&text, &FlaggingOptions::default());
        for (index, flag) in outcome.flags.iter().enumerate() {
            prop_assert_eq!(&flag.id, &format!("F{}", index + 1));
        }
        for pair in outcome.flags.windows(2) {
            prop_assert!(pair[0].start <= pair[1].start);
        }
    }

    #[test]
    fn flag_summary_is_consistent(text in document_strategy()) {
        let outcome = annotate_for_flagging(&text, &FlaggingOptions::default());
        prop_assert_eq!(outcome.summary.total, outcome.flags.len());
        let high = outcome
            .flags
            .iter()
            .filter(|f| f.severity == Severity::High)
            .count();
        prop_assert_eq!(outcome.summary.high_severity, high);
        let sum: usize = outcome.summary.by_category.values().sum();
        prop_assert_eq!(sum, outcome.flags.len());
    }

    #[test]
    fn flagging_is_deterministic(text in document_strategy()) {
        let first = annotate_for_flagging(&text, &FlaggingOptions::default());
        let second = annotate_for_flagging(&text, &FlaggingOptions::default());
        prop_assert_eq!(first, second);
    }
}
