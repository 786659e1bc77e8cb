use docveil_types::{Annotation, Category, Confidence};
use pretty_assertions::assert_eq;

fn sample() -> Annotation {
    Annotation {
        id: "EMAIL#1".to_string(),
        category: Category::new("EMAIL"),
        text: "alice@example.com".to_string(),
        start: 9,
        end: 26,
        confidence: Confidence::High,
    }
}

#[test]
fn placeholder_embeds_the_id() {
    assert_eq!(sample().placeholder(), "[REDACTED:EMAIL#1]");
}

#[test]
fn len_is_span_width() {
    let annotation = sample();
    assert_eq!(annotation.len(), 17);
    assert!(!annotation.is_empty());
}

#[test]
fn overlap_detection() {
    let a = sample();
    let mut b = sample();
    b.start = 20;
    b.end = 30;
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));

    let mut c = sample();
    c.start = 40;
    c.end = 50;
    assert!(!a.overlaps(&c));
}

#[test]
fn touching_spans_overlap() {
    let a = sample();
    let mut b = sample();
    b.start = a.end;
    b.end = a.end + 5;
    assert!(a.overlaps(&b));
}

#[test]
fn serialization_roundtrip() {
    let annotation = sample();
    let json = serde_json::to_string(&annotation).unwrap();
    let parsed: Annotation = serde_json::from_str(&json).unwrap();
    assert_eq!(annotation, parsed);
}

#[test]
fn serialized_confidence_is_lowercase() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["confidence"], "high");
    assert_eq!(json["category"], "EMAIL");
}
