use docveil_types::{Category, Confidence, RiskLevel, Severity};

#[test]
fn category_display_is_the_tag() {
    let category = Category::new("CREDIT_CARD");
    assert_eq!(category.to_string(), "CREDIT_CARD");
    assert_eq!(category.as_str(), "CREDIT_CARD");
}

#[test]
fn summary_key_is_lowercase() {
    assert_eq!(Category::new("MEDICAL_RECORD").summary_key(), "medical_record");
    assert_eq!(Category::new("Email").summary_key(), "email");
}

#[test]
fn category_from_str() {
    let category: Category = "SSN".into();
    assert_eq!(category, Category::new("SSN"));
}

#[test]
fn category_serializes_transparently() {
    let json = serde_json::to_string(&Category::new("EMAIL")).unwrap();
    assert_eq!(json, r#""EMAIL""#);
    let parsed: Category = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, Category::new("EMAIL"));
}

// ── Scales ───────────────────────────────────────────────────────

#[test]
fn confidence_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), r#""high""#);
    assert_eq!(serde_json::to_string(&Confidence::Low).unwrap(), r#""low""#);
}

#[test]
fn severity_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Severity::High).unwrap(), r#""HIGH""#);
    assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), r#""MEDIUM""#);
    assert_eq!(Severity::High.to_string(), "HIGH");
}

#[test]
fn risk_level_boundaries() {
    assert_eq!(RiskLevel::from_high_severity_count(0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_high_severity_count(1), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_high_severity_count(3), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_high_severity_count(4), RiskLevel::High);
    assert_eq!(RiskLevel::from_high_severity_count(100), RiskLevel::High);
}

#[test]
fn risk_level_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), r#""HIGH""#);
    assert_eq!(RiskLevel::Medium.to_string(), "MEDIUM");
}
