//! Pattern catalogs for both annotation layers.
//!
//! The built-in catalogs are plain data, constructed fresh per call from the
//! caller's options; caller-supplied custom patterns are appended to that
//! per-call copy and can never mutate the built-ins. Priorities only matter
//! when spans overlap: the higher-priority contributor's category wins the
//! merged span.

use crate::error::{Error, Result};
use crate::validate::{CustomValidatorFn, Validator};
use docveil_types::{Category, Confidence, Severity};
use regex_lite::Regex;
use std::fmt;

/// A compiled redaction pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub category: Category,
    pub regex: Regex,
    /// Higher wins overlap arbitration.
    pub priority: i32,
    pub confidence: Confidence,
    pub validator: Validator,
}

impl Pattern {
    fn builtin(
        category: &str,
        pattern: &str,
        priority: i32,
        confidence: Confidence,
        validator: Validator,
    ) -> Self {
        Self {
            category: Category::new(category),
            // Built-in patterns are fixed literals; a compile failure is a
            // programming error, not a runtime condition.
            regex: Regex::new(pattern).expect("built-in pattern must compile"),
            priority,
            confidence,
            validator,
        }
    }
}

/// A caller-supplied redaction pattern, compiled and appended to the
/// built-in catalog at call time.
#[derive(Clone)]
pub struct CustomPattern {
    pub category: Category,
    /// Regex source; compiled when the catalog is built. A malformed pattern
    /// is a configuration error surfaced before any scanning.
    pub pattern: String,
    pub priority: i32,
    pub confidence: Confidence,
    pub validator: Option<CustomValidatorFn>,
}

impl CustomPattern {
    #[must_use]
    pub fn new(
        category: impl Into<Category>,
        pattern: impl Into<String>,
        priority: i32,
        confidence: Confidence,
    ) -> Self {
        Self {
            category: category.into(),
            pattern: pattern.into(),
            priority,
            confidence,
            validator: None,
        }
    }

    /// Attaches a validation callback run against each raw match.
    #[must_use]
    pub fn with_validator(mut self, validator: CustomValidatorFn) -> Self {
        self.validator = Some(validator);
        self
    }
}

impl fmt::Debug for CustomPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomPattern")
            .field("category", &self.category)
            .field("pattern", &self.pattern)
            .field("priority", &self.priority)
            .field("confidence", &self.confidence)
            .field("validator", &self.validator.as_ref().map(|_| "..."))
            .finish()
    }
}

/// Options for one redaction pass.
#[derive(Debug, Clone)]
pub struct RedactionOptions {
    /// Enables the financial group: card, bank account, routing, IBAN,
    /// salary.
    pub financial: bool,
    /// Enables the personal group: SSN, email, phone, date, address,
    /// medical record, titled name.
    pub personal: bool,
    /// Appended to a copy of the built-in catalog.
    pub custom_patterns: Vec<CustomPattern>,
}

impl Default for RedactionOptions {
    fn default() -> Self {
        Self {
            financial: true,
            personal: true,
            custom_patterns: Vec::new(),
        }
    }
}

/// Builds the effective pattern catalog for one call.
pub fn build_catalog(options: &RedactionOptions) -> Result<Vec<Pattern>> {
    let mut patterns = Vec::new();

    if options.personal {
        patterns.push(Pattern::builtin(
            "SSN",
            r"\b\d{3}-\d{2}-\d{4}\b",
            100,
            Confidence::High,
            Validator::None,
        ));
    }
    if options.financial {
        patterns.push(Pattern::builtin(
            "CREDIT_CARD",
            r"\b\d(?:[ -]?\d){12,18}\b",
            95,
            Confidence::High,
            Validator::Luhn,
        ));
        patterns.push(Pattern::builtin(
            "IBAN",
            r"\b[A-Z]{2}\d{2}[A-Z0-9]{10,30}\b",
            90,
            Confidence::High,
            Validator::None,
        ));
        // Routing and account patterns optionally swallow the labelling
        // keyword into the match so the context-based validators can see it.
        patterns.push(Pattern::builtin(
            "ROUTING_NUMBER",
            r"(?i)\b(?:(?:routing|aba)(?: (?:number|no\.?|#))?[:# ]{1,3})?\d{9}\b",
            85,
            Confidence::High,
            Validator::RoutingChecksum,
        ));
        patterns.push(Pattern::builtin(
            "BANK_ACCOUNT",
            r"(?i)\b(?:(?:account|acct\.?)(?: (?:number|no\.?|#))?[:# ]{1,3})?\d{8,17}\b",
            80,
            Confidence::Medium,
            Validator::BankAccount,
        ));
    }
    if options.personal {
        patterns.push(Pattern::builtin(
            "EMAIL",
            r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
            75,
            Confidence::High,
            Validator::None,
        ));
        patterns.push(Pattern::builtin(
            "PHONE",
            r"(?:\+?\d{1,3}[-. ])?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}\b",
            70,
            Confidence::Medium,
            Validator::PhoneLength,
        ));
        patterns.push(Pattern::builtin(
            "MEDICAL_RECORD",
            r"(?i)\b(?:mrn|medical record(?: (?:number|no\.?))?)[:# ]{1,3}[A-Za-z0-9][A-Za-z0-9-]{4,11}\b",
            65,
            Confidence::High,
            Validator::None,
        ));
    }
    if options.financial {
        patterns.push(Pattern::builtin(
            "SALARY",
            r"(?i)\b(?:salary|compensation|annual pay|base pay|wage)[^$\n]{0,20}\$ ?\d{1,3}(?:,\d{3})*(?:\.\d{2})?\b",
            60,
            Confidence::Medium,
            Validator::None,
        ));
    }
    if options.personal {
        patterns.push(Pattern::builtin(
            "ADDRESS",
            r"\b\d{1,5} (?:[A-Z][A-Za-z]+ ){1,4}(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr|Court|Ct|Place|Pl|Way)\.?\b",
            50,
            Confidence::Medium,
            Validator::None,
        ));
        patterns.push(Pattern::builtin(
            "NAME",
            r"\b(?:Mr|Mrs|Ms|Dr|Prof)\.? [A-Z][a-z]+(?: [A-Z][a-z]+)?\b",
            45,
            Confidence::Medium,
            Validator::None,
        ));
        patterns.push(Pattern::builtin(
            "DATE",
            r"\b(?:\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?) \d{1,2},? \d{4})\b",
            40,
            Confidence::Low,
            Validator::None,
        ));
    }

    for custom in &options.custom_patterns {
        let regex = Regex::new(&custom.pattern).map_err(|source| Error::InvalidPattern {
            category: custom.category.as_str().to_string(),
            source,
        })?;
        patterns.push(Pattern {
            category: custom.category.clone(),
            regex,
            priority: custom.priority,
            confidence: custom.confidence,
            validator: custom
                .validator
                .clone()
                .map_or(Validator::None, Validator::Custom),
        });
    }

    Ok(patterns)
}

// ── Flagging ─────────────────────────────────────────────────────

/// Two words that must appear near each other to trigger a flag.
///
/// "Near" is approximated as a character distance of
/// `max_word_distance × 6` (a fixed average word length) rather than a true
/// token count; the approximation is deliberate and keeps reported positions
/// stable.
#[derive(Debug, Clone)]
pub struct ProximityRule {
    pub word_a: &'static str,
    pub word_b: &'static str,
    pub max_word_distance: usize,
}

/// A keyword/proximity rule set for one concern category.
#[derive(Debug, Clone)]
pub struct FlagPattern {
    pub category: Category,
    pub keywords: Vec<&'static str>,
    pub proximity_rules: Vec<ProximityRule>,
    pub severity: Severity,
    /// Width of the context excerpt captured around each trigger.
    pub excerpt_len: usize,
}

/// Default excerpt window width in bytes.
pub const DEFAULT_EXCERPT_LEN: usize = 80;

/// Options for one flagging pass.
#[derive(Debug, Clone)]
pub struct FlaggingOptions {
    pub privilege: bool,
    pub phi: bool,
    pub confidentiality: bool,
    pub risky_terms: bool,
}

impl Default for FlaggingOptions {
    fn default() -> Self {
        Self {
            privilege: true,
            phi: true,
            confidentiality: true,
            risky_terms: true,
        }
    }
}

fn rule(word_a: &'static str, word_b: &'static str, max_word_distance: usize) -> ProximityRule {
    ProximityRule {
        word_a,
        word_b,
        max_word_distance,
    }
}

/// Builds the effective flag catalog for one call.
pub fn flag_catalog(options: &FlaggingOptions) -> Vec<FlagPattern> {
    let mut patterns = Vec::new();

    if options.privilege {
        patterns.push(FlagPattern {
            category: Category::new("PRIVILEGE"),
            keywords: vec![
                "attorney-client privilege",
                "privileged and confidential",
                "attorney work product",
                "legal counsel",
                "privileged communication",
            ],
            proximity_rules: vec![rule("attorney", "privileged", 10), rule("counsel", "advice", 8)],
            severity: Severity::High,
            excerpt_len: DEFAULT_EXCERPT_LEN,
        });
    }
    if options.phi {
        patterns.push(FlagPattern {
            category: Category::new("PHI"),
            keywords: vec![
                "medical history",
                "diagnosis",
                "prescription",
                "treatment plan",
                "hipaa",
                "patient record",
            ],
            proximity_rules: vec![rule("patient", "diagnosed", 12), rule("medical", "condition", 8)],
            severity: Severity::High,
            excerpt_len: DEFAULT_EXCERPT_LEN,
        });
    }
    if options.confidentiality {
        patterns.push(FlagPattern {
            category: Category::new("CONFIDENTIAL"),
            keywords: vec![
                "confidential",
                "proprietary",
                "trade secret",
                "non-disclosure",
                "internal use only",
                "do not distribute",
            ],
            proximity_rules: Vec::new(),
            severity: Severity::Medium,
            excerpt_len: DEFAULT_EXCERPT_LEN,
        });
    }
    if options.risky_terms {
        patterns.push(FlagPattern {
            category: Category::new("RISKY_TERMS"),
            keywords: vec![
                "indemnify",
                "indemnification",
                "unlimited liability",
                "liquidated damages",
                "non-compete",
                "termination for convenience",
                "irrevocable",
            ],
            proximity_rules: vec![rule("waive", "rights", 6), rule("penalty", "breach", 8)],
            severity: Severity::Medium,
            excerpt_len: DEFAULT_EXCERPT_LEN,
        });
    }

    patterns
}
