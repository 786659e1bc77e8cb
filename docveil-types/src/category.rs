//! Category tags and the fixed grading scales used by both annotation layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag attached to a pattern and to every record it produces.
///
/// Built-in categories use upper snake case names (`EMAIL`, `CREDIT_CARD`,
/// `PRIVILEGE`); caller-supplied custom patterns may introduce any non-empty
/// tag. The tag is the first half of every annotation ID (`EMAIL#1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Creates a category from a tag name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased tag, used as the summary map key.
    #[must_use]
    pub fn summary_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// How trustworthy a redaction pattern's matches are.
///
/// Checksum-validated identifiers (card numbers, routing numbers) are `High`;
/// shape-only heuristics (addresses, dates) sit lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        };
        write!(f, "{s}")
    }
}

/// Severity of a content flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
        };
        write!(f, "{s}")
    }
}

/// Coarse document risk level derived from the high-severity flag count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Derives the risk level from a count of high-severity flags.
    ///
    /// More than 3 high-severity flags is `High`, at least one is `Medium`,
    /// none is `Low`.
    #[must_use]
    pub fn from_high_severity_count(count: usize) -> Self {
        match count {
            0 => RiskLevel::Low,
            1..=3 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        write!(f, "{s}")
    }
}
