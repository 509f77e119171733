//! rules::types
//!
//! Wire types for the rule service.
//!
//! Decoding is permissive by contract: missing fields default to empty
//! strings, unknown fields are ignored, and an unrecognized severity is
//! simply not a [`Severity`] rather than a decode failure. The formatter
//! later drops records without a recognized severity; nothing here turns
//! a sparse response into a hard failure.

use serde::Deserialize;

/// Recognized rule severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Must comply.
    Error,
    /// Should comply.
    Warning,
    /// Consider.
    Recommendation,
}

impl Severity {
    /// Parse a severity value from the wire.
    ///
    /// Anything other than the three recognized strings is `None`.
    pub fn parse(value: &str) -> Option<Severity> {
        match value {
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            "recommendation" => Some(Severity::Recommendation),
            _ => None,
        }
    }
}

/// One coding rule as received from the service.
///
/// Records are never mutated after decoding; the fetcher owns them until
/// the formatter iterates them read-only.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleRecord {
    /// Rule identifier.
    #[serde(default)]
    pub name: String,
    /// Category label.
    #[serde(default)]
    pub category: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Raw severity string, absent when the service omits or nulls it.
    #[serde(default)]
    pub severity: Option<String>,
}

impl RuleRecord {
    /// Recognized severity of this rule, if any.
    pub fn severity(&self) -> Option<Severity> {
        self.severity.as_deref().and_then(Severity::parse)
    }
}
