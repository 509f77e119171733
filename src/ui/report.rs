//! ui::report
//!
//! Renders the fetched rules as a severity-grouped context report.
//!
//! # Layout
//!
//! A banner (title, repository scope, scope label, rule count), a short
//! preamble, one section per non-empty severity bucket in fixed order
//! (error, warning, recommendation), and a trailing `---` separator.
//! Rules without a recognized severity appear in no section. Empty
//! buckets emit nothing, not even a header.

use crate::rules::{RuleRecord, Severity};
use crate::scope::ScopeDescriptor;

/// Render the full report for `rules` fetched under `scope`.
///
/// Rules are listed within each section in the order they were received.
pub fn render(scope: &ScopeDescriptor, rules: &[RuleRecord]) -> String {
    let mut out = String::new();

    out.push_str("# 📋 Qodo Rules Loaded\n\n");
    out.push_str(&format!("Repository: `{}`\n", scope.query_scope));
    out.push_str(&format!("{}\n", scope.context));
    out.push_str(&format!(
        "Rules loaded: **{}** (universal, org level, repo level, and path level rules)\n\n",
        rules.len()
    ));
    out.push_str("These rules must be applied during code generation based on severity:\n\n");

    for severity in [Severity::Error, Severity::Warning, Severity::Recommendation] {
        section(&mut out, severity, rules);
    }

    out.push_str("---\n\n");
    out
}

/// Append one severity section, or nothing when the bucket is empty.
fn section(out: &mut String, severity: Severity, rules: &[RuleRecord]) {
    let bucket: Vec<&RuleRecord> = rules
        .iter()
        .filter(|rule| rule.severity() == Some(severity))
        .collect();

    if bucket.is_empty() {
        return;
    }

    out.push_str(&format!("## {} - {}\n\n", heading(severity), bucket.len()));
    for rule in bucket {
        out.push_str(&format!(
            "- **{}** ({}): {}\n",
            rule.name, rule.category, rule.description
        ));
    }
    out.push('\n');
}

fn heading(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌ ERROR Rules (Must Comply)",
        Severity::Warning => "⚠️  WARNING Rules (Should Comply)",
        Severity::Recommendation => "💡 RECOMMENDATION Rules (Consider)",
    }
}
