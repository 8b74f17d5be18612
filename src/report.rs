//! Report formatting for validation results.
//!
//! Pure functions — (ValidationReport, OutputFormat) → String.
//! No I/O, no side effects.

use crate::form::FormMessage;
use crate::types::{OutputFormat, ValidationReport};

/// Format a validation report for output.
///
/// Pure function: takes data, returns formatted string.
pub fn format_report(report: &ValidationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(report: &ValidationReport) -> String {
    let mut out = String::new();

    out.push_str("=== Signup Validation ===\n");
    let width = report
        .fields
        .iter()
        .map(|v| v.field.label().len())
        .max()
        .unwrap_or(0);

    for verdict in &report.fields {
        let status = match &verdict.error {
            None => "ok".to_string(),
            Some(err) => err.to_string(),
        };
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            verdict.field.label(),
            status,
            width = width
        ));
    }
    out.push('\n');

    let message = if report.is_valid() {
        FormMessage::Success
    } else {
        FormMessage::FixErrors
    };
    out.push_str(message.text());
    out.push('\n');

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(report: &ValidationReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

// ============================================================================
// TESTS
// ============================================================================
