// Machine-readable comparison output for `compare --json`.

use anyhow::Result;
use serde::Serialize;

use crate::compare::{ComparisonReport, ReferenceScore};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    document: &'a str,
    token_count: usize,
    scores: &'a [ReferenceScore],
    best_match: Option<&'a ReferenceScore>,
    warning: Option<String>,
    reference_warnings: &'a [String],
}

/// Render a comparison report as pretty-printed JSON.
pub fn render_report(report: &ComparisonReport) -> Result<String> {
    let view = JsonReport {
        document: &report.document,
        token_count: report.token_count,
        scores: &report.result.scores,
        best_match: report.result.best_match(),
        warning: report.warning.as_ref().map(ToString::to_string),
        reference_warnings: &report.reference_warnings,
    };
    Ok(serde_json::to_string_pretty(&view)?)
}
