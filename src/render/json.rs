//! JSON rendering for documents and run reports.

use crate::apply::{ApplyReport, Plan};
use crate::error::{Error, Result};
use crate::model::Document;
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

/// Convert a run report to JSON.
pub fn report_to_json(report: &ApplyReport, format: JsonFormat) -> Result<String> {
    serialize(report, format)
}

/// Convert a plan (e.g., for a dry run) to JSON.
pub fn plan_to_json(plan: &Plan, format: JsonFormat) -> Result<String> {
    serialize(plan, format)
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Serialization(format!("JSON serialization error: {}", e)))
}
