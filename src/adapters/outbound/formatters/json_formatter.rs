use crate::credits::domain::{AttributionEntry, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

/// JSON document shape for the attribution report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadata,
    credits: &'a [AttributionEntry],
}

/// JsonFormatter adapter for a machine-readable JSON report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, entries: &[AttributionEntry], metadata: &ReportMetadata) -> Result<String> {
        let report = JsonReport {
            metadata,
            credits: entries,
        };
        let mut output = serde_json::to_string_pretty(&report)
            .context("Failed to serialize attribution report to JSON")?;
        output.push('\n');
        Ok(output)
    }
}
