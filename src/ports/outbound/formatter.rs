use crate::credits::domain::{AttributionEntry, ReportMetadata};
use crate::shared::Result;

/// ReportFormatter port for rendering the attribution report
///
/// This port abstracts the output format (plain text, Markdown, JSON).
/// Formatters receive the already-selected, already-ordered entries; they
/// never reorder or filter.
pub trait ReportFormatter {
    /// Renders the report for the given entries and metadata.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, entries: &[AttributionEntry], metadata: &ReportMetadata) -> Result<String>;
}
