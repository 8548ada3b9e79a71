use crate::credits::domain::{AttributionEntry, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for attribution entries
const TABLE_HEADER: &str = "| Component | Owner | License |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-----------|-------|---------|\n";

/// MarkdownFormatter adapter for a human-readable Markdown report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, entries: &[AttributionEntry], metadata: &ReportMetadata) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Open Source Credits\n\n");
        output.push_str(&format!(
            "Generated at {} from `{}` ({} credits)\n\n",
            metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            metadata.database_url,
            metadata.credit_count
        ));

        if entries.is_empty() {
            output.push_str("No credits selected.\n");
            return Ok(output);
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for entry in entries {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&entry.component),
                Self::escape_markdown_table_cell(&entry.owner),
                Self::escape_markdown_table_cell(&entry.license),
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(component: &str, owner: &str, license: &str) -> AttributionEntry {
        AttributionEntry {
            component: component.to_string(),
            owner: owner.to_string(),
            license: license.to_string(),
        }
    }

    #[test]
    fn test_format_includes_header_and_rows() {
        let entries = vec![entry(
            "ChartKit",
            "Acme Open Source Collective",
            "Apache License, Version 2.0",
        )];
        let metadata = ReportMetadata::new("file:///credits.xml", 1);

        let output = MarkdownFormatter::new().format(&entries, &metadata).unwrap();
        assert!(output.starts_with("# Open Source Credits"));
        assert!(output.contains("file:///credits.xml"));
        assert!(output.contains("| Component | Owner | License |"));
        assert!(output
            .contains("| ChartKit | Acme Open Source Collective | Apache License, Version 2.0 |"));
    }

    #[test]
    fn test_format_escapes_table_cells() {
        let entries = vec![entry("Weird|Name", "Owner\nWith Newline", "MIT")];
        let metadata = ReportMetadata::new("file:///credits.xml", 1);

        let output = MarkdownFormatter::new().format(&entries, &metadata).unwrap();
        assert!(output.contains("Weird\\|Name"));
        assert!(output.contains("Owner With Newline"));
    }

    #[test]
    fn test_format_empty_selection() {
        let metadata = ReportMetadata::new("file:///credits.xml", 0);
        let output = MarkdownFormatter::new().format(&[], &metadata).unwrap();
        assert!(output.contains("No credits selected."));
    }
}
