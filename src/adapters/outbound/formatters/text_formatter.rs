use crate::credits::domain::{AttributionEntry, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TextFormatter adapter for the plain-text report
///
/// Renders three lines per selected credit - component name, owner text,
/// license text - in the order the entries arrive. This is the canonical
/// triple contract consumed by downstream report tooling.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, entries: &[AttributionEntry], _metadata: &ReportMetadata) -> Result<String> {
        let mut output = String::new();
        for entry in entries {
            output.push_str(&entry.component);
            output.push('\n');
            output.push_str(&entry.owner);
            output.push('\n');
            output.push_str(&entry.license);
            output.push('\n');
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
    fn test_format_renders_triples_in_order() {
        let entries = vec![
            entry("ChartKit", "Acme Open Source Collective", "Apache License, Version 2.0"),
            entry("FastCodec", "FastCodec Maintainers", "MPL 2.0"),
        ];
        let metadata = ReportMetadata::new("file:///credits.xml", entries.len());

        let output = TextFormatter::new().format(&entries, &metadata).unwrap();
        assert_eq!(
            output,
            "ChartKit\nAcme Open Source Collective\nApache License, Version 2.0\n\
             FastCodec\nFastCodec Maintainers\nMPL 2.0\n"
        );
    }

    #[test]
    fn test_format_empty_selection() {
        let metadata = ReportMetadata::new("file:///credits.xml", 0);
        let output = TextFormatter::new().format(&[], &metadata).unwrap();
        assert_eq!(output, "");
    }
}
