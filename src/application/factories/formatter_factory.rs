use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::ports::outbound::ReportFormatter;

/// Report format selector for the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    Text,
    Markdown,
    Json,
}

/// FormatterFactory for creating report formatter instances
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the requested format.
    pub fn create(formatter_type: FormatterType) -> Box<dyn ReportFormatter> {
        match formatter_type {
            FormatterType::Text => Box::new(TextFormatter::new()),
            FormatterType::Markdown => Box::new(MarkdownFormatter::new()),
            FormatterType::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the requested format.
    pub fn progress_message(formatter_type: FormatterType) -> &'static str {
        match formatter_type {
            FormatterType::Text => "📝 Generating plain text report...",
            FormatterType::Markdown => "📝 Generating Markdown report...",
            FormatterType::Json => "📝 Generating JSON report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credits::domain::ReportMetadata;

    #[test]
    fn test_create_formatters() {
        let metadata = ReportMetadata::new("file:///credits.xml", 0);
        for formatter_type in [FormatterType::Text, FormatterType::Markdown, FormatterType::Json] {
            let formatter = FormatterFactory::create(formatter_type);
            assert!(formatter.format(&[], &metadata).is_ok());
        }
    }

    #[test]
    fn test_progress_messages_differ() {
        assert_ne!(
            FormatterFactory::progress_message(FormatterType::Text),
            FormatterFactory::progress_message(FormatterType::Json)
        );
    }
}
