use clap::Parser;

use crate::application::factories::FormatterType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'markdown' or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Maps the CLI format to the factory selector.
    pub fn formatter_type(&self) -> FormatterType {
        match self {
            OutputFormat::Text => FormatterType::Text,
            OutputFormat::Markdown => FormatterType::Markdown,
            OutputFormat::Json => FormatterType::Json,
        }
    }
}

/// Generate open source attribution reports from a credits database
#[derive(Parser, Debug)]
#[command(name = "oss-credits")]
#[command(version)]
#[command(about = "Generate open source attribution reports from a credits database", long_about = None)]
pub struct Args {
    /// Path or URL of the credits database XML document
    #[arg(short, long)]
    pub database: Option<String>,

    /// Path to the dependency-list TOML file
    #[arg(long = "deps", value_name = "FILE")]
    pub dependencies: Option<String>,

    /// Output format: text, markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a config file (defaults to ./oss-credits.config.yml)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_text() {
        let format = OutputFormat::from_str("text").unwrap();
        assert!(matches!(format, OutputFormat::Text));

        let format = OutputFormat::from_str("txt").unwrap();
        assert!(matches!(format, OutputFormat::Text));
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        let format = OutputFormat::from_str("JSON").unwrap();
        assert!(matches!(format, OutputFormat::Json));

        let format = OutputFormat::from_str("Markdown").unwrap();
        assert!(matches!(format, OutputFormat::Markdown));
    }

    #[test]
    fn test_output_format_from_str_md() {
        let format = OutputFormat::from_str("md").unwrap();
        assert!(matches!(format, OutputFormat::Markdown));
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let result = OutputFormat::from_str("yaml");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("yaml"));
        assert!(error.contains("text"));
        assert!(error.contains("json"));
    }

    #[test]
    fn test_output_format_from_str_empty() {
        let result = OutputFormat::from_str("");
        assert!(result.is_err());
    }

    #[test]
    fn test_formatter_type_mapping() {
        assert_eq!(OutputFormat::Text.formatter_type(), FormatterType::Text);
        assert_eq!(
            OutputFormat::Markdown.formatter_type(),
            FormatterType::Markdown
        );
        assert_eq!(OutputFormat::Json.formatter_type(), FormatterType::Json);
    }
}
