mod adapters;
mod application;
mod cli;
mod config;
mod credits;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use anyhow::anyhow;
use application::dto::CreditsRequest;
use application::factories::{FormatterFactory, SourceFactory};
use application::use_cases::GenerateCreditsUseCase;
use cli::{Args, OutputFormat};
use config::ConfigFile;
use ports::outbound::OutputPresenter;
use shared::error::ExitCode;
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load config file (explicit path, or discovered in the working directory)
    let config = load_config(&args)?;

    // Merge arguments over config (arguments win)
    let database_url = args
        .database
        .or(config.database_url)
        .ok_or_else(|| {
            anyhow!(
                "No credits database specified.\n\n\
                 💡 Hint: Pass --database <PATH_OR_URL> or set database_url in oss-credits.config.yml"
            )
        })?;

    let dependency_list = args
        .dependencies
        .or(config.dependencies)
        .map(PathBuf::from);

    let format = match args.format {
        Some(format) => format,
        None => match config.format.as_deref() {
            Some(s) => OutputFormat::from_str(s).map_err(|e| anyhow!(e))?,
            None => OutputFormat::Text,
        },
    };

    let output = args.output.or(config.output);

    // Create adapters (Dependency Injection)
    let catalog_source = SourceFactory::create(&database_url)?;
    let dependency_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateCreditsUseCase::new(
        catalog_source.as_ref(),
        &dependency_reader,
        &progress_reporter,
    );

    // Execute use case
    let request = CreditsRequest::new(database_url, dependency_list);
    let response = use_case.execute(&request)?;

    // Convert CLI format to application layer format type
    let formatter_type = format.formatter_type();

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(formatter_type));

    // Create formatter using factory
    let formatter = FormatterFactory::create(formatter_type);
    let formatted_output = formatter.format(&response.entries, &response.metadata)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(Path::new(path)),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("my-config.yml");
        fs::write(&config_path, "format: markdown\n").unwrap();

        let args = Args::parse_from([
            "oss-credits",
            "--config",
            config_path.to_str().unwrap(),
        ]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
    }

    #[test]
    fn test_load_config_explicit_path_missing() {
        let args = Args::parse_from(["oss-credits", "--config", "/nonexistent/config.yml"]);
        let result = load_config(&args);
        assert!(result.is_err());
    }
}
