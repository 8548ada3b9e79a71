//! oss-credits - Attribution report compiler for open source credits catalogs
//!
//! This library compiles a declarative XML credits catalog into an immutable
//! database, selects the credits owed for a set of dependency coordinates,
//! and renders the resulting attribution report. It follows hexagonal
//! architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`credits`): Catalog parsing, resolution, and selection
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use oss_credits::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let catalog_source = FileSystemReader::new();
//! let dependency_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateCreditsUseCase::new(
//!     &catalog_source,
//!     &dependency_reader,
//!     &progress_reporter,
//! );
//!
//! // Execute
//! let request = CreditsRequest::new("oss-credits.xml", None);
//! let response = use_case.execute(&request)?;
//!
//! // Format output
//! let formatter = TextFormatter::new();
//! let output = formatter.format(&response.entries, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod credits;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::network::HttpSource;
    pub use crate::application::dto::{CreditsRequest, CreditsResponse};
    pub use crate::application::factories::{FormatterFactory, FormatterType, SourceFactory};
    pub use crate::application::use_cases::GenerateCreditsUseCase;
    pub use crate::credits::domain::{
        ArtifactCoordinate, AttributionEntry, CreditRecord, LicenseRecord, OwnerRecord,
        ReportMetadata,
    };
    pub use crate::credits::services::{select_credits, SelectionOutcome};
    pub use crate::credits::{load_catalog, CreditDatabase};
    pub use crate::ports::outbound::{
        CatalogSource, DependencyListReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
