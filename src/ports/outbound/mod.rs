/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod catalog_source;
pub mod dependency_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use catalog_source::CatalogSource;
pub use dependency_reader::DependencyListReader;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
