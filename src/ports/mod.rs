/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe the infrastructure the application
/// core depends on: catalog sources, dependency lists, formatting, output
/// and progress reporting.
pub mod outbound;
