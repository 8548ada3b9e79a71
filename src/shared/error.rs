use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report generated
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed catalog, unresolved reference, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for credits catalog loading and report
/// generation.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// The first four variants form the catalog load taxonomy: the two
/// `*Document` variants are raised during the parse pass, the other two
/// during the resolution pass. Every one of them aborts the load; no
/// partial database is ever produced.
#[derive(Debug, Error)]
pub enum CreditsError {
    /// Ill-formed document or duplicate key within any namespace
    /// (credit keys, artifact coordinates, owner keys, license keys).
    #[error("Malformed credits document: {details}")]
    MalformedDocument { details: String },

    /// An element appeared in a context where it is not legal.
    #[error("Element '{element}' is not valid here: {details}")]
    StructuralPlacement { element: String, details: String },

    /// A credit is missing a required component, owner, or license.
    #[error("{field} undefined for credit with key {key}")]
    IncompleteCredit { key: String, field: String },

    /// A reference key does not resolve within its own namespace.
    #[error("Credit with key {credit_key} refers to undefined {namespace} key {reference}")]
    UnresolvedReference {
        credit_key: String,
        namespace: String,
        reference: String,
    },

    #[error("Failed to read credits database from {locator}\nDetails: {details}\n\n💡 Hint: Check that the database URL points to an existing, readable credits XML document")]
    SourceRead { locator: String, details: String },

    #[error("Failed to parse dependency list: {path}\nDetails: {details}\n\n💡 Hint: The file must be TOML with a 'dependencies' array of \"groupId:artifactId\" strings")]
    InvalidDependencyList { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
