pub mod error;
pub mod result;

pub use error::{CreditsError, ExitCode};
pub use result::Result;
