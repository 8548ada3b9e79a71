/// Factories for creating application components
mod formatter_factory;
mod source_factory;

pub use formatter_factory::{FormatterFactory, FormatterType};
pub use source_factory::SourceFactory;
