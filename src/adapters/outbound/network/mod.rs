/// Network adapters for remote catalog access
mod http_source;

pub use http_source::HttpSource;
