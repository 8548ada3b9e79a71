use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::adapters::outbound::network::HttpSource;
use crate::ports::outbound::CatalogSource;
use crate::shared::Result;

/// SourceFactory for choosing the catalog source adapter by locator scheme
pub struct SourceFactory;

impl SourceFactory {
    /// Creates the catalog source matching a database locator:
    /// `http://` and `https://` use the network adapter, everything else
    /// (plain paths and `file://` locators) the filesystem adapter.
    pub fn create(locator: &str) -> Result<Box<dyn CatalogSource>> {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            Ok(Box::new(HttpSource::new()?))
        } else {
            Ok(Box::new(FileSystemReader::new()))
        }
    }
}
