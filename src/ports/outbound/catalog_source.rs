use crate::shared::Result;

/// CatalogSource port for fetching the credits document
///
/// This port abstracts where the credits XML lives (local file, remote
/// URL). The document is read once, sequentially and synchronously;
/// an I/O failure aborts the load and is wrapped with the locator.
pub trait CatalogSource {
    /// Fetches the full document text for the given locator.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read; the error names
    /// the locator.
    fn fetch(&self, locator: &str) -> Result<String>;
}
