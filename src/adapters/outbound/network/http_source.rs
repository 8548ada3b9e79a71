use crate::ports::outbound::CatalogSource;
use crate::shared::error::CreditsError;
use crate::shared::Result;
use std::time::Duration;

/// Request timeout for catalog downloads
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HttpSource adapter for fetching the credits document over HTTP(S)
///
/// This adapter implements the CatalogSource port with a blocking reqwest
/// client: the load contract is synchronous and the document is read once
/// per invocation, so there is nothing to parallelize.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("oss-credits/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn download(&self, locator: &str) -> Result<String> {
        let response = self.client.get(locator).send()?;

        if !response.status().is_success() {
            anyhow::bail!("Server returned HTTP status {}", response.status());
        }

        Ok(response.text()?)
    }
}

impl CatalogSource for HttpSource {
    fn fetch(&self, locator: &str) -> Result<String> {
        self.download(locator).map_err(|e| {
            CreditsError::SourceRead {
                locator: locator.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_creation() {
        let source = HttpSource::new();
        assert!(source.is_ok());
    }

    #[test]
    fn test_fetch_unreachable_host_names_locator() {
        let source = HttpSource::new().unwrap();
        // Reserved TLD, guaranteed not to resolve.
        let result = source.fetch("http://credits.invalid/credits.xml");
        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string
            .contains("Failed to read credits database from http://credits.invalid/credits.xml"));
    }
}
