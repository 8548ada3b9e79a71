use std::path::PathBuf;

/// Request for attribution report generation.
#[derive(Debug, Clone)]
pub struct CreditsRequest {
    /// Locator of the credits database document (path, `file://` or
    /// `http(s)://` URL)
    pub database_url: String,
    /// Optional path to the caller's dependency-list file; without one,
    /// only force=true credits are selected
    pub dependency_list: Option<PathBuf>,
}

impl CreditsRequest {
    pub fn new(database_url: impl Into<String>, dependency_list: Option<PathBuf>) -> Self {
        Self {
            database_url: database_url.into(),
            dependency_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_new() {
        let request = CreditsRequest::new(
            "file:///credits.xml",
            Some(PathBuf::from("dependencies.toml")),
        );
        assert_eq!(request.database_url, "file:///credits.xml");
        assert_eq!(
            request.dependency_list.as_deref(),
            Some(std::path::Path::new("dependencies.toml"))
        );
    }

    #[test]
    fn test_request_without_dependency_list() {
        let request = CreditsRequest::new("credits.xml", None);
        assert!(request.dependency_list.is_none());
    }
}
