use crate::credits::domain::ArtifactCoordinate;
use crate::ports::outbound::{CatalogSource, DependencyListReader};
use crate::shared::error::CreditsError;
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Maximum file size for security (10 MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// TOML schema of a dependency-list file.
#[derive(Debug, Deserialize)]
struct DependencyFile {
    /// `groupId:artifactId` coordinate strings
    dependencies: Vec<String>,
}

/// FileSystemReader adapter for reading local files
///
/// This adapter implements both the CatalogSource and DependencyListReader
/// ports: it fetches credits documents from local paths (plain paths or
/// `file://` locators) and parses TOML dependency-list files.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
    }
}

impl CatalogSource for FileSystemReader {
    fn fetch(&self, locator: &str) -> Result<String> {
        let path = locator.strip_prefix("file://").unwrap_or(locator);

        self.safe_read_file(Path::new(path)).map_err(|e| {
            CreditsError::SourceRead {
                locator: locator.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl DependencyListReader for FileSystemReader {
    fn read_dependencies(&self, path: &Path) -> Result<Vec<ArtifactCoordinate>> {
        let content = self.safe_read_file(path).map_err(|e| {
            CreditsError::InvalidDependencyList {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        let file: DependencyFile =
            toml::from_str(&content).map_err(|e| CreditsError::InvalidDependencyList {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let mut coordinates = Vec::with_capacity(file.dependencies.len());
        for entry in &file.dependencies {
            let coordinate = ArtifactCoordinate::from_str(entry).map_err(|e| {
                CreditsError::InvalidDependencyList {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
            })?;
            coordinates.push(coordinate);
        }

        Ok(coordinates)
    }
}
