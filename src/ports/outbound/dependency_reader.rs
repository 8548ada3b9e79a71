use crate::credits::domain::ArtifactCoordinate;
use crate::shared::Result;
use std::path::Path;

/// DependencyListReader port for reading the caller's dependency set
///
/// The core never discovers dependencies itself; it only consumes a list
/// of artifact coordinates produced elsewhere (a build system, a lock
/// file export).
pub trait DependencyListReader {
    /// Reads dependency coordinates from a list file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or an entry is not a
    /// valid `groupId:artifactId` coordinate.
    fn read_dependencies(&self, path: &Path) -> Result<Vec<ArtifactCoordinate>>;
}
