use crate::shared::Result;

/// Immutable (groupId, artifactId) pair identifying one dependency.
///
/// This is the natural key for attribution lookups: many coordinates may
/// map to the same credit, but each pair is unique document-wide within a
/// catalog. Equality and hashing cover both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    group_id: String,
    artifact_id: String,
}

impl ArtifactCoordinate {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Result<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();

        if group_id.trim().is_empty() {
            anyhow::bail!("Artifact groupId cannot be blank");
        }
        if artifact_id.trim().is_empty() {
            anyhow::bail!("Artifact artifactId cannot be blank");
        }

        Ok(Self {
            group_id,
            artifact_id,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }
}

impl std::fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

impl std::str::FromStr for ArtifactCoordinate {
    type Err = anyhow::Error;

    /// Parses the `groupId:artifactId` form used by dependency-list files.
    fn from_str(s: &str) -> Result<Self> {
        let (group_id, artifact_id) = s.split_once(':').ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid artifact coordinate '{}'. Expected the form 'groupId:artifactId'",
                s
            )
        })?;

        Self::new(group_id, artifact_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_coordinate_new_valid() {
        let coordinate = ArtifactCoordinate::new("com.acme.net", "http-core").unwrap();
        assert_eq!(coordinate.group_id(), "com.acme.net");
        assert_eq!(coordinate.artifact_id(), "http-core");
    }

    #[test]
    fn test_coordinate_new_blank_group() {
        let result = ArtifactCoordinate::new("  ", "http-core");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("groupId cannot be blank"));
    }

    #[test]
    fn test_coordinate_new_blank_artifact() {
        let result = ArtifactCoordinate::new("com.acme.net", "");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("artifactId cannot be blank"));
    }

    #[test]
    fn test_coordinate_display() {
        let coordinate = ArtifactCoordinate::new("com.acme.net", "http-core").unwrap();
        assert_eq!(format!("{}", coordinate), "com.acme.net:http-core");
    }

    #[test]
    fn test_coordinate_from_str() {
        let coordinate = ArtifactCoordinate::from_str("io.fastcodec:fastcodec").unwrap();
        assert_eq!(coordinate.group_id(), "io.fastcodec");
        assert_eq!(coordinate.artifact_id(), "fastcodec");
    }

    #[test]
    fn test_coordinate_from_str_missing_separator() {
        let result = ArtifactCoordinate::from_str("io.fastcodec");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Expected the form 'groupId:artifactId'"));
    }

    #[test]
    fn test_coordinate_equality_covers_both_fields() {
        let a = ArtifactCoordinate::new("com.acme", "core").unwrap();
        let b = ArtifactCoordinate::new("com.acme", "core").unwrap();
        let c = ArtifactCoordinate::new("com.acme", "render").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_coordinate_hash_usable_as_map_key() {
        let mut set = HashSet::new();
        set.insert(ArtifactCoordinate::new("com.acme", "core").unwrap());
        set.insert(ArtifactCoordinate::new("com.acme", "core").unwrap());
        set.insert(ArtifactCoordinate::new("com.acme", "render").unwrap());
        assert_eq!(set.len(), 2);
    }
}
