//! Immutable, queryable credit database.

use std::collections::HashMap;

use crate::credits::domain::{ArtifactCoordinate, CreditRecord};

/// The validated credit catalog.
///
/// Built once by the resolver and never mutated afterwards, so it is safe
/// to query from multiple threads without synchronization. Enumeration
/// order is not meaningful; callers that need a deterministic report order
/// sort explicitly (ascending by credit key).
#[derive(Debug)]
pub struct CreditDatabase {
    credit_map: HashMap<String, CreditRecord>,
    artifact_map: HashMap<ArtifactCoordinate, String>,
}

impl CreditDatabase {
    pub(crate) fn new(
        credit_map: HashMap<String, CreditRecord>,
        artifact_map: HashMap<ArtifactCoordinate, String>,
    ) -> Self {
        Self {
            credit_map,
            artifact_map,
        }
    }

    /// All credits in the catalog, in unspecified order.
    pub fn all_credits(&self) -> impl Iterator<Item = &CreditRecord> {
        self.credit_map.values()
    }

    /// Number of distinct credit keys in the catalog.
    pub fn len(&self) -> usize {
        self.credit_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credit_map.is_empty()
    }

    /// Gets the credit a dependency coordinate maps to, or `None` if the
    /// coordinate has no entry in the catalog.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate maps to a key absent from the credit map.
    /// The resolver guarantees both maps are built from the same document,
    /// so that state is an internal defect, not a data-entry error, and is
    /// signaled distinctly from a normal "not found" result.
    pub fn lookup(&self, coordinate: &ArtifactCoordinate) -> Option<&CreditRecord> {
        let key = self.artifact_map.get(coordinate)?;
        match self.credit_map.get(key) {
            Some(credit) => Some(credit),
            None => panic!(
                "No credit for key {}: artifact index out of sync with credit map",
                key
            ),
        }
    }

    /// Coordinate lookup from raw groupId/artifactId strings.
    pub fn lookup_ids(&self, group_id: &str, artifact_id: &str) -> Option<&CreditRecord> {
        let coordinate = ArtifactCoordinate::new(group_id, artifact_id).ok()?;
        self.lookup(&coordinate)
    }
}
