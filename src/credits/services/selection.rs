//! Credit selection for report generation.

use std::collections::HashSet;

use crate::credits::database::CreditDatabase;
use crate::credits::domain::{ArtifactCoordinate, CreditRecord};

/// Result of selecting credits against a caller's dependency set.
#[derive(Debug)]
pub struct SelectionOutcome<'a> {
    /// Selected credits, deduplicated by key and sorted ascending by key.
    pub selected: Vec<&'a CreditRecord>,
    /// Dependency coordinates with no entry in the catalog. Not an error:
    /// callers typically surface these as warnings.
    pub unmatched: Vec<ArtifactCoordinate>,
}

/// Selects the credits that must be disclosed for a dependency set:
/// every credit flagged force=true plus every credit matched by at least
/// one coordinate.
///
/// Several coordinates mapping to one credit collapse into a single entry;
/// deduplication leans on the key-only equality contract of
/// [`CreditRecord`]. The final order is ascending by credit key, so the
/// rendered report is deterministic regardless of lookup order.
pub fn select_credits<'a>(
    database: &'a CreditDatabase,
    dependencies: &[ArtifactCoordinate],
) -> SelectionOutcome<'a> {
    let mut selected: HashSet<&CreditRecord> = database
        .all_credits()
        .filter(|credit| credit.force())
        .collect();

    let mut unmatched = Vec::new();
    for coordinate in dependencies {
        match database.lookup(coordinate) {
            Some(credit) => {
                selected.insert(credit);
            }
            None => unmatched.push(coordinate.clone()),
        }
    }

    let mut selected: Vec<&CreditRecord> = selected.into_iter().collect();
    selected.sort_by_key(|credit| credit.key());

    SelectionOutcome {
        selected,
        unmatched,
    }
}
