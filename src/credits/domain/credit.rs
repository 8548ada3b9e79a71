use std::hash::{Hash, Hasher};

use super::{LicenseRecord, OwnerRecord};

/// One attribution record for a single open-source component.
///
/// # Equality contract
///
/// Equality and hashing are defined by `key` alone: two records are the
/// "same" credit iff their keys match, independent of every other field.
/// This is an intentional contract, not structural equality - the selection
/// pass relies on it to collapse duplicates in a `HashSet` when several
/// artifact coordinates map to one credit. Implementers of set-based
/// deduplication must not switch this back to derived field-wise equality.
#[derive(Debug, Clone)]
pub struct CreditRecord {
    key: String,
    force: bool,
    component: String,
    owner: OwnerRecord,
    license: LicenseRecord,
}

impl CreditRecord {
    pub fn new(
        key: impl Into<String>,
        force: bool,
        component: impl Into<String>,
        owner: OwnerRecord,
        license: LicenseRecord,
    ) -> Self {
        Self {
            key: key.into(),
            force,
            component: component.into(),
            owner,
            license,
        }
    }

    /// Unique key of this credit across the whole catalog.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether this component must be cited regardless of the caller's
    /// dependency set.
    pub fn force(&self) -> bool {
        self.force
    }

    /// Display name of the component.
    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn owner(&self) -> &OwnerRecord {
        &self.owner
    }

    pub fn license(&self) -> &LicenseRecord {
        &self.license
    }
}

impl PartialEq for CreditRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CreditRecord {}

impl Hash for CreditRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn credit(key: &str, component: &str) -> CreditRecord {
        CreditRecord::new(
            key,
            false,
            component,
            OwnerRecord::inline("Some Owner"),
            LicenseRecord::inline("Some License"),
        )
    }

    #[test]
    fn test_accessors() {
        let record = CreditRecord::new(
            "chartkit",
            true,
            "ChartKit",
            OwnerRecord::named("acme", "Acme Open Source Collective"),
            LicenseRecord::named("apache2", "Apache License, Version 2.0"),
        );
        assert_eq!(record.key(), "chartkit");
        assert!(record.force());
        assert_eq!(record.component(), "ChartKit");
        assert_eq!(record.owner().key(), Some("acme"));
        assert_eq!(record.license().text(), "Apache License, Version 2.0");
    }

    #[test]
    fn test_equality_by_key_only() {
        // Same key, different component: still the "same" credit.
        let a = credit("chartkit", "ChartKit");
        let b = credit("chartkit", "Chart Kit (renamed)");
        let c = credit("fastcodec", "ChartKit");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_follows_key_only_equality() {
        let mut set = HashSet::new();
        set.insert(credit("chartkit", "ChartKit"));
        set.insert(credit("chartkit", "Chart Kit (renamed)"));
        set.insert(credit("fastcodec", "FastCodec"));
        assert_eq!(set.len(), 2);
    }
}
