/// The owner of a credited component.
///
/// A named entry (built from the shared `owners` catalog) carries the key it
/// was registered under; an inline entry embedded directly in a credit has
/// no key. Owner keys and license keys live in disjoint namespaces, which
/// is why [`OwnerRecord`] and [`LicenseRecord`] are distinct types despite
/// the identical shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRecord {
    key: Option<String>,
    text: String,
}

impl OwnerRecord {
    /// A reusable entry from the named-owners catalog.
    pub fn named(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            text: text.into(),
        }
    }

    /// An inline entry private to a single credit.
    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The license of a credited component. Same named/inline duality as
/// [`OwnerRecord`], keyed in its own namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRecord {
    key: Option<String>,
    text: String,
}

impl LicenseRecord {
    pub fn named(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            text: text.into(),
        }
    }

    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_owner() {
        let owner = OwnerRecord::named("acme", "Acme Open Source Collective");
        assert_eq!(owner.key(), Some("acme"));
        assert_eq!(owner.text(), "Acme Open Source Collective");
    }

    #[test]
    fn test_inline_owner_has_no_key() {
        let owner = OwnerRecord::inline("FastCodec Maintainers");
        assert_eq!(owner.key(), None);
        assert_eq!(owner.text(), "FastCodec Maintainers");
    }

    #[test]
    fn test_named_license() {
        let license = LicenseRecord::named("apache2", "Apache License, Version 2.0");
        assert_eq!(license.key(), Some("apache2"));
        assert_eq!(license.text(), "Apache License, Version 2.0");
    }

    #[test]
    fn test_inline_license_preserves_text_verbatim() {
        let license = LicenseRecord::inline("BSD, MIT, Apache 2.0");
        assert_eq!(license.key(), None);
        assert_eq!(license.text(), "BSD, MIT, Apache 2.0");
    }

    #[test]
    fn test_shared_named_records_equal_by_clone() {
        let canonical = OwnerRecord::named("acme", "Acme Open Source Collective");
        assert_eq!(canonical.clone(), canonical);
    }
}
