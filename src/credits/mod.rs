//! Credits catalog domain: entity types, the two-pass loader
//! (parse, then resolve), the immutable database, and selection.
//!
//! Loading is always collect-then-validate: the parser builds raw entity
//! maps with unresolved reference placeholders, and the resolver collapses
//! them into a [`CreditDatabase`] in a single end-of-document pass. A load
//! either completes fully or fails; callers never observe a partial
//! database.

pub mod database;
pub mod domain;
pub mod parser;
pub mod resolver;
pub mod services;

pub use database::CreditDatabase;

use crate::shared::Result;

/// Compiles a credits document into a queryable database.
pub fn load_catalog(document: &str) -> Result<CreditDatabase> {
    let raw = parser::parse(document)?;
    let database = resolver::resolve(raw)?;
    Ok(database)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::CreditsError;

    #[test]
    fn test_load_catalog_ok() {
        let database = load_catalog(
            r#"<credits>
                 <credit key="fastcodec">
                   <component>FastCodec</component>
                   <owner>FastCodec Maintainers</owner>
                   <license>MPL 2.0</license>
                 </credit>
               </credits>"#,
        )
        .unwrap();
        assert_eq!(database.len(), 1);
    }

    #[test]
    fn test_load_catalog_parse_errors_carry_taxonomy() {
        let error = load_catalog(r#"<credits><credit/></credits>"#).unwrap_err();
        assert!(error.downcast_ref::<CreditsError>().is_some());
    }

    #[test]
    fn test_load_catalog_resolve_errors_carry_taxonomy() {
        let error = load_catalog(
            r#"<credits>
                 <credit key="a"><component>A</component></credit>
               </credits>"#,
        )
        .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CreditsError>(),
            Some(CreditsError::IncompleteCredit { .. })
        ));
    }
}
