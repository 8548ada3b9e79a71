//! Validation and reference-resolution pass.
//!
//! Runs once, after the parser has consumed the whole document: forward
//! references are legal, so nothing can be resolved earlier. Resolution is
//! atomic over the catalog - if any credit fails validation the entire load
//! fails and no database is produced.

use std::collections::HashMap;

use crate::credits::database::CreditDatabase;
use crate::credits::domain::{CreditRecord, LicenseRecord, OwnerRecord};
use crate::credits::parser::{LicenseSpec, OwnerSpec, RawCatalog};
use crate::shared::error::CreditsError;

/// Validates a raw catalog and collapses it into an immutable database.
///
/// For every credit: the component name must be non-blank, and the owner and
/// license must each be present, either inline or as a reference that
/// resolves within its own namespace. Resolved references reuse the canonical
/// named record, so every credit referencing one key carries an equal record.
pub fn resolve(raw: RawCatalog) -> Result<CreditDatabase, CreditsError> {
    let mut credit_map = HashMap::with_capacity(raw.credits.len());

    for (key, credit) in raw.credits {
        let component = match credit.component {
            Some(component) if !component.trim().is_empty() => component,
            _ => {
                return Err(CreditsError::IncompleteCredit {
                    key,
                    field: "Component".to_string(),
                })
            }
        };

        let owner = resolve_owner(&key, credit.owner, &raw.owners)?;
        let license = resolve_license(&key, credit.license, &raw.licenses)?;

        let record = CreditRecord::new(key.clone(), credit.force, component, owner, license);
        credit_map.insert(key, record);
    }

    Ok(CreditDatabase::new(credit_map, raw.artifacts))
}

fn resolve_owner(
    credit_key: &str,
    spec: Option<OwnerSpec>,
    owners: &HashMap<String, OwnerRecord>,
) -> Result<OwnerRecord, CreditsError> {
    match spec {
        None => Err(CreditsError::IncompleteCredit {
            key: credit_key.to_string(),
            field: "Owner".to_string(),
        }),
        Some(OwnerSpec::Inline(text)) => Ok(OwnerRecord::inline(text)),
        Some(OwnerSpec::Reference(reference)) => {
            owners.get(&reference).cloned().ok_or_else(|| {
                CreditsError::UnresolvedReference {
                    credit_key: credit_key.to_string(),
                    namespace: "owner".to_string(),
                    reference,
                }
            })
        }
    }
}

fn resolve_license(
    credit_key: &str,
    spec: Option<LicenseSpec>,
    licenses: &HashMap<String, LicenseRecord>,
) -> Result<LicenseRecord, CreditsError> {
    match spec {
        None => Err(CreditsError::IncompleteCredit {
            key: credit_key.to_string(),
            field: "License".to_string(),
        }),
        Some(LicenseSpec::Inline(text)) => Ok(LicenseRecord::inline(text)),
        Some(LicenseSpec::Reference(reference)) => {
            licenses.get(&reference).cloned().ok_or_else(|| {
                CreditsError::UnresolvedReference {
                    credit_key: credit_key.to_string(),
                    namespace: "license".to_string(),
                    reference,
                }
            })
        }
    }
}
