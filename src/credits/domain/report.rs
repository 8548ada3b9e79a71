use chrono::{DateTime, Utc};
use serde::Serialize;

use super::CreditRecord;

/// One row of the attribution report: the (component, owner, license)
/// triple disclosed for a selected credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributionEntry {
    pub component: String,
    pub owner: String,
    pub license: String,
}

impl From<&CreditRecord> for AttributionEntry {
    fn from(credit: &CreditRecord) -> Self {
        Self {
            component: credit.component().to_string(),
            owner: credit.owner().text().to_string(),
            license: credit.license().text().to_string(),
        }
    }
}

/// Metadata attached to a generated attribution report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Report generation timestamp (UTC)
    pub generated_at: DateTime<Utc>,
    /// Locator of the credits database the report was built from
    pub database_url: String,
    /// Number of credits selected into the report
    pub credit_count: usize,
    /// Name and version of the generating tool
    pub tool: String,
}

impl ReportMetadata {
    pub fn new(database_url: impl Into<String>, credit_count: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            database_url: database_url.into(),
            credit_count,
            tool: format!("oss-credits/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
