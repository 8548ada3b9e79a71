/// Domain value types for the credits catalog.
///
/// These types underpin the parser, the resolver, and the credit database.
pub mod artifact;
pub mod attribution;
pub mod credit;
pub mod report;

pub use artifact::ArtifactCoordinate;
pub use attribution::{LicenseRecord, OwnerRecord};
pub use credit::CreditRecord;
pub use report::{AttributionEntry, ReportMetadata};
