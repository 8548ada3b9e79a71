use crate::credits::domain::{ArtifactCoordinate, AttributionEntry, ReportMetadata};

/// Response from attribution report generation.
#[derive(Debug, Clone)]
pub struct CreditsResponse {
    /// Selected attribution triples, deduplicated and sorted by credit key
    pub entries: Vec<AttributionEntry>,
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Dependency coordinates with no credit entry (reported as warnings)
    pub unmatched: Vec<ArtifactCoordinate>,
}
