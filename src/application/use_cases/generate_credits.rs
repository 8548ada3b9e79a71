use crate::application::dto::{CreditsRequest, CreditsResponse};
use crate::credits::domain::{AttributionEntry, ReportMetadata};
use crate::credits::services::select_credits;
use crate::credits::load_catalog;
use crate::ports::outbound::{CatalogSource, DependencyListReader, ProgressReporter};
use crate::shared::Result;

/// Use case for generating an attribution report.
///
/// Fetches the credits database document, compiles it, selects the credits
/// owed for the caller's dependency set and maps them to report entries.
pub struct GenerateCreditsUseCase<'a> {
    catalog_source: &'a dyn CatalogSource,
    dependency_reader: &'a dyn DependencyListReader,
    progress: &'a dyn ProgressReporter,
}

impl<'a> GenerateCreditsUseCase<'a> {
    pub fn new(
        catalog_source: &'a dyn CatalogSource,
        dependency_reader: &'a dyn DependencyListReader,
        progress: &'a dyn ProgressReporter,
    ) -> Self {
        Self {
            catalog_source,
            dependency_reader,
            progress,
        }
    }

    pub fn execute(&self, request: &CreditsRequest) -> Result<CreditsResponse> {
        self.progress
            .report(&format!("📥 Loading credits database: {}", request.database_url));
        let document = self.catalog_source.fetch(&request.database_url)?;

        self.progress.report("🧩 Compiling credits database...");
        let database = load_catalog(&document)?;
        self.progress.report(&format!(
            "🧩 Compiled {} credits from the database",
            database.len()
        ));

        let dependencies = match &request.dependency_list {
            Some(path) => {
                self.progress
                    .report(&format!("📦 Reading dependency list: {}", path.display()));
                self.dependency_reader.read_dependencies(path)?
            }
            None => Vec::new(),
        };

        let outcome = select_credits(&database, &dependencies);
        for coordinate in &outcome.unmatched {
            self.progress
                .report_warning(&format!("No credit found for artifact {}.", coordinate));
        }

        let entries: Vec<AttributionEntry> = outcome
            .selected
            .iter()
            .map(|credit| AttributionEntry::from(*credit))
            .collect();
        let metadata = ReportMetadata::new(request.database_url.clone(), entries.len());

        self.progress
            .report_completion(&format!("✅ Selected {} credits", entries.len()));

        Ok(CreditsResponse {
            entries,
            metadata,
            unmatched: outcome.unmatched,
        })
    }
}
