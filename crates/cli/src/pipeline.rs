//! Trailer resolution pipeline: one pass per title, no retries.

use thiserror::Error;
use tracing::info;

use trailfetch_core::{Config, TitleRecord};
use trailfetch_fetcher::TrailerFetcher;
use trailfetch_metadata::{CatalogProvider, MetadataError};
use trailfetch_search::{SearchError, VideoSearch};

/// Catalog and search failures abort the whole run: they point at
/// configuration or upstream problems, unlike per-title download failures
/// which the fetcher already absorbs.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

pub struct Pipeline<'a> {
    config: &'a Config,
    catalog: &'a dyn CatalogProvider,
    search: &'a dyn VideoSearch,
    fetcher: &'a dyn TrailerFetcher,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a Config,
        catalog: &'a dyn CatalogProvider,
        search: &'a dyn VideoSearch,
        fetcher: &'a dyn TrailerFetcher,
    ) -> Self {
        Self {
            config,
            catalog,
            search,
            fetcher,
        }
    }

    /// Resolve and download one trailer. Returns 1 on a successful
    /// download, 0 on any normal termination (no match, fetch failure).
    pub async fn resolve(&self, record: &TitleRecord) -> Result<u32, PipelineError> {
        let catalog_id = match &record.catalog_id {
            Some(id) => Some(id.clone()),
            None => {
                self.catalog
                    .resolve_id(&record.title, &record.year, record.media_type)
                    .await?
            }
        };

        let details = self
            .catalog
            .details(catalog_id.as_deref(), record.media_type)
            .await?;

        let policy = self
            .config
            .policy_for(details.as_ref().map(|d| d.original_language()));

        // The substitution must happen before the query and before the
        // destination template, so a resolved original-language title lands
        // in both the search and the saved filename.
        let effective_title = match &details {
            Some(details) if policy.use_original_title => {
                let title = details.native_title().to_string();
                info!(title = %title, "using original title");
                title
            }
            _ => record.title.clone(),
        };

        let video_id = self
            .search
            .search(&effective_title, &record.year, &policy.search_keywords)
            .await?;

        let Some(video_id) = video_id else {
            info!(
                title = %effective_title,
                year = %record.year,
                "no search results, skipping trailer download"
            );
            return Ok(0);
        };

        let template = record.trailer_template(&effective_title);
        let outcome = self.fetcher.fetch(&video_id, &template).await;
        Ok(outcome.count())
    }
}
