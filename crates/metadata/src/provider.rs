use trailfetch_core::MediaType;

use crate::{CatalogDetails, MetadataError};

/// A metadata catalog that can resolve titles to ids and ids to details.
///
/// "Not found" is a normal outcome on both operations and surfaces as
/// `Ok(None)`; only transport and status failures are errors.
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Resolve a title/year to the catalog's id for it, or `None` when the
    /// catalog has no match (or no credential is configured).
    async fn resolve_id(
        &self,
        title: &str,
        year: &str,
        media_type: MediaType,
    ) -> Result<Option<String>, MetadataError>;

    /// Fetch original-title and original-language details for an id.
    /// `None` id short-circuits to `Ok(None)`.
    async fn details(
        &self,
        id: Option<&str>,
        media_type: MediaType,
    ) -> Result<Option<CatalogDetails>, MetadataError>;
}
