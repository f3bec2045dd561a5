pub mod youtube;

use thiserror::Error;

pub use youtube::YoutubeClient;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("search error: {0}")]
    Provider(String),
}

/// A short-video search service. `Ok(None)` means no acceptable match,
/// which ends a resolution attempt normally.
#[async_trait::async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(
        &self,
        title: &str,
        year: &str,
        keywords: &str,
    ) -> Result<Option<String>, SearchError>;
}
