//! Batch mode: resolve a trailer for every title folder under a library
//! root, strictly one at a time.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use trailfetch_scanner::{FolderDecision, ScanError, scan_library};

use crate::pipeline::{Pipeline, PipelineError};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Walk the library and resolve trailers folder by folder. Returns the
/// number of newly downloaded trailers. Catalog/search failures abort the
/// whole batch; download failures only cost that folder its trailer.
pub async fn run_library(root: &Path, pipeline: &Pipeline<'_>) -> Result<u32, BatchError> {
    let mut downloaded = 0u32;

    for (folder, decision) in scan_library(root)? {
        match decision {
            // Both skip cases are narrated by the scanner.
            FolderDecision::HasTrailer | FolderDecision::Unparsed => {}
            FolderDecision::Candidate(record) => {
                info!(folder = %folder.display(), "downloading a trailer");
                downloaded += pipeline.resolve(&record).await?;
            }
        }
    }

    info!(downloaded, "batch finished");
    Ok(downloaded)
}
