pub mod ytdlp;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use ytdlp::YtDlpFetcher;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to run yt-dlp: {0}")]
    Spawn(std::io::Error),
    #[error("yt-dlp exited with {status}: {stderr}")]
    Download { status: String, stderr: String },
}

/// Downloader configuration.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub ytdlp_path: PathBuf,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            ytdlp_path: PathBuf::from("yt-dlp"),
        }
    }
}

/// Terminal artifact of one resolution attempt. A failed download is an
/// outcome, not an error: it must never abort the rest of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub success: bool,
    pub saved_path: Option<PathBuf>,
}

impl DownloadOutcome {
    pub fn failed() -> Self {
        Self {
            success: false,
            saved_path: None,
        }
    }

    /// 1 for a successful download, 0 otherwise.
    pub fn count(&self) -> u32 {
        if self.success { 1 } else { 0 }
    }
}

/// Something that can download a video into a path template.
#[async_trait::async_trait]
pub trait TrailerFetcher: Send + Sync {
    /// Download `video_id` into `template`, a path whose filename ends in
    /// an extension placeholder the downloader substitutes.
    async fn fetch(&self, video_id: &str, template: &Path) -> DownloadOutcome;
}
