//! Trailer download via an external `yt-dlp` binary.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{DownloadOutcome, FetchError, FetcherConfig, TrailerFetcher};

const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

/// Prefer pairing the best mp4 video-only and m4a audio-only streams into a
/// single file, falling back to the best muxed stream.
const FORMAT: &str = "bv*[ext=mp4]+ba[ext=m4a]/b[ext=mp4] / bv*+ba/b";

/// Extension placeholder understood by yt-dlp output templates.
pub const EXT_PLACEHOLDER: &str = "%(ext)s";

pub struct YtDlpFetcher {
    config: FetcherConfig,
}

impl YtDlpFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    async fn run(&self, video_id: &str, template: &Path) -> Result<Option<PathBuf>, FetchError> {
        let url = watch_url(video_id);
        info!(url = %url, "downloading video");

        let output = tokio::process::Command::new(&self.config.ytdlp_path)
            .arg("-f")
            .arg(FORMAT)
            .arg("--no-playlist")
            .arg("-o")
            .arg(template)
            .arg(&url)
            .output()
            .await
            .map_err(FetchError::Spawn)?;

        if !output.status.success() {
            return Err(FetchError::Download {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr)
                    .trim_end()
                    .to_string(),
            });
        }

        Ok(locate_saved(template))
    }
}

#[async_trait::async_trait]
impl TrailerFetcher for YtDlpFetcher {
    async fn fetch(&self, video_id: &str, template: &Path) -> DownloadOutcome {
        match self.run(video_id, template).await {
            Ok(saved_path) => {
                info!(path = ?saved_path, "trailer downloaded");
                DownloadOutcome {
                    success: true,
                    saved_path,
                }
            }
            Err(e) => {
                warn!(video_id = video_id, error = %e, "failed to download trailer");
                DownloadOutcome::failed()
            }
        }
    }
}

/// Canonical watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_BASE}{video_id}")
}

/// Find the file the downloader actually wrote, by matching the template's
/// filename up to the extension placeholder.
fn locate_saved(template: &Path) -> Option<PathBuf> {
    let name = template.file_name()?.to_str()?;
    let prefix = name.strip_suffix(EXT_PLACEHOLDER)?;
    let dir = template.parent()?;

    std::fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(prefix) && n != name)
        })
}
