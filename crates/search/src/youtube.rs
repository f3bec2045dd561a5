//! YouTube Data API v3 search client.
//!
//! https://developers.google.com/youtube/v3/docs/search/list

use tracing::{debug, info};

use crate::{SearchError, VideoSearch};

const BASE_URL: &str = "https://youtube.googleapis.com/youtube/v3";

pub struct YoutubeClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl YoutubeClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl VideoSearch for YoutubeClient {
    /// Search for a trailer, filtered to short videos, requesting exactly
    /// one result. Query text is `"<title> <year> <keywords>"` in that
    /// order; encoding is handled by the query-parameter serializer.
    async fn search(
        &self,
        title: &str,
        year: &str,
        keywords: &str,
    ) -> Result<Option<String>, SearchError> {
        let query = build_query(title, year, keywords);
        let url = format!("{}/search", self.base_url);
        info!(query = %query, "sending YouTube search request");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("maxResults", "1"),
                ("q", &query),
                ("type", "video"),
                ("videoDuration", "short"),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SearchError::Provider(format!(
                "YouTube returned {}",
                resp.status()
            )));
        }

        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| SearchError::Provider(format!("parse JSON: {e}")))?;

        let video_id = first_video_id(&data);
        if video_id.is_none() {
            debug!(query = %query, "no search results");
        }
        Ok(video_id)
    }
}

/// Title, year, keywords, space-separated in that order.
fn build_query(title: &str, year: &str, keywords: &str) -> String {
    format!("{title} {year} {keywords}")
}

fn first_video_id(data: &serde_json::Value) -> Option<String> {
    data["items"]
        .as_array()
        .and_then(|items| items.first())
        .and_then(|item| item["id"]["videoId"].as_str())
        .map(|s| s.to_string())
}
