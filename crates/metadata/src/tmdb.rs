//! TMDB (The Movie Database) catalog client.
//!
//! Uses TMDB API v3: https://developer.themoviedb.org/docs

use tracing::{debug, info};
use trailfetch_core::MediaType;

use crate::provider::CatalogProvider;
use crate::{CatalogDetails, MetadataError};

const BASE_URL: &str = "https://api.themoviedb.org/3";

pub struct TmdbClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json(
        &self,
        api_key: &str,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, MetadataError> {
        let mut all_params = vec![("api_key", api_key)];
        all_params.extend_from_slice(params);

        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "TMDB request");

        let resp = self
            .client
            .get(&url)
            .query(&all_params)
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(MetadataError::Provider(format!(
                "TMDB returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| MetadataError::Provider(format!("parse JSON: {e}")))
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbClient {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn resolve_id(
        &self,
        title: &str,
        year: &str,
        media_type: MediaType,
    ) -> Result<Option<String>, MetadataError> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("no TMDB key configured, skipping id resolution");
            return Ok(None);
        };

        let (path, year_param) = match media_type {
            MediaType::Movie => ("/search/movie", "year"),
            MediaType::Series => ("/search/tv", "first_air_date_year"),
        };

        info!(title = title, year = year, kind = %media_type, "searching TMDB for catalog id");
        let data = self
            .get_json(api_key, path, &[("query", title), (year_param, year)])
            .await?;

        Ok(first_result_id(&data))
    }

    async fn details(
        &self,
        id: Option<&str>,
        media_type: MediaType,
    ) -> Result<Option<CatalogDetails>, MetadataError> {
        let (Some(api_key), Some(id)) = (self.api_key.as_deref(), id) else {
            return Ok(None);
        };

        let path = match media_type {
            MediaType::Movie => format!("/movie/{id}"),
            MediaType::Series => format!("/tv/{id}"),
        };

        info!(id = id, kind = %media_type, "querying TMDB for title details");
        let data = self.get_json(api_key, &path, &[]).await?;

        Ok(match media_type {
            MediaType::Movie => parse_movie_details(&data),
            MediaType::Series => parse_series_details(&data),
        })
    }
}

/// First search result's id, or `None` on an empty result set.
fn first_result_id(data: &serde_json::Value) -> Option<String> {
    data["results"]
        .as_array()
        .and_then(|results| results.first())
        .and_then(|r| r["id"].as_u64())
        .map(|id| id.to_string())
}

fn parse_movie_details(data: &serde_json::Value) -> Option<CatalogDetails> {
    Some(CatalogDetails::Movie {
        original_title: data["original_title"].as_str()?.to_string(),
        original_language: data["original_language"].as_str()?.to_string(),
    })
}

fn parse_series_details(data: &serde_json::Value) -> Option<CatalogDetails> {
    // Series use `original_name` upstream, not `original_title`.
    Some(CatalogDetails::Series {
        original_name: data["original_name"].as_str()?.to_string(),
        original_language: data["original_language"].as_str()?.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn first_result_id_from_search_json() {
        let json = serde_json::json!({
            "total_results": 2,
            "results": [
                { "id": 651881, "title": "Bye Bye Morons" },
                { "id": 9999, "title": "Other" }
            ]
        });
        assert_eq!(first_result_id(&json).as_deref(), Some("651881"));
    }

    #[test]
    fn first_result_id_empty_results() {
        let json = serde_json::json!({ "total_results": 0, "results": [] });
        assert_eq!(first_result_id(&json), None);
    }

    #[test]
    fn parse_movie_details_from_json() {
        let json = serde_json::json!({
            "title": "Bye Bye Morons",
            "original_title": "Adieu les cons",
            "original_language": "fr",
            "release_date": "2020-10-21"
        });
        assert_eq!(
            parse_movie_details(&json),
            Some(CatalogDetails::Movie {
                original_title: "Adieu les cons".into(),
                original_language: "fr".into(),
            })
        );
    }

    #[test]
    fn parse_series_details_uses_original_name() {
        let json = serde_json::json!({
            "name": "Money Heist",
            "original_name": "La casa de papel",
            "original_language": "es",
            "first_air_date": "2017-05-02"
        });
        assert_eq!(
            parse_series_details(&json),
            Some(CatalogDetails::Series {
                original_name: "La casa de papel".into(),
                original_language: "es".into(),
            })
        );
    }

    #[test]
    fn parse_details_missing_fields() {
        let json = serde_json::json!({ "status_message": "not quite right" });
        assert_eq!(parse_movie_details(&json), None);
        assert_eq!(parse_series_details(&json), None);
    }

    #[tokio::test]
    async fn resolve_id_without_key_is_none() {
        let client = TmdbClient::new(None);
        let id = client
            .resolve_id("Alpha", "2020", MediaType::Movie)
            .await
            .unwrap();
        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn details_without_id_is_none() {
        let client = TmdbClient::new(Some("key".into()));
        let details = client.details(None, MediaType::Movie).await.unwrap();
        assert_eq!(details, None);
    }

    #[tokio::test]
    async fn resolve_id_hits_movie_search_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search/movie")
                .query_param("api_key", "key")
                .query_param("query", "Alpha")
                .query_param("year", "2020");
            then.status(200)
                .json_body(serde_json::json!({ "results": [{ "id": 100 }] }));
        });

        let client = TmdbClient::with_base_url(Some("key".into()), server.base_url());
        let id = client
            .resolve_id("Alpha", "2020", MediaType::Movie)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(id.as_deref(), Some("100"));
    }

    #[tokio::test]
    async fn resolve_id_hits_series_search_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search/tv")
                .query_param("query", "Gamma")
                .query_param("first_air_date_year", "2021");
            then.status(200)
                .json_body(serde_json::json!({ "results": [{ "id": 4242 }] }));
        });

        let client = TmdbClient::with_base_url(Some("key".into()), server.base_url());
        let id = client
            .resolve_id("Gamma", "2021", MediaType::Series)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(id.as_deref(), Some("4242"));
    }

    #[tokio::test]
    async fn details_surface_upstream_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/movie/100");
            then.status(500);
        });

        let client = TmdbClient::with_base_url(Some("key".into()), server.base_url());
        let err = client
            .details(Some("100"), MediaType::Movie)
            .await
            .unwrap_err();
        assert!(matches!(err, MetadataError::Provider(_)));
    }
}
