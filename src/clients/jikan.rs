use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::CatalogConfig;
use crate::models::anime::{Anime, AnimeReference};
use crate::services::catalog::{CatalogClient, CatalogError};

pub const JIKAN_API: &str = "https://api.jikan.moe/v4";

#[derive(Debug, Deserialize)]
struct JikanResponse<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct RecommendationEntry {
    entry: Option<RecommendationTarget>,
}

#[derive(Debug, Deserialize)]
struct RecommendationTarget {
    mal_id: Option<i32>,
    title: Option<String>,
    url: Option<String>,
}

#[derive(Clone)]
pub struct JikanClient {
    client: Client,
    base_url: String,
}

impl JikanClient {
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: &str,
    ) -> Result<T, CatalogError> {
        debug!(endpoint, url, "Jikan request");
        metrics::counter!("catalog_requests_total", "endpoint" => endpoint).increment(1);

        let result = self.fetch(url).await;
        if result.is_err() {
            metrics::counter!("catalog_request_failures_total", "endpoint" => endpoint)
                .increment(1);
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let response: JikanResponse<T> =
            serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(response.data)
    }
}

#[async_trait::async_trait]
impl CatalogClient for JikanClient {
    async fn search_by_query(&self, query: &str, limit: usize) -> Result<Vec<Anime>, CatalogError> {
        let url = format!(
            "{}/anime?q={}&limit={}&sfw=true",
            self.base_url,
            urlencoding::encode(query),
            limit
        );
        self.get_data("search", &url).await
    }

    async fn get_by_id(&self, id: i32) -> Result<Anime, CatalogError> {
        let url = format!("{}/anime/{}", self.base_url, id);
        match self.get_data("details", &url).await {
            Err(CatalogError::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(CatalogError::NotFound(id))
            }
            other => other,
        }
    }

    async fn search_by_genre(
        &self,
        genre_id: i32,
        limit: usize,
    ) -> Result<Vec<Anime>, CatalogError> {
        let url = format!(
            "{}/anime?genres={}&limit={}&sfw=true&order_by=score&sort=desc",
            self.base_url, genre_id, limit
        );
        self.get_data("genre", &url).await
    }

    async fn get_curated_similar(&self, id: i32) -> Result<Vec<AnimeReference>, CatalogError> {
        let url = format!("{}/anime/{}/recommendations", self.base_url, id);
        let entries: Vec<RecommendationEntry> = self.get_data("recommendations", &url).await?;

        Ok(entries
            .into_iter()
            .map(|e| match e.entry {
                Some(target) => AnimeReference {
                    mal_id: target.mal_id.unwrap_or_default(),
                    title: target.title,
                    url: target.url,
                },
                None => AnimeReference::new(0),
            })
            .collect())
    }

    async fn get_top_ranked(&self, limit: usize) -> Result<Vec<Anime>, CatalogError> {
        let url = format!("{}/top/anime?limit={}&sfw=true", self.base_url, limit);
        self.get_data("top", &url).await
    }
}
