use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const MYMEMORY_API: &str = "https://api.mymemory.translated.net";

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Translation service returned status {0}")]
    Status(u16),

    #[error("Translation service returned no text")]
    Empty,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: Option<ResponseData>,
    #[serde(default)]
    response_status: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    translated_text: Option<String>,
}

impl MyMemoryResponse {
    // the API reports its status as either a number or a numeric string
    fn status(&self) -> Option<u16> {
        match &self.response_status {
            serde_json::Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Client for the free MyMemory translation API.
#[derive(Clone)]
pub struct MyMemoryClient {
    client: Client,
    base_url: String,
}

impl MyMemoryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TranslationError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let url = format!(
            "{}/get?q={}&langpair={}|{}",
            self.base_url,
            urlencoding::encode(text),
            source,
            target
        );
        debug!(source, target, chars = text.chars().count(), "MyMemory request");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(TranslationError::Status(response.status().as_u16()));
        }

        let body: MyMemoryResponse = response.json().await?;
        parse_response(body)
    }
}

fn parse_response(body: MyMemoryResponse) -> Result<String, TranslationError> {
    match body.status() {
        Some(200) => {}
        Some(status) => return Err(TranslationError::Status(status)),
        None => return Err(TranslationError::Empty),
    }

    body.response_data
        .and_then(|d| d.translated_text)
        .filter(|t| !t.trim().is_empty())
        .map(|t| html_escape::decode_html_entities(&t).to_string())
        .ok_or(TranslationError::Empty)
}
