//! HTTP client for the Notion API

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;

use super::types::{Block, PageObject, PaginatedList};
use crate::config::NotionConfig;

/// Errors surfaced by the content source
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("authentication rejected ({0})")]
    Auth(StatusCode),

    #[error("api error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

impl From<reqwest::Error> for NotionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NotionError::Timeout
        } else {
            NotionError::Network(err)
        }
    }
}

/// Client for the posts database and the block children endpoint
pub struct NotionClient {
    http: reqwest::Client,
    config: NotionConfig,
    token: String,
}

impl NotionClient {
    /// Create a client with the configured request timeout
    pub fn new(config: NotionConfig, token: String) -> Result<Self, NotionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            token,
        })
    }

    /// Query the posts database for published entries, newest first,
    /// following pagination to the end
    pub async fn query_database(&self) -> Result<Vec<PageObject>, NotionError> {
        let url = format!(
            "{}/databases/{}/query",
            self.config.api_base.trim_end_matches('/'),
            self.config.database_id
        );

        let mut results = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let body = query_body(&self.config, cursor.as_deref());
            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.token)
                .header("Notion-Version", &self.config.api_version)
                .json(&body)
                .send()
                .await?;

            let page: PaginatedList<PageObject> = decode(response).await?;
            results.extend(page.results);

            match page.next_cursor {
                Some(next) if page.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(results)
    }

    /// List the direct children of a block, following pagination
    pub async fn list_blocks(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        let url = format!(
            "{}/blocks/{}/children",
            self.config.api_base.trim_end_matches('/'),
            block_id
        );

        let mut results = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = self
                .http
                .get(&url)
                .bearer_auth(&self.token)
                .header("Notion-Version", &self.config.api_version);
            if let Some(cursor) = &cursor {
                request = request.query(&[("start_cursor", cursor.as_str())]);
            }

            let response = request.send().await?;
            let page: PaginatedList<Block> = decode(response).await?;
            results.extend(page.results);

            match page.next_cursor {
                Some(next) if page.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(results)
    }
}

/// Build the database query body: published entries only, newest first
fn query_body(config: &NotionConfig, cursor: Option<&str>) -> Value {
    let mut body = json!({
        "filter": {
            "property": config.status_property,
            "select": { "equals": config.published_status }
        },
        "sorts": [{
            "property": config.date_property,
            "direction": "descending"
        }]
    });

    if let Some(cursor) = cursor {
        body["start_cursor"] = json!(cursor);
    }

    body
}

/// Check the response status and decode the body
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, NotionError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(NotionError::Auth(status));
    }
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(NotionError::Api { status, message });
    }

    Ok(response.json::<T>().await?)
}
