//! Thin HTTP wrapper for the upstream content source.

use reqwest::{Client, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::config::UpstreamSettings;

use super::error::UpstreamError;
use super::markdown;
use super::types::{BlockObject, PageObject, Paginated};

const QUERY_PAGE_SIZE: u32 = 100;

/// Authenticated client for the upstream page/database API.
#[derive(Clone)]
pub struct NotionClient {
    http: Client,
    base_url: String,
    database_id: String,
}

impl NotionClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, UpstreamError> {
        let mut headers = header::HeaderMap::new();
        let auth = format!("Bearer {}", settings.api_key);
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth).map_err(|err| {
                UpstreamError::Configuration(format!("invalid api key format: {err}"))
            })?,
        );
        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_str(&settings.version).map_err(|err| {
                UpstreamError::Configuration(format!("invalid upstream version: {err}"))
            })?,
        );

        let http = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            database_id: settings.database_id.clone(),
        })
    }

    /// Query the database for published pages, newest first.
    ///
    /// One paginated call, up to 100 results: the metadata fast path.
    pub async fn query_published(&self) -> Result<Vec<PageObject>, UpstreamError> {
        let url = format!("{}/databases/{}/query", self.base_url, self.database_id);
        debug!(target: "quill::notion", %url, "querying published pages");

        let body = json!({
            "page_size": QUERY_PAGE_SIZE,
            "filter": {
                "property": "Published",
                "checkbox": { "equals": true }
            },
            "sorts": [
                { "property": "Date", "direction": "descending" }
            ]
        });

        let response = self.http.post(&url).json(&body).send().await?;
        let page: Paginated<PageObject> = decode(response).await?;
        Ok(page.results)
    }

    /// Retrieve a single page's property bag.
    pub async fn retrieve_page(&self, id: &str) -> Result<PageObject, UpstreamError> {
        let url = format!("{}/pages/{}", self.base_url, id);
        debug!(target: "quill::notion", %url, "retrieving page");

        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    /// List a page's content blocks, following pagination to the end.
    pub async fn block_children(&self, id: &str) -> Result<Vec<BlockObject>, UpstreamError> {
        let url = format!("{}/blocks/{}/children", self.base_url, id);
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = self
                .http
                .get(&url)
                .query(&[("page_size", QUERY_PAGE_SIZE.to_string())]);
            if let Some(cursor) = cursor.as_ref() {
                request = request.query(&[("start_cursor", cursor.as_str())]);
            }

            let response = request.send().await?;
            let page: Paginated<BlockObject> = decode(response).await?;
            blocks.extend(page.results);

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        Ok(blocks)
    }

    /// Fetch a page's blocks and convert them to markdown.
    pub async fn page_markdown(&self, id: &str) -> Result<String, UpstreamError> {
        let blocks = self.block_children(id).await?;
        Ok(markdown::render_blocks(&blocks))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(UpstreamError::NotFound);
    }
    if !status.is_success() {
        return Err(UpstreamError::Status {
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| UpstreamError::Decode(err.to_string()))
}
