//! Notion REST API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::domain::ports::{NotionApi, NotionPage};
use crate::error::NotionError;

const NOTION_API_BASE: &str = "https://api.notion.com/v1";
/// Pinned API revision; property shapes change between versions.
const NOTION_VERSION: &str = "2022-06-28";

/// Implementation of the Notion read API
pub struct NotionHttpClient {
    http: Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<NotionPage>,
    #[serde(default)]
    has_more: bool,
    next_cursor: Option<String>,
}

impl NotionHttpClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, NOTION_API_BASE.to_string())
    }

    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, NotionError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| NotionError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(NotionError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(NotionError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(NotionError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl NotionApi for NotionHttpClient {
    async fn query_database(
        &self,
        database_id: &str,
        sort_by_date_desc: bool,
    ) -> Result<Vec<NotionPage>, NotionError> {
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        // The query endpoint caps results at 100 rows per call; follow the
        // cursor so large galleries are not silently truncated.
        loop {
            let mut body = json!({});
            if sort_by_date_desc {
                body["sorts"] = json!([{ "property": "Date", "direction": "descending" }]);
            }
            if let Some(ref c) = cursor {
                body["start_cursor"] = json!(c);
            }

            let response = self
                .http
                .post(self.api_url(&format!("/databases/{}/query", database_id)))
                .bearer_auth(&self.token)
                .header("Notion-Version", NOTION_VERSION)
                .json(&body)
                .send()
                .await?;

            let page: QueryResponse = self.handle_response(response).await?;
            pages.extend(page.results);

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        Ok(pages)
    }
}
