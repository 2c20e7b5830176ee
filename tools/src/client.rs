//! HTTP client for the Notion API
//!
//! A thin write-capable client for the batch tools. The site itself only
//! reads; the tools also patch page properties, so this client carries both
//! directions.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};

const NOTION_API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// HTTP client for communicating with the Notion API
#[derive(Clone)]
pub struct NotionClient {
    client: reqwest::Client,
    base_url: String,
}

impl NotionClient {
    /// Create a new client from environment variables
    ///
    /// Required env vars:
    /// - NOTION_TOKEN: Integration token with read and update access
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("NOTION_TOKEN")
            .context("NOTION_TOKEN not set. Create an integration and share the databases with it.")?;

        Self::new(&token)
    }

    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .context("Invalid token format")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("Notion-Version", HeaderValue::from_static(NOTION_VERSION));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: NOTION_API_BASE.to_string(),
        })
    }

    /// Fetch every page of a database, following cursor pagination.
    pub async fn query_database(&self, database_id: &str) -> Result<Vec<Value>> {
        let url = format!("{}/databases/{}/query", self.base_url, database_id);
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = json!({ "page_size": 100 });
            if let Some(cursor) = &cursor {
                body["start_cursor"] = json!(cursor);
            }

            let response = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .with_context(|| format!("Failed to query database {}", database_id))?;
            let payload = handle_response(response).await?;

            if let Some(results) = payload["results"].as_array() {
                pages.extend(results.iter().cloned());
            }

            if payload["has_more"].as_bool().unwrap_or(false) {
                cursor = payload["next_cursor"].as_str().map(String::from);
                if cursor.is_none() {
                    break;
                }
            } else {
                break;
            }
        }

        Ok(pages)
    }

    /// Patch properties on a page.
    pub async fn update_page(&self, page_id: &str, properties: Value) -> Result<()> {
        let url = format!("{}/pages/{}", self.base_url, page_id);

        let response = self
            .client
            .patch(&url)
            .json(&json!({ "properties": properties }))
            .send()
            .await
            .with_context(|| format!("Failed to update page {}", page_id))?;
        handle_response(response).await?;

        Ok(())
    }
}

async fn handle_response(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("Notion API error ({}): {}", status, body);
    }

    serde_json::from_str(&body).context("Failed to parse response body")
}

/// A rich-text property value containing a single plain segment.
pub fn rich_text_value(text: &str) -> Value {
    json!({ "rich_text": [{ "text": { "content": text } }] })
}

/// Plain text of a rich-text (or title) property on a raw page value.
pub fn plain_text(page: &Value, key: &str) -> Option<String> {
    let property = &page["properties"][key];
    let segments = property["rich_text"]
        .as_array()
        .or_else(|| property["title"].as_array())?;

    let text: String = segments
        .iter()
        .filter_map(|s| s["plain_text"].as_str())
        .collect();
    let text = text.trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_joins_segments() {
        let page = json!({
            "properties": {
                "Name": { "title": [
                    { "plain_text": "Concrete " },
                    { "plain_text": "Dreams" }
                ]}
            }
        });

        assert_eq!(plain_text(&page, "Name").as_deref(), Some("Concrete Dreams"));
        assert_eq!(plain_text(&page, "Missing"), None);
    }

    #[test]
    fn rich_text_value_wraps_the_content() {
        let value = rich_text_value("8 min read");

        assert_eq!(
            value["rich_text"][0]["text"]["content"],
            json!("8 min read")
        );
    }
}
