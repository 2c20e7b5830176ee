//! Notion API port trait
//!
//! Defines the interface for querying the hosted CMS, along with a model of
//! the row ("page") shape its API returns. Property access never panics:
//! every variant field is optional and the accessors collapse missing pieces
//! to `None`, mirroring how the site treats half-filled CMS rows.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::NotionError;

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A rich-text segment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionRichText {
    #[serde(default)]
    pub plain_text: String,
}

/// A select-property value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionSelect {
    #[serde(default)]
    pub name: String,
}

/// A date-property value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionDate {
    pub start: Option<String>,
}

/// A hosted or external file reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionFile {
    pub external: Option<NotionUrl>,
    pub file: Option<NotionUrl>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionUrl {
    #[serde(default)]
    pub url: String,
}

/// A person-property value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionPerson {
    pub name: Option<String>,
}

/// One property value on a CMS row. The API tags values with a `type` field
/// and fills exactly one of the variant fields; modelling them all as
/// optional lets a single struct absorb any column shape without failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionProperty {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: Vec<NotionRichText>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub rich_text: Vec<NotionRichText>,
    pub select: Option<NotionSelect>,
    pub checkbox: Option<bool>,
    pub date: Option<NotionDate>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub files: Vec<NotionFile>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub people: Vec<NotionPerson>,
    pub created_time: Option<String>,
}

/// A CMS row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionPage {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, NotionProperty>,
}

impl NotionPage {
    fn property(&self, key: &str) -> Option<&NotionProperty> {
        self.properties.get(key)
    }

    /// Concatenated plain text of a title property, `None` when empty
    pub fn title_text(&self, key: &str) -> Option<String> {
        self.property(key).and_then(|p| join_plain_text(&p.title))
    }

    /// Concatenated plain text of a rich-text property, `None` when empty
    pub fn rich_text(&self, key: &str) -> Option<String> {
        self.property(key)
            .and_then(|p| join_plain_text(&p.rich_text))
    }

    /// Plain text regardless of whether the column is a title or rich text
    pub fn text(&self, key: &str) -> Option<String> {
        self.title_text(key).or_else(|| self.rich_text(key))
    }

    pub fn select_name(&self, key: &str) -> Option<String> {
        self.property(key)
            .and_then(|p| p.select.as_ref())
            .map(|s| s.name.clone())
            .filter(|name| !name.is_empty())
    }

    pub fn checkbox(&self, key: &str) -> bool {
        self.property(key)
            .and_then(|p| p.checkbox)
            .unwrap_or(false)
    }

    pub fn date_start(&self, key: &str) -> Option<String> {
        self.property(key)
            .and_then(|p| p.date.as_ref())
            .and_then(|d| d.start.clone())
            .filter(|start| !start.is_empty())
    }

    /// URL of the first file in a files property, preferring external links
    pub fn file_url(&self, key: &str) -> Option<String> {
        let file = self.property(key).and_then(|p| p.files.first())?;
        file.external
            .as_ref()
            .or(file.file.as_ref())
            .map(|u| u.url.clone())
            .filter(|url| !url.is_empty())
    }

    pub fn person_name(&self, key: &str) -> Option<String> {
        self.property(key)
            .and_then(|p| p.people.first())
            .and_then(|person| person.name.clone())
            .filter(|name| !name.is_empty())
    }

    /// Date part (YYYY-MM-DD) of a created-time property
    pub fn created_date(&self, key: &str) -> Option<String> {
        self.property(key)
            .and_then(|p| p.created_time.as_ref())
            .map(|t| t.split('T').next().unwrap_or(t).to_string())
            .filter(|date| !date.is_empty())
    }

    /// Names of all properties present on the row (debug endpoints)
    pub fn property_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.properties.keys().cloned().collect();
        names.sort();
        names
    }
}

fn join_plain_text(segments: &[NotionRichText]) -> Option<String> {
    if segments.is_empty() {
        return None;
    }
    let text = segments
        .iter()
        .map(|s| s.plain_text.as_str())
        .collect::<String>()
        .trim()
        .to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Port trait for the CMS read API
#[async_trait]
pub trait NotionApi: Send + Sync {
    /// Query every row of a database, optionally sorted by the `Date`
    /// property, newest first.
    async fn query_database(
        &self,
        database_id: &str,
        sort_by_date_desc: bool,
    ) -> Result<Vec<NotionPage>, NotionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::NotionPageBuilder;

    #[test]
    fn accessors_return_none_for_missing_properties() {
        let page = NotionPage {
            id: "page-1".to_string(),
            properties: HashMap::new(),
        };

        assert_eq!(page.title_text("Title"), None);
        assert_eq!(page.rich_text("Slug"), None);
        assert_eq!(page.select_name("Category"), None);
        assert!(!page.checkbox("Featured"));
        assert_eq!(page.date_start("Date"), None);
        assert_eq!(page.file_url("Image"), None);
        assert_eq!(page.person_name("Author"), None);
    }

    #[test]
    fn title_segments_are_concatenated() {
        let page = NotionPageBuilder::new("page-1")
            .title_segments("Title", &["Concrete ", "Dreams"])
            .build();

        assert_eq!(page.title_text("Title").as_deref(), Some("Concrete Dreams"));
        assert_eq!(page.text("Title").as_deref(), Some("Concrete Dreams"));
    }

    #[test]
    fn whitespace_only_rich_text_counts_as_missing() {
        let page = NotionPageBuilder::new("page-1")
            .rich_text("Slug", "   ")
            .build();

        assert_eq!(page.rich_text("Slug"), None);
    }

    #[test]
    fn file_url_prefers_external_over_hosted() {
        let page = NotionPageBuilder::new("page-1")
            .file("Image", Some("https://cdn.example.com/a.jpg"), Some("https://notion.so/b.jpg"))
            .build();

        assert_eq!(
            page.file_url("Image").as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn file_url_falls_back_to_hosted_file() {
        let page = NotionPageBuilder::new("page-1")
            .file("Image", None, Some("https://notion.so/b.jpg"))
            .build();

        assert_eq!(
            page.file_url("Image").as_deref(),
            Some("https://notion.so/b.jpg")
        );
    }

    #[test]
    fn created_date_strips_the_time_component() {
        let page = NotionPageBuilder::new("page-1")
            .created_time("Created", "2024-01-05T09:30:00.000Z")
            .build();

        assert_eq!(page.created_date("Created").as_deref(), Some("2024-01-05"));
    }

    #[test]
    fn page_deserializes_from_api_json() {
        let json = serde_json::json!({
            "id": "abc-123",
            "properties": {
                "Title": {
                    "type": "title",
                    "title": [{ "plain_text": "Light Studies", "href": null }]
                },
                "Category": {
                    "type": "select",
                    "select": { "name": "DESIGN", "color": "blue" }
                },
                "Featured": { "type": "checkbox", "checkbox": true },
                "Labels": { "type": "multi_select", "multi_select": [] }
            }
        });

        let page: NotionPage = serde_json::from_value(json).unwrap();

        assert_eq!(page.title_text("Title").as_deref(), Some("Light Studies"));
        assert_eq!(page.select_name("Category").as_deref(), Some("DESIGN"));
        assert!(page.checkbox("Featured"));
        // Unknown property types deserialize to an empty property
        assert_eq!(page.text("Labels"), None);
    }
}
