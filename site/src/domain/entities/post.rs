//! Blog post domain entity
//!
//! A post is a read-only CMS row: fetched for a request, rendered, discarded.

use serde::{Deserialize, Serialize};

/// A blog post as rendered on the site and returned by `/api/blogs`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// CMS page id (or "mock-N" for fallback content)
    pub id: String,
    pub title: String,
    /// URL-safe slug, derived from the title when the CMS row has none
    pub slug: String,
    /// Publication date, YYYY-MM-DD
    pub date: String,
    /// Short teaser shown on list pages
    pub excerpt: String,
    /// Full plain-text body
    pub content: String,
    pub category: String,
    /// Estimated reading time, e.g. "6 min read"
    pub read_time: String,
    pub image: Option<String>,
    pub featured: bool,
    pub author: String,
    pub author_title: String,
}

impl Post {
    /// Year component of the publication date, for the archive page.
    pub fn year(&self) -> &str {
        self.date.split('-').next().unwrap_or(&self.date)
    }
}
