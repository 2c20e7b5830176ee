//! Test fixtures
//!
//! Factory functions and builders for creating test data with sensible
//! defaults. Each fixture creates a valid value that tests can customize.

use crate::domain::entities::Post;
use crate::domain::ports::{
    NotionDate, NotionFile, NotionPage, NotionPerson, NotionProperty, NotionRichText,
    NotionSelect, NotionUrl,
};

/// Create a test post with default values
pub fn test_post() -> Post {
    Post {
        id: "test-post".to_string(),
        title: "Test Post".to_string(),
        slug: "test-post".to_string(),
        date: "2024-01-01".to_string(),
        excerpt: "A short teaser.".to_string(),
        content: "The full body text.".to_string(),
        category: "DESIGN".to_string(),
        read_time: "3 min read".to_string(),
        image: None,
        featured: false,
        author: "Test Author".to_string(),
        author_title: "Writer".to_string(),
    }
}

fn segment(text: &str) -> NotionRichText {
    NotionRichText {
        plain_text: text.to_string(),
    }
}

/// Builder for CMS rows, so tests can state just the properties they need.
pub struct NotionPageBuilder {
    page: NotionPage,
}

impl NotionPageBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            page: NotionPage {
                id: id.to_string(),
                properties: Default::default(),
            },
        }
    }

    fn property(&mut self, key: &str) -> &mut NotionProperty {
        self.page.properties.entry(key.to_string()).or_default()
    }

    pub fn title(mut self, key: &str, text: &str) -> Self {
        self.property(key).title = vec![segment(text)];
        self
    }

    pub fn title_segments(mut self, key: &str, segments: &[&str]) -> Self {
        self.property(key).title = segments.iter().map(|s| segment(s)).collect();
        self
    }

    pub fn rich_text(mut self, key: &str, text: &str) -> Self {
        self.property(key).rich_text = vec![segment(text)];
        self
    }

    pub fn select(mut self, key: &str, name: &str) -> Self {
        self.property(key).select = Some(NotionSelect {
            name: name.to_string(),
        });
        self
    }

    pub fn checkbox(mut self, key: &str, value: bool) -> Self {
        self.property(key).checkbox = Some(value);
        self
    }

    pub fn date(mut self, key: &str, start: &str) -> Self {
        self.property(key).date = Some(NotionDate {
            start: Some(start.to_string()),
        });
        self
    }

    pub fn file(mut self, key: &str, external: Option<&str>, file: Option<&str>) -> Self {
        let to_url = |url: &str| NotionUrl {
            url: url.to_string(),
        };
        self.property(key).files = vec![NotionFile {
            external: external.map(to_url),
            file: file.map(to_url),
        }];
        self
    }

    pub fn person(mut self, key: &str, name: &str) -> Self {
        self.property(key).people = vec![NotionPerson {
            name: Some(name.to_string()),
        }];
        self
    }

    pub fn created_time(mut self, key: &str, timestamp: &str) -> Self {
        self.property(key).created_time = Some(timestamp.to_string());
        self
    }

    pub fn build(self) -> NotionPage {
        self.page
    }
}
