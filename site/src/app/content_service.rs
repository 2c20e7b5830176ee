//! Content service
//!
//! Fetches posts, gallery images and portfolio items from the CMS and
//! normalizes the row shapes into domain entities. Every fetch degrades to
//! the static mock content instead of failing: a content site should render
//! placeholders, not error pages, when the CMS is missing or down.

use std::sync::Arc;

use chrono::Utc;

use crate::app::mock_content::{mock_gallery_images, mock_portfolio_items, mock_posts};
use crate::app::text::{estimate_read_time, slugify};
use crate::domain::entities::{ExifInfo, GalleryImage, PortfolioItem, Post};
use crate::domain::ports::{NotionApi, NotionPage};
use crate::error::NotionError;

/// Database ids for the three content collections; any of them may be absent.
#[derive(Clone, Default)]
pub struct ContentSources {
    pub posts: Option<String>,
    pub gallery: Option<String>,
    pub portfolio: Option<String>,
}

/// Service for fetching and normalizing CMS content
pub struct ContentService<N: NotionApi> {
    notion: Arc<N>,
    sources: ContentSources,
    configured: bool,
}

impl<N: NotionApi> ContentService<N> {
    pub fn new(notion: Arc<N>, sources: ContentSources, configured: bool) -> Self {
        Self {
            notion,
            sources,
            configured,
        }
    }

    pub fn configured(&self) -> bool {
        self.configured
    }

    /// All posts, newest first. Mock posts when the CMS is unconfigured or
    /// the fetch fails.
    pub async fn all_posts(&self) -> Vec<Post> {
        let database_id = match (&self.sources.posts, self.configured) {
            (Some(id), true) => id,
            _ => {
                tracing::debug!("Notion not configured, serving mock posts");
                return mock_posts();
            }
        };

        match self.notion.query_database(database_id, true).await {
            Ok(pages) => pages.iter().map(format_post).collect(),
            Err(e) => {
                tracing::warn!("Failed to fetch posts, falling back to mock data: {}", e);
                mock_posts()
            }
        }
    }

    /// Find a post by slug. Posts without a stored slug are matched through
    /// their title converted to a slug, so `/blog/light-studies` resolves a
    /// row titled "Light Studies".
    pub async fn post_by_slug(&self, slug: &str) -> Option<Post> {
        self.all_posts()
            .await
            .into_iter()
            .find(|post| post.slug == slug || slugify(&post.title) == slug)
    }

    /// All gallery images, newest first. Rows without an image URL are
    /// dropped.
    pub async fn gallery_images(&self) -> Vec<GalleryImage> {
        let database_id = match (&self.sources.gallery, self.configured) {
            (Some(id), true) => id,
            _ => {
                tracing::debug!("Notion not configured, serving mock gallery");
                return mock_gallery_images();
            }
        };

        match self.notion.query_database(database_id, true).await {
            Ok(pages) => pages.iter().filter_map(format_gallery_image).collect(),
            Err(e) => {
                tracing::warn!("Failed to fetch gallery, falling back to mock data: {}", e);
                mock_gallery_images()
            }
        }
    }

    pub async fn portfolio_items(&self) -> Vec<PortfolioItem> {
        let database_id = match (&self.sources.portfolio, self.configured) {
            (Some(id), true) => id,
            _ => {
                tracing::debug!("Notion not configured, serving mock portfolio");
                return mock_portfolio_items();
            }
        };

        match self.notion.query_database(database_id, true).await {
            Ok(pages) => pages.iter().map(format_portfolio_item).collect(),
            Err(e) => {
                tracing::warn!("Failed to fetch portfolio, falling back to mock data: {}", e);
                mock_portfolio_items()
            }
        }
    }

    pub async fn portfolio_item(&self, id: &str) -> Option<PortfolioItem> {
        self.portfolio_items()
            .await
            .into_iter()
            .find(|item| item.id == id)
    }

    /// Raw post rows for the debug endpoints. Unlike the render paths this
    /// does surface errors.
    pub async fn raw_posts(&self) -> Result<Vec<NotionPage>, NotionError> {
        match &self.sources.posts {
            Some(id) => self.notion.query_database(id, true).await,
            None => Ok(Vec::new()),
        }
    }
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Excerpt fallback: the first 200 characters of the content.
fn excerpt_from_content(content: &str) -> String {
    if content.chars().count() <= 200 {
        content.to_string()
    } else {
        let head: String = content.chars().take(200).collect();
        format!("{}...", head.trim_end())
    }
}

/// Normalize a CMS row into a post. Never fails; missing fields get the
/// documented defaults.
pub fn format_post(page: &NotionPage) -> Post {
    let title = page
        .title_text("Title")
        .unwrap_or_else(|| "Untitled".to_string());

    let raw_slug = page.rich_text("Slug").unwrap_or_else(|| title.clone());
    let slug = slugify(&raw_slug);

    // Prefer the full Content column; some databases grew alternates over
    // time. The excerpt is never used as body text.
    let content = ["Content", "Body", "Description", "Text"]
        .iter()
        .find_map(|key| page.rich_text(key))
        .unwrap_or_default();

    let excerpt = page
        .rich_text("Excerpt")
        .unwrap_or_else(|| excerpt_from_content(&content));

    let read_time = page
        .rich_text("ReadTime")
        .unwrap_or_else(|| estimate_read_time(&content));

    Post {
        id: page.id.clone(),
        title: title.clone(),
        slug,
        date: page.date_start("Date").unwrap_or_else(today),
        excerpt,
        content,
        category: page
            .select_name("Category")
            .unwrap_or_else(|| "Uncategorized".to_string()),
        read_time,
        image: page.file_url("Image"),
        featured: page.checkbox("Featured"),
        author: page
            .person_name("Author")
            .or_else(|| page.rich_text("Author"))
            .or_else(|| page.select_name("Author"))
            .unwrap_or_else(|| "Anonymous".to_string()),
        author_title: page
            .rich_text("AuthorTitle")
            .or_else(|| page.select_name("AuthorTitle"))
            .unwrap_or_else(|| "Content Creator".to_string()),
    }
}

/// Normalize a CMS row into a gallery image. Rows without a resolvable image
/// URL yield `None`.
pub fn format_gallery_image(page: &NotionPage) -> Option<GalleryImage> {
    let src = page.file_url("Image")?;

    let exif = ExifInfo {
        camera: page.rich_text("Camera"),
        lens: page.rich_text("Lens"),
        aperture: page.rich_text("Aperture"),
        shutter_speed: page.rich_text("ShutterSpeed"),
        iso: page.rich_text("ISO"),
        focal_length: page.rich_text("FocalLength"),
    };

    Some(GalleryImage {
        id: page.id.clone(),
        src,
        alt: page
            .rich_text("Alt")
            .or_else(|| page.rich_text("Description"))
            .unwrap_or_default(),
        name: page
            .title_text("Title")
            .or_else(|| page.rich_text("Name"))
            .unwrap_or_else(|| "Untitled".to_string()),
        date: page
            .date_start("Date")
            .or_else(|| page.created_date("Created"))
            .unwrap_or_else(today),
        place: page
            .rich_text("Location")
            .or_else(|| page.rich_text("Place"))
            .unwrap_or_else(|| "Unknown Location".to_string()),
        category: page
            .select_name("Category")
            .unwrap_or_else(|| "Photography".to_string()),
        featured: page.checkbox("Featured"),
        exif: if exif.is_empty() { None } else { Some(exif) },
    })
}

/// Normalize a CMS row into a portfolio item.
pub fn format_portfolio_item(page: &NotionPage) -> PortfolioItem {
    PortfolioItem {
        id: page.id.clone(),
        name: page
            .text("Title")
            .or_else(|| page.text("Name"))
            .unwrap_or_else(|| "Untitled".to_string()),
        description: page.rich_text("Description").unwrap_or_default(),
        category: page
            .select_name("Category")
            .unwrap_or_else(|| "Uncategorized".to_string()),
        image: page.file_url("Image"),
        place: page
            .rich_text("Location")
            .or_else(|| page.rich_text("Place"))
            .unwrap_or_default(),
        date: page
            .date_start("Date")
            .or_else(|| page.rich_text("Year"))
            .unwrap_or_default(),
        featured: page.checkbox("Featured"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::NotionPageBuilder;

    // ===== format_post tests =====

    #[test]
    fn empty_row_maps_to_documented_defaults() {
        let page = NotionPageBuilder::new("page-1").build();

        let post = format_post(&page);

        assert_eq!(post.id, "page-1");
        assert_eq!(post.title, "Untitled");
        assert_eq!(post.slug, "untitled");
        assert_eq!(post.category, "Uncategorized");
        assert_eq!(post.author, "Anonymous");
        assert_eq!(post.author_title, "Content Creator");
        assert_eq!(post.read_time, "1 min read");
        assert_eq!(post.excerpt, "");
        assert!(post.image.is_none());
        assert!(!post.featured);
        // Date defaults to today - just check the shape
        assert_eq!(post.date.len(), 10);
    }

    #[test]
    fn fully_populated_row_maps_all_fields() {
        let page = NotionPageBuilder::new("page-2")
            .title("Title", "Light Studies")
            .rich_text("Slug", "light-studies")
            .rich_text("Excerpt", "A short teaser.")
            .rich_text("Content", "The full body text.")
            .rich_text("ReadTime", "4 min read")
            .select("Category", "DESIGN")
            .date("Date", "2024-01-15")
            .checkbox("Featured", true)
            .file("Image", Some("https://cdn.example.com/light.jpg"), None)
            .person("Author", "Emir Duruduygu")
            .select("AuthorTitle", "Architectural Photographer")
            .build();

        let post = format_post(&page);

        assert_eq!(post.title, "Light Studies");
        assert_eq!(post.slug, "light-studies");
        assert_eq!(post.excerpt, "A short teaser.");
        assert_eq!(post.content, "The full body text.");
        assert_eq!(post.read_time, "4 min read");
        assert_eq!(post.category, "DESIGN");
        assert_eq!(post.date, "2024-01-15");
        assert!(post.featured);
        assert_eq!(post.image.as_deref(), Some("https://cdn.example.com/light.jpg"));
        assert_eq!(post.author, "Emir Duruduygu");
        assert_eq!(post.author_title, "Architectural Photographer");
    }

    #[test]
    fn slug_is_generated_from_the_title_when_absent() {
        let page = NotionPageBuilder::new("page-3")
            .title("Title", "Urban Planning: Trends for 2024!")
            .build();

        let post = format_post(&page);

        assert_eq!(post.slug, "urban-planning-trends-for-2024");
    }

    #[test]
    fn stored_slug_is_cleaned_before_use() {
        let page = NotionPageBuilder::new("page-4")
            .title("Title", "Whatever")
            .rich_text("Slug", "  My Messy Slug! ")
            .build();

        let post = format_post(&page);

        assert_eq!(post.slug, "my-messy-slug");
    }

    #[test]
    fn read_time_is_recomputed_from_content_when_missing() {
        let content = "word ".repeat(201);
        let page = NotionPageBuilder::new("page-5")
            .title("Title", "Long Read")
            .rich_text("Content", &content)
            .build();

        let post = format_post(&page);

        assert_eq!(post.read_time, "2 min read");
    }

    #[test]
    fn excerpt_falls_back_to_truncated_content() {
        let content = "x".repeat(300);
        let page = NotionPageBuilder::new("page-6")
            .title("Title", "No Excerpt")
            .rich_text("Content", &content)
            .build();

        let post = format_post(&page);

        assert!(post.excerpt.ends_with("..."));
        assert_eq!(post.excerpt.len(), 203);
    }

    #[test]
    fn content_falls_back_through_alternate_columns() {
        let page = NotionPageBuilder::new("page-7")
            .title("Title", "Alt Body")
            .rich_text("Body", "Stored under Body instead.")
            .build();

        let post = format_post(&page);

        assert_eq!(post.content, "Stored under Body instead.");
    }

    #[test]
    fn author_falls_back_from_people_to_text_to_select() {
        let page = NotionPageBuilder::new("page-8")
            .rich_text("Author", "Text Author")
            .build();
        assert_eq!(format_post(&page).author, "Text Author");

        let page = NotionPageBuilder::new("page-9")
            .select("Author", "Select Author")
            .build();
        assert_eq!(format_post(&page).author, "Select Author");
    }

    // ===== format_gallery_image tests =====

    #[test]
    fn gallery_rows_without_an_image_are_dropped() {
        let page = NotionPageBuilder::new("page-10")
            .title("Title", "No Image Here")
            .build();

        assert!(format_gallery_image(&page).is_none());
    }

    #[test]
    fn gallery_row_maps_with_defaults() {
        let page = NotionPageBuilder::new("page-11")
            .file("Image", Some("https://cdn.example.com/g.jpg"), None)
            .build();

        let image = format_gallery_image(&page).unwrap();

        assert_eq!(image.src, "https://cdn.example.com/g.jpg");
        assert_eq!(image.name, "Untitled");
        assert_eq!(image.place, "Unknown Location");
        assert_eq!(image.category, "Photography");
        assert_eq!(image.alt, "");
        assert!(image.exif.is_none());
    }

    #[test]
    fn gallery_exif_columns_are_collected() {
        let page = NotionPageBuilder::new("page-12")
            .title("Title", "With Exif")
            .file("Image", Some("https://cdn.example.com/e.jpg"), None)
            .rich_text("Camera", "Fujifilm X-T4")
            .rich_text("Aperture", "f/8")
            .rich_text("ISO", "200")
            .build();

        let image = format_gallery_image(&page).unwrap();
        let exif = image.exif.unwrap();

        assert_eq!(exif.camera.as_deref(), Some("Fujifilm X-T4"));
        assert_eq!(exif.aperture.as_deref(), Some("f/8"));
        assert_eq!(exif.iso.as_deref(), Some("200"));
        assert!(exif.lens.is_none());
    }

    #[test]
    fn gallery_date_falls_back_to_created_time() {
        let page = NotionPageBuilder::new("page-13")
            .file("Image", Some("https://cdn.example.com/c.jpg"), None)
            .created_time("Created", "2023-09-04T12:00:00.000Z")
            .build();

        let image = format_gallery_image(&page).unwrap();

        assert_eq!(image.date, "2023-09-04");
    }

    // ===== format_portfolio_item tests =====

    #[test]
    fn portfolio_row_maps_name_and_year() {
        let page = NotionPageBuilder::new("page-14")
            .title("Name", "Urban Geometries")
            .rich_text("Description", "A study of geometric forms.")
            .select("Category", "Architecture")
            .rich_text("Location", "Tokyo, Japan")
            .rich_text("Year", "2024")
            .build();

        let item = format_portfolio_item(&page);

        assert_eq!(item.name, "Urban Geometries");
        assert_eq!(item.description, "A study of geometric forms.");
        assert_eq!(item.category, "Architecture");
        assert_eq!(item.place, "Tokyo, Japan");
        assert_eq!(item.date, "2024");
    }
}
