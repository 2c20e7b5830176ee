//! HTTP handlers
//!
//! Axum request handlers for the HTML pages and the JSON API.

pub mod blogs;
pub mod contact;
pub mod debug;
pub mod feeds;
pub mod gallery;
pub mod image_proxy;
pub mod newsletter;
pub mod pages;
pub mod spotify;

pub use blogs::get_blogs;
pub use contact::send_message;
pub use debug::{notion_status, slug_report};
pub use feeds::{rss_feed, sitemap};
pub use gallery::get_gallery;
pub use image_proxy::image_proxy;
pub use newsletter::{subscribe, subscriber_count};
pub use pages::{
    about, blog_archive, blog_index, blog_post, contact_page, gallery_page, home, not_found,
    portfolio_item_page, portfolio_page, resume,
};
pub use spotify::now_playing;
