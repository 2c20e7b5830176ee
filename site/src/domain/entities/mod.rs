//! Domain entities
//!
//! Pure domain models for the content the site renders. All of them are
//! read-only at request time: fetched (or pulled from mock data), rendered,
//! discarded.

pub mod gallery;
pub mod now_playing;
pub mod portfolio;
pub mod post;

pub use gallery::{ExifInfo, GalleryImage};
pub use now_playing::NowPlaying;
pub use portfolio::PortfolioItem;
pub use post::Post;
