//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod mailer;
pub mod music;
pub mod notion;

pub use mailer::Mailer;
pub use music::{MusicApi, TrackInfo};
pub use notion::{
    NotionApi, NotionDate, NotionFile, NotionPage, NotionPerson, NotionProperty, NotionRichText,
    NotionSelect, NotionUrl,
};
