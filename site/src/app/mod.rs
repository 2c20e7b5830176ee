//! Application layer
//!
//! Services coordinate between domain entities, ports, and external systems.

pub mod contact_service;
pub mod content_service;
pub mod mock_content;
pub mod newsletter_service;
pub mod text;

pub use contact_service::ContactService;
pub use content_service::{ContentService, ContentSources};
pub use newsletter_service::NewsletterService;
pub use text::slugify;
