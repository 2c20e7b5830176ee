//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod notion;
pub mod resend;
pub mod spotify;

pub use notion::NotionHttpClient;
pub use resend::ResendClient;
pub use spotify::SpotifyClient;
