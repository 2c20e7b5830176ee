//! Test utilities
//!
//! Hand-written fakes for the `NotionApi`, `Mailer`, and `MusicApi` ports,
//! plus builders for Notion page fixtures. The port traits are small enough
//! that in-memory implementations stay readable, and each fake offers a
//! `failing` variant for exercising upstream-error paths.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
