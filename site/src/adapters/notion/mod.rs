//! Notion CMS adapter

pub mod client;

pub use client::NotionHttpClient;
