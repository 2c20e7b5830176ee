//! Resend email-provider adapter

pub mod client;

pub use client::ResendClient;
