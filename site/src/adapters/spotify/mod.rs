//! Spotify music-streaming adapter

pub mod client;

pub use client::SpotifyClient;
