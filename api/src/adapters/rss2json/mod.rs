//! rss2json adapter
//!
//! Feed proxy backed by the public rss2json conversion API.

pub mod client;

pub use client::Rss2JsonClient;
