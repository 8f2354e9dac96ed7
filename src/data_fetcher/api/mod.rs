//! HTTP client and endpoint utilities

pub mod client;
pub mod endpoints;

pub use client::ApiClient;
