//! HTTP client plumbing for the remote document store

mod client;

pub use client::{HttpClient, HttpClientBuilder};
