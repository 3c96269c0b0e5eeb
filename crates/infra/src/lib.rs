//! # Rolodex Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The REST adapters for the remote document store
//! - HTTP client plumbing
//! - Configuration loading
//! - Session identity and log-backed notifications
//! - Tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `rolodex-core`
//! - Depends on `rolodex-domain` and `rolodex-core`
//! - Contains all "impure" code (I/O, network)

pub mod config;
pub mod http;
pub mod notify;
pub mod session;
pub mod store;
pub mod telemetry;

// Re-export commonly used items
pub use http::HttpClient;
pub use notify::LogNotifier;
pub use session::SessionIdentity;
pub use store::{RestContactStore, RestRoleStore};
