//! Remote document store adapters

mod rest;

pub use rest::{RestContactStore, RestRoleStore};
