//! Pure helper functions shared across the workspace

pub mod phone;
