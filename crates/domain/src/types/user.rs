//! User profile types
//!
//! Profile record kept in the remote user collection, synced from the
//! identity provider at registration time.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// A registered user's profile record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identifier assigned by the identity provider
    pub uid: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    pub photo_url: Option<String>,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds of the most recent sign-in
    pub last_login: Option<i64>,
}
