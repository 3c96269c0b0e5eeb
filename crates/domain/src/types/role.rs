//! Roles and capabilities
//!
//! A role is loaded once per sign-in from the user's profile record and
//! maps to a fixed capability set. Unknown or unresolved roles always fall
//! back to the most restrictive role, `Visitor`.

use serde::{Deserialize, Serialize};

/// Role a signed-in user holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    #[default]
    Visitor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Visitor => "visitor",
        }
    }

    /// Parse a stored role string, defaulting to `Visitor` for anything
    /// unrecognized.
    pub fn parse_or_visitor(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            "user" => Self::User,
            _ => Self::Visitor,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named permission checked before an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Create,
    Edit,
    Delete,
    ViewAll,
    ManageUsers,
}

/// Fixed capability set a role maps to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermissions {
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_view_all: bool,
    pub can_manage_users: bool,
}

impl RolePermissions {
    /// Point query against the capability set
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::Create => self.can_create,
            Capability::Edit => self.can_edit,
            Capability::Delete => self.can_delete,
            Capability::ViewAll => self.can_view_all,
            Capability::ManageUsers => self.can_manage_users,
        }
    }
}
