//! Contact record types
//!
//! A contact is exclusively scoped to one owner. Email and phone are unique
//! per owner among stored contacts; uniqueness is enforced at creation time
//! by the duplicate detector, not by the store.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_NAME_LENGTH;
use crate::errors::{Result, RolodexError};
use crate::utils::phone::is_valid_phone;

/// Category a contact belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactCategory {
    Family,
    Friend,
    Work,
    Other,
}

impl ContactCategory {
    /// All known categories, in display order
    pub const ALL: [Self; 4] = [Self::Family, Self::Friend, Self::Work, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Friend => "friend",
            Self::Work => "work",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact record as stored in the remote document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned identifier; absent until first persisted
    pub id: Option<String>,
    /// Owner the contact belongs to
    pub owner_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Fixed-length numeric string (see [`crate::constants::PHONE_DIGITS`])
    pub phone: String,
    pub category: ContactCategory,
    /// Opaque reference into blob storage
    pub photo_url: Option<String>,
    /// Epoch milliseconds, assigned at creation
    pub created_at: i64,
    /// Epoch milliseconds, set on every patch
    pub updated_at: Option<i64>,
}

impl Contact {
    /// Full display name, used in notifications and conflict messages
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input for creating a new contact
///
/// Owner and timestamps are assigned by the directory, not the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub category: ContactCategory,
    pub photo_url: Option<String>,
}

impl ContactDraft {
    /// Validate the draft against the form rules.
    ///
    /// Names must be at least two characters, the email must look like an
    /// address, and the phone must be exactly nine ASCII digits.
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().chars().count() < MIN_NAME_LENGTH {
            return Err(RolodexError::InvalidInput("first name is too short".into()));
        }
        if self.last_name.trim().chars().count() < MIN_NAME_LENGTH {
            return Err(RolodexError::InvalidInput("last name is too short".into()));
        }
        if !looks_like_email(&self.email) {
            return Err(RolodexError::InvalidInput(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }
        if !is_valid_phone(&self.phone) {
            return Err(RolodexError::InvalidInput(format!(
                "'{}' is not a valid phone number",
                self.phone
            )));
        }
        Ok(())
    }

    /// Materialize the draft into a contact owned by `owner_id`.
    pub fn into_contact(self, owner_id: String, created_at: i64) -> Contact {
        Contact {
            id: None,
            owner_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            category: self.category,
            photo_url: self.photo_url,
            created_at,
            updated_at: None,
        }
    }
}

/// Partial update for a contact
///
/// An explicit, enumerated set of patchable fields. Anything not listed here
/// cannot be written through the directory, which rules out accidental
/// writes of owner or creation metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ContactCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Stamped by the directory when the patch is applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl ContactPatch {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.category.is_none()
            && self.photo_url.is_none()
    }

    /// Apply the patch to a contact in place.
    ///
    /// Used by in-memory store implementations; remote stores apply the
    /// serialized patch server-side.
    pub fn apply(&self, contact: &mut Contact) {
        if let Some(first_name) = &self.first_name {
            contact.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            contact.last_name = last_name.clone();
        }
        if let Some(email) = &self.email {
            contact.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            contact.phone = phone.clone();
        }
        if let Some(category) = self.category {
            contact.category = category;
        }
        if let Some(photo_url) = &self.photo_url {
            contact.photo_url = Some(photo_url.clone());
        }
        if let Some(updated_at) = self.updated_at {
            contact.updated_at = Some(updated_at);
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
