//! Shared test support for directory integration tests

pub mod stores;

use rolodex_domain::{Contact, ContactCategory, ContactDraft};

/// Build a stored contact owned by `owner_id`.
pub fn contact(id: &str, owner_id: &str, email: &str, phone: &str, created_at: i64) -> Contact {
    Contact {
        id: Some(id.to_string()),
        owner_id: owner_id.to_string(),
        first_name: "Test".into(),
        last_name: format!("Contact{id}"),
        email: email.into(),
        phone: phone.into(),
        category: ContactCategory::Other,
        photo_url: None,
        created_at,
        updated_at: None,
    }
}

/// Build a valid creation draft.
pub fn draft(email: &str, phone: &str) -> ContactDraft {
    ContactDraft {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: email.into(),
        phone: phone.into(),
        category: ContactCategory::Work,
        photo_url: None,
    }
}
