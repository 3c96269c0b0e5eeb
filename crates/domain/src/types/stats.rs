//! Aggregate statistics over a contact list
//!
//! Pure aggregation used by the statistics view; the directory composes
//! this with its cached read path.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::contact::{Contact, ContactCategory};

/// Per-owner contact statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactStatistics {
    /// Total number of contacts
    pub total: usize,
    /// Count per category; categories with no contacts are omitted
    pub by_category: HashMap<ContactCategory, usize>,
}

impl ContactStatistics {
    /// Aggregate a contact list.
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        let mut by_category: HashMap<ContactCategory, usize> = HashMap::new();
        for contact in contacts {
            *by_category.entry(contact.category).or_insert(0) += 1;
        }
        Self { total: contacts.len(), by_category }
    }

    /// Count for one category, zero when absent.
    pub fn count(&self, category: ContactCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}
