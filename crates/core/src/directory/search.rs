//! In-memory contact search
//!
//! Filtering happens client-side over the cached list, so searching never
//! issues extra store queries.

use rolodex_domain::Contact;

/// Case-insensitive substring match over name, email, phone, and category.
///
/// An empty or whitespace-only query matches everything.
pub fn matches_query(contact: &Contact, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contact.display_name().to_lowercase().contains(&needle)
        || contact.email.to_lowercase().contains(&needle)
        || contact.phone.contains(&needle)
        || contact.category.as_str().contains(&needle)
}
