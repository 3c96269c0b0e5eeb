//! Duplicate detection for contact creation
//!
//! Blocks creation of a contact whose email or phone already exists for
//! the same owner. Email comparison is case-insensitive, phone comparison
//! is exact. A record equal to `exclude_id` never conflicts, so an edit
//! cannot collide with itself.

use rolodex_domain::Contact;

/// Outcome of a duplicate check
#[derive(Debug, Clone, PartialEq)]
pub enum DuplicateCheck {
    NoConflict,
    /// An existing record already uses the candidate email
    EmailConflict(Contact),
    /// An existing record already uses the candidate phone
    PhoneConflict(Contact),
    /// One single record matches on both fields
    BothConflict(Contact),
}

impl DuplicateCheck {
    pub fn is_conflict(&self) -> bool {
        !matches!(self, Self::NoConflict)
    }

    /// Human-readable description of the conflict, naming the existing
    /// record. `NoConflict` yields `None`.
    pub fn describe(&self) -> Option<String> {
        match self {
            Self::NoConflict => None,
            Self::EmailConflict(existing) => Some(format!(
                "a contact with this email already exists: {} ({})",
                existing.display_name(),
                existing.email
            )),
            Self::PhoneConflict(existing) => Some(format!(
                "a contact with this phone number already exists: {} ({})",
                existing.display_name(),
                existing.phone
            )),
            Self::BothConflict(existing) => Some(format!(
                "a contact with this email and phone number already exists: {}",
                existing.display_name()
            )),
        }
    }
}

/// Check a candidate email/phone pair against an owner's contact list.
///
/// Only the first email match and the first phone match in list order are
/// considered. `Both` is reported when those two are the same record; when
/// they are different records the email conflict wins.
///
/// Pure function over its inputs.
pub fn check_duplicates(
    email: &str,
    phone: &str,
    existing: &[Contact],
    exclude_id: Option<&str>,
) -> DuplicateCheck {
    let candidate_email = email.to_lowercase();

    let considered = existing.iter().filter(|contact| match (&contact.id, exclude_id) {
        (Some(id), Some(excluded)) => id != excluded,
        _ => true,
    });

    let mut email_match: Option<&Contact> = None;
    let mut phone_match: Option<&Contact> = None;

    for contact in considered {
        if email_match.is_none() && contact.email.to_lowercase() == candidate_email {
            email_match = Some(contact);
        }
        if phone_match.is_none() && contact.phone == phone {
            phone_match = Some(contact);
        }
        if email_match.is_some() && phone_match.is_some() {
            break;
        }
    }

    match (email_match, phone_match) {
        (Some(by_email), Some(by_phone)) if std::ptr::eq(by_email, by_phone) => {
            DuplicateCheck::BothConflict(by_email.clone())
        }
        (Some(by_email), _) => DuplicateCheck::EmailConflict(by_email.clone()),
        (None, Some(by_phone)) => DuplicateCheck::PhoneConflict(by_phone.clone()),
        (None, None) => DuplicateCheck::NoConflict,
    }
}
