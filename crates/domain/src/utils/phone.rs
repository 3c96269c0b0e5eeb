//! Pure phone number helpers
//!
//! Phone numbers are stored as fixed-length numeric strings and only
//! formatted at display time.

use crate::constants::PHONE_DIGITS;

/// True when `value` is exactly nine ASCII digits.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// Format a stored phone number for display.
///
/// Nine-digit numbers are grouped as `"XXX XXX XXX"`; anything else is
/// passed through unchanged.
///
/// # Examples
///
/// ```
/// use rolodex_domain::format_phone;
///
/// assert_eq!(format_phone("612345678"), "612 345 678");
/// assert_eq!(format_phone("not-a-phone"), "not-a-phone");
/// ```
#[must_use]
pub fn format_phone(value: &str) -> String {
    if !is_valid_phone(value) {
        return value.to_string();
    }
    format!("{} {} {}", &value[0..3], &value[3..6], &value[6..9])
}
