//! Store profile types.

use serde::Serialize;
use std::fmt;

/// A WhatsApp contact number, digits only and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Build a contact number by stripping every non-digit character.
    ///
    /// Returns `None` when no digits remain, so a blank or junk profile
    /// field never produces a dialable-looking number.
    pub fn sanitize(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            None
        } else {
            Some(Self(digits))
        }
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The merchant profile behind a published catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreProfile {
    /// Store display name.
    pub name: String,
    /// WhatsApp contact, absent when the merchant has not configured one.
    contact: Option<ContactNumber>,
}

impl StoreProfile {
    /// Create a profile, sanitizing the contact field.
    pub fn new(name: impl Into<String>, contact: Option<&str>) -> Self {
        Self {
            name: name.into(),
            contact: contact.and_then(ContactNumber::sanitize),
        }
    }

    /// Get the WhatsApp contact, if configured.
    pub fn contact(&self) -> Option<&ContactNumber> {
        self.contact.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_formatting() {
        let contact = ContactNumber::sanitize("+62 812-3456-7890").unwrap();
        assert_eq!(contact.as_str(), "6281234567890");
    }

    #[test]
    fn test_sanitize_rejects_no_digits() {
        assert!(ContactNumber::sanitize("").is_none());
        assert!(ContactNumber::sanitize("call me").is_none());
    }

    #[test]
    fn test_profile_contact() {
        let store = StoreProfile::new("Test Store", Some("1234567890"));
        assert_eq!(store.contact().map(ContactNumber::as_str), Some("1234567890"));

        let store = StoreProfile::new("Test Store", None);
        assert!(store.contact().is_none());

        let store = StoreProfile::new("Test Store", Some("n/a"));
        assert!(store.contact().is_none());
    }
}
