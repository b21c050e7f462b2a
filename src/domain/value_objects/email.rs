//! Email address value object.
//!
//! The contact address notifications are sent to. Validation is intentionally
//! shallow: one `@` separating non-empty local and domain parts, no
//! whitespace. Full RFC 5322 validation belongs to the delivery transport.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for `Email`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// The provided string is not a plausible email address.
    #[error("Invalid email address: {0}")]
    Invalid(String),
}

/// A validated email address.
///
/// # Examples
///
/// ```rust
/// use teller::domain::value_objects::Email;
///
/// let email = Email::parse("alice@example.com").unwrap();
/// assert_eq!(email.as_str(), "alice@example.com");
///
/// assert!(Email::parse("no-at-sign").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Creates a new `Email` from a string representation.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Invalid` if the string does not contain exactly
    /// one `@` with non-empty parts on both sides, or contains whitespace.
    pub fn parse(value: &str) -> Result<Self, EmailError> {
        let trimmed = value.trim();

        match trimmed.split_once('@') {
            Some((local, domain))
                if !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !trimmed.contains(char::is_whitespace) =>
            {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(EmailError::Invalid(value.to_string())),
        }
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
