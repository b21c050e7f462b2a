//! Account ID value object.
//!
//! Provides a strongly-typed identifier for accounts using UUID v7 format.
//! UUID v7 is time-ordered, which is beneficial for database indexing and
//! chronological ordering of accounts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for `AccountId`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The provided string is not a valid UUID format.
    #[error("Invalid UUID format: {0}")]
    InvalidUuidFormat(String),
}

/// A unique identifier for an account.
///
/// `AccountId` uses UUID v7 format, which is time-ordered and suitable for
/// database primary keys. It provides:
///
/// - **Type safety**: prevents accidental mixing of different ID types
/// - **Smart constructor**: validates input before construction
/// - **Time ordering**: UUID v7 is chronologically sortable
///
/// # Examples
///
/// ```rust
/// use teller::domain::value_objects::AccountId;
///
/// // Generate a new account ID
/// let id = AccountId::generate();
///
/// // Create from a string (validated)
/// let parsed = AccountId::parse("01234567-89ab-cdef-0123-456789abcdef");
/// assert!(parsed.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Creates a new `AccountId` from a string representation.
    ///
    /// This is a smart constructor that validates the input string is a
    /// valid UUID.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidUuidFormat` if the string is not a
    /// valid UUID.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Uuid::from_str(value)
            .map(Self)
            .map_err(|_| ValidationError::InvalidUuidFormat(value.to_string()))
    }

    /// Generates a new `AccountId` using UUID v7.
    ///
    /// UUID v7 is time-ordered, meaning IDs generated later will sort after
    /// IDs generated earlier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<Uuid> for AccountId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
