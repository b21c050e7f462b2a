//! Account owner value object.
//!
//! The slice of the user record the money-movement core needs: a display
//! name and the contact address notifications go to.

use serde::{Deserialize, Serialize};

use super::email::Email;

/// The holder of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    name: String,
    email: Email,
}

impl Owner {
    /// Creates a new `Owner`.
    #[must_use]
    pub const fn new(name: String, email: Email) -> Self {
        Self { name, email }
    }

    /// Returns the owner's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owner's contact address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }
}
