//! Domain errors for account operations.
//!
//! Each variant carries the amounts involved so callers can report context,
//! while the `Display` text stays the short message the operation contract
//! promises.

use thiserror::Error;

use crate::domain::value_objects::Money;

/// Domain errors that can occur during account operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The account balance cannot cover the requested amount.
    #[error("Insufficient funds")]
    InsufficientFunds {
        /// The amount required for the operation.
        required: Money,
        /// The currently available balance.
        available: Money,
    },

    /// The deposit would push the account past its cumulative pay-in limit.
    #[error("Account pay in limit reached")]
    PayInLimitReached {
        /// The amount that was being paid in.
        attempted: Money,
        /// The cumulative total already paid in.
        paid_in: Money,
    },

    /// The provided amount is not a legal operation amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),
}

/// A type alias for domain operation results.
pub type DomainResult<T> = Result<T, DomainError>;
