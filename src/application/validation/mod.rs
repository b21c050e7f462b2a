//! Input validation for the money-movement workflows.
//!
//! Validators are pure functions over already-typed values: they run before
//! any account state is consulted, so a bad request never costs a repository
//! round trip.

use crate::domain::account::errors::{DomainError, DomainResult};
use crate::domain::value_objects::Money;

/// Validates an operation amount.
///
/// Negative amounts are rejected outright: a negative withdrawal would
/// increase the balance and a negative deposit would drain it, inverting the
/// operation the caller asked for. Zero is legal; a zero movement is a
/// no-op, not an error.
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` if `amount` is strictly negative.
///
/// # Examples
///
/// ```rust
/// use teller::application::validation::validate_amount;
/// use teller::domain::value_objects::Money;
///
/// assert!(validate_amount(Money::new(1000)).is_ok());
/// assert!(validate_amount(Money::zero()).is_ok());
/// assert!(validate_amount(Money::new(-100)).is_err());
/// ```
pub fn validate_amount(amount: Money) -> DomainResult<Money> {
    if amount.is_negative() {
        return Err(DomainError::InvalidAmount(amount));
    }

    Ok(amount)
}
