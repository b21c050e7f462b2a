//! Money value object.
//!
//! Provides a strongly-typed representation of monetary amounts backed by
//! `rust_decimal::Decimal`, so arithmetic is exact and never subject to
//! binary floating-point rounding. Amounts are signed: cumulative withdrawal
//! ledgers are negative, balances and deposits are non-negative.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing `Money` from external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The amount string could not be parsed as a valid decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A monetary amount.
///
/// `Money` wraps a `Decimal`, giving:
///
/// - **Type safety**: amounts cannot be confused with bare numbers
/// - **Precision**: exact decimal arithmetic for financial calculations
/// - **Total ordering**: amounts compare and sort like numbers
///
/// # Examples
///
/// ```rust
/// use teller::domain::value_objects::Money;
///
/// let balance = Money::new(2000);
/// let amount = Money::new(100);
///
/// assert_eq!(balance - amount, Money::new(1900));
/// assert!(amount < balance);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new `Money` value from a whole number of monetary units.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use teller::domain::value_objects::Money;
    ///
    /// let amount = Money::new(4000);
    /// assert_eq!(amount.to_string(), "4000");
    /// ```
    #[must_use]
    pub fn new(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }

    /// Creates a new `Money` value from a `Decimal` amount.
    #[must_use]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parses a string amount into `Money`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the string is not a valid
    /// decimal number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use teller::domain::value_objects::Money;
    ///
    /// assert!(Money::parse("10.50").is_ok());
    /// assert!(Money::parse("not-a-number").is_err());
    /// ```
    pub fn parse(amount: &str) -> Result<Self, MoneyError> {
        amount
            .parse::<Decimal>()
            .map(Self)
            .map_err(|_| MoneyError::InvalidAmount(amount.to_string()))
    }

    /// The zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the amount as a `Decimal`.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
