//! Account aggregate for the money-movement domain.
//!
//! `Account` is the aggregate root: it holds the balance and the cumulative
//! movement ledgers and exposes the business rules for withdrawals and
//! deposits.
//!
//! # Design Principles
//!
//! - **Validation and mutation are split**: the `check_*` guards and
//!   predicates never mutate; `withdraw`/`pay_in` mutate unconditionally and
//!   assume their guard already passed. Orchestrators rely on the split to
//!   evaluate notification thresholds against pre-mutation state.
//! - **Pure predicates**: every check returns the same answer for the same
//!   state and amount.

use serde::{Deserialize, Serialize};

use crate::domain::account::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{AccountId, Money, Owner};

/// An account that money can be withdrawn from and paid into.
///
/// Instances are constructed by the repository on lookup (or by test
/// fixtures), mutated in place by [`withdraw`](Account::withdraw) and
/// [`pay_in`](Account::pay_in), and handed back to the repository for
/// persistence. The core never caches accounts across calls.
///
/// # Examples
///
/// ```rust
/// use teller::domain::account::Account;
/// use teller::domain::value_objects::{AccountId, Email, Money, Owner};
///
/// let mut account = Account {
///     id: AccountId::generate(),
///     owner: Owner::new(
///         "Alice".to_string(),
///         Email::parse("alice@example.com").unwrap(),
///     ),
///     balance: Money::new(2000),
///     withdrawn: Money::zero(),
///     paid_in: Money::zero(),
/// };
///
/// assert!(account.check_insufficient_funds(Money::new(100)).is_ok());
/// account.withdraw(Money::new(100));
/// assert_eq!(account.balance, Money::new(1900));
/// assert_eq!(account.withdrawn, Money::new(-100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The unique identifier for this account.
    pub id: AccountId,
    /// The account holder, including the contact address for notifications.
    pub owner: Owner,
    /// The current balance.
    pub balance: Money,
    /// Cumulative total of all withdrawals. Non-positive; each withdrawal
    /// makes it more negative.
    pub withdrawn: Money,
    /// Cumulative total of all deposits received. Non-negative; compared
    /// against [`Account::PAY_IN_LIMIT`].
    pub paid_in: Money,
}

impl Account {
    /// Maximum cumulative deposit total a single account may ever receive.
    pub const PAY_IN_LIMIT: Money =
        Money::from_decimal(rust_decimal::Decimal::from_parts(4_000, 0, 0, false, 0));

    /// Balance level below which a funds-low notification is triggered; also
    /// the pay-in headroom below which an approaching-limit notification is
    /// triggered.
    pub const LOW_FUNDS_THRESHOLD: Money =
        Money::from_decimal(rust_decimal::Decimal::from_parts(500, 0, 0, false, 0));

    /// Checks that the balance can cover a withdrawal of `amount`.
    ///
    /// Pure validation, no mutation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InsufficientFunds` when `balance - amount < 0`.
    pub fn check_insufficient_funds(&self, amount: Money) -> DomainResult<()> {
        if self.balance - amount < Money::zero() {
            return Err(DomainError::InsufficientFunds {
                required: amount,
                available: self.balance,
            });
        }

        Ok(())
    }

    /// Checks that a deposit of `amount` stays within the pay-in limit.
    ///
    /// Pure validation, no mutation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PayInLimitReached` when
    /// `paid_in + amount > PAY_IN_LIMIT`.
    pub fn check_pay_in_limit_reached(&self, amount: Money) -> DomainResult<()> {
        if self.paid_in + amount > Self::PAY_IN_LIMIT {
            return Err(DomainError::PayInLimitReached {
                attempted: amount,
                paid_in: self.paid_in,
            });
        }

        Ok(())
    }

    /// Returns `true` when withdrawing `amount` would leave the balance
    /// below the low-funds threshold.
    ///
    /// Informational only; a `true` answer does not block the withdrawal.
    #[must_use]
    pub fn check_low_funds(&self, amount: Money) -> bool {
        self.balance - amount < Self::LOW_FUNDS_THRESHOLD
    }

    /// Returns `true` when depositing `amount` would leave less than the
    /// low-funds threshold of pay-in headroom.
    ///
    /// Informational only; a `true` answer does not block the deposit.
    #[must_use]
    pub fn check_approaching_pay_in_limit(&self, amount: Money) -> bool {
        Self::PAY_IN_LIMIT - (self.paid_in + amount) < Self::LOW_FUNDS_THRESHOLD
    }

    /// Removes `amount` from the balance and records it in the withdrawal
    /// ledger.
    ///
    /// Unconditional; the caller must have already validated sufficiency via
    /// [`check_insufficient_funds`](Account::check_insufficient_funds).
    pub fn withdraw(&mut self, amount: Money) {
        self.balance -= amount;
        self.withdrawn -= amount;
    }

    /// Adds `amount` to the balance and records it in the pay-in ledger.
    ///
    /// Unconditional; the caller must have already validated the limit via
    /// [`check_pay_in_limit_reached`](Account::check_pay_in_limit_reached).
    pub fn pay_in(&mut self, amount: Money) {
        self.balance += amount;
        self.paid_in += amount;
    }
}
