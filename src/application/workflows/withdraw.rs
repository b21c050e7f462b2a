//! Withdrawal workflow.
//!
//! # Workflow Steps
//!
//! 1. Validate the amount (must not be negative)
//! 2. Load the account; a missing account propagates as `NotFound`
//! 3. Check the balance covers the amount; `InsufficientFunds` aborts with
//!    zero mutation and zero persistence
//! 4. If the post-withdrawal balance would fall below the low-funds
//!    threshold, notify the owner (informational, non-blocking)
//! 5. Apply the withdrawal
//! 6. Persist the account exactly once
//!
//! The low-funds predicate is evaluated against the pre-mutation state and
//! the amount being applied, between the guard and the mutation.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::validation::validate_amount;
use crate::application::workflows::{NotificationPolicy, WorkflowError};
use crate::domain::value_objects::{AccountId, Money};
use crate::infrastructure::{AccountRepository, NotificationService};

/// Orchestrator for withdrawing money from a single account.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use teller::application::workflows::{NotificationPolicy, WithdrawMoney};
/// use teller::domain::account::Account;
/// use teller::domain::value_objects::{AccountId, Email, Money, Owner};
/// use teller::infrastructure::{InMemoryAccountRepository, TracingNotificationService};
///
/// let repository = Arc::new(InMemoryAccountRepository::new());
/// let account_id = AccountId::generate();
/// repository.insert(Account {
///     id: account_id,
///     owner: Owner::new(
///         "Alice".to_string(),
///         Email::parse("alice@example.com").unwrap(),
///     ),
///     balance: Money::new(2000),
///     withdrawn: Money::zero(),
///     paid_in: Money::zero(),
/// });
///
/// let withdraw = WithdrawMoney::new(
///     repository.clone(),
///     Arc::new(TracingNotificationService::new()),
///     NotificationPolicy::BestEffort,
/// );
///
/// withdraw.execute(account_id, Money::new(100)).unwrap();
/// ```
pub struct WithdrawMoney {
    repository: Arc<dyn AccountRepository>,
    notifications: Arc<dyn NotificationService>,
    policy: NotificationPolicy,
}

impl WithdrawMoney {
    /// Creates a new `WithdrawMoney` workflow.
    #[must_use]
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        notifications: Arc<dyn NotificationService>,
        policy: NotificationPolicy,
    ) -> Self {
        Self {
            repository,
            notifications,
            policy,
        }
    }

    /// Withdraws `amount` from the account with the given identifier.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidAmount` for negative amounts
    /// - `RepositoryError::NotFound` if the account does not exist
    /// - `DomainError::InsufficientFunds` if the balance cannot cover the
    ///   amount; no repository write occurs
    /// - `RepositoryError::Persistence` if the final update fails
    /// - `NotificationError::Delivery` only under
    ///   [`NotificationPolicy::Strict`]
    #[instrument(skip(self), fields(account = %account_id, amount = %amount))]
    pub fn execute(&self, account_id: AccountId, amount: Money) -> Result<(), WorkflowError> {
        let amount = validate_amount(amount)?;
        let mut account = self.repository.get(account_id)?;

        account.check_insufficient_funds(amount)?;

        if account.check_low_funds(amount) {
            self.policy
                .deliver(self.notifications.notify_funds_low(account.owner.email()))?;
        }

        account.withdraw(amount);
        self.repository.update(account)?;

        info!("withdrawal completed");
        Ok(())
    }
}
