//! Transfer workflow.
//!
//! # Workflow Steps
//!
//! 1. Validate the amount (must not be negative)
//! 2. Load the sender, then the receiver (two independent lookups)
//! 3. Check the sender's balance; `InsufficientFunds` aborts with zero
//!    mutation and zero persistence
//! 4. If the sender would drop below the low-funds threshold, notify the
//!    sender
//! 5. Check the receiver's pay-in limit; `PayInLimitReached` aborts with
//!    zero mutation and zero persistence
//! 6. If the receiver's remaining headroom would drop below the threshold,
//!    notify the receiver
//! 7. Withdraw from the sender, pay in to the receiver
//! 8. Persist the sender, then the receiver, via two independent updates
//!
//! Step 4 runs before step 5: a transfer rejected for the receiver's pay-in
//! limit can already have notified the sender. Reordering would change
//! observable behavior, so callers must not rely on a rejected transfer
//! having been side-effect free.
//!
//! There is no cross-account transaction: if persisting the receiver fails
//! after the sender was persisted, the two stored accounts are inconsistent.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::validation::validate_amount;
use crate::application::workflows::{NotificationPolicy, WorkflowError};
use crate::domain::value_objects::{AccountId, Money};
use crate::infrastructure::{AccountRepository, NotificationService};

/// Orchestrator for moving money between two accounts.
///
/// Both sides are validated and notified independently: the sender against
/// the low-funds threshold, the receiver against the pay-in limit and its
/// headroom threshold.
pub struct TransferMoney {
    repository: Arc<dyn AccountRepository>,
    notifications: Arc<dyn NotificationService>,
    policy: NotificationPolicy,
}

impl TransferMoney {
    /// Creates a new `TransferMoney` workflow.
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

    /// Transfers `amount` from one account to another.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidAmount` for negative amounts
    /// - `RepositoryError::NotFound` if either account does not exist
    /// - `DomainError::InsufficientFunds` if the sender cannot cover the
    ///   amount
    /// - `DomainError::PayInLimitReached` if the receiver's cumulative
    ///   deposits would exceed the limit
    /// - `RepositoryError::Persistence` if either update fails; a failure on
    ///   the second update leaves the first persisted
    /// - `NotificationError::Delivery` only under
    ///   [`NotificationPolicy::Strict`]
    #[instrument(
        skip(self),
        fields(from = %from_account_id, to = %to_account_id, amount = %amount)
    )]
    pub fn execute(
        &self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Money,
    ) -> Result<(), WorkflowError> {
        let amount = validate_amount(amount)?;
        let mut from = self.repository.get(from_account_id)?;
        let mut to = self.repository.get(to_account_id)?;

        from.check_insufficient_funds(amount)?;

        if from.check_low_funds(amount) {
            self.policy
                .deliver(self.notifications.notify_funds_low(from.owner.email()))?;
        }

        to.check_pay_in_limit_reached(amount)?;

        if to.check_approaching_pay_in_limit(amount) {
            self.policy.deliver(
                self.notifications
                    .notify_approaching_pay_in_limit(to.owner.email()),
            )?;
        }

        from.withdraw(amount);
        to.pay_in(amount);

        self.repository.update(from)?;
        self.repository.update(to)?;

        info!("transfer completed");
        Ok(())
    }
}
