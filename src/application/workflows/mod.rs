//! Workflow modules for the money-movement core.
//!
//! Workflows are the operation orchestrators. Each follows the same shape:
//!
//! ```text
//! fetch → validate → (maybe notify) → mutate → persist
//! ```
//!
//! Accounts are loaded fresh from the repository on every call, mutated on
//! the call's own stack, and persisted back; no workflow retains state
//! between calls.
//!
//! # Workflows
//!
//! - [`WithdrawMoney`]: removes funds from a single account
//! - [`TransferMoney`]: moves funds between two accounts
//!
//! # Error Handling
//!
//! Validation failures and repository errors always abort the operation with
//! zero mutation and zero (further) persistence, and propagate unchanged
//! inside [`WorkflowError`]. Notification delivery failures are governed by
//! [`NotificationPolicy`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::domain::account::errors::DomainError;
use crate::infrastructure::{NotificationError, RepositoryError};

pub mod transfer;
pub mod withdraw;

pub use transfer::TransferMoney;
pub use withdraw::WithdrawMoney;

/// The error type returned by workflow orchestrators.
///
/// Every variant is transparent: collaborator errors reach the caller
/// unchanged in kind and message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// A business-rule violation reported by the account.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A failure reported by the account store.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A notification delivery failure, surfaced only under
    /// [`NotificationPolicy::Strict`].
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// How workflows react to notification delivery failures.
///
/// Notifications are informational side effects; whether their failure may
/// abort fund movement is a product decision, so it is injected rather than
/// hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationPolicy {
    /// Log the failure at `warn` level and continue the operation.
    #[default]
    BestEffort,
    /// Abort the remainder of the operation with the delivery error.
    Strict,
}

impl NotificationPolicy {
    /// Applies the policy to a delivery outcome.
    pub(crate) fn deliver(self, outcome: Result<(), NotificationError>) -> Result<(), WorkflowError> {
        match outcome {
            Ok(()) => Ok(()),
            Err(error) => match self {
                Self::BestEffort => {
                    warn!(%error, "notification delivery failed");
                    Ok(())
                }
                Self::Strict => Err(WorkflowError::Notification(error)),
            },
        }
    }
}

impl FromStr for NotificationPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "best-effort" => Ok(Self::BestEffort),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown notification policy: {other}")),
        }
    }
}

impl fmt::Display for NotificationPolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BestEffort => write!(formatter, "best-effort"),
            Self::Strict => write!(formatter, "strict"),
        }
    }
}
