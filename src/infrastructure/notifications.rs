//! Notification service abstraction.
//!
//! The core triggers two kinds of informational notifications: funds running
//! low after a withdrawal, and pay-in headroom shrinking after a deposit.
//! Actual delivery (email/SMS) is a transport concern behind the
//! [`NotificationService`] trait; this module ships a tracing-backed
//! implementation for in-process use, where the structured log event is the
//! delivery.

use thiserror::Error;

use crate::domain::value_objects::Email;

/// Errors that can occur when delivering a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// The notification could not be delivered.
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

/// Trait for notification transport implementations.
///
/// Implementations must be thread-safe (`Send + Sync`). Both operations are
/// informational side effects of a money movement; whether a delivery
/// failure aborts the movement is the orchestrator's decision, not the
/// transport's.
pub trait NotificationService: Send + Sync {
    /// Notifies the owner that their balance is running low.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::Delivery` if the transport fails.
    fn notify_funds_low(&self, email: &Email) -> Result<(), NotificationError>;

    /// Notifies the owner that their account is approaching its cumulative
    /// pay-in limit.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::Delivery` if the transport fails.
    fn notify_approaching_pay_in_limit(&self, email: &Email) -> Result<(), NotificationError>;
}

/// Notification service that emits each notification as a structured
/// `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationService;

impl TracingNotificationService {
    /// Creates a new `TracingNotificationService`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NotificationService for TracingNotificationService {
    fn notify_funds_low(&self, email: &Email) -> Result<(), NotificationError> {
        tracing::info!(recipient = %email, "funds low notification");
        Ok(())
    }

    fn notify_approaching_pay_in_limit(&self, email: &Email) -> Result<(), NotificationError> {
        tracing::info!(recipient = %email, "approaching pay-in limit notification");
        Ok(())
    }
}
