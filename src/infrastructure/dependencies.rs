//! Dependency injection container.
//!
//! `AppDependencies` holds the configuration and the collaborator
//! implementations, and builds ready-to-use workflows from them. This keeps
//! wiring in one place and lets tests swap any collaborator for a double.

use std::sync::Arc;

use super::config::AppConfig;
use super::notifications::{NotificationService, TracingNotificationService};
use super::repository::{AccountRepository, InMemoryAccountRepository};
use crate::application::workflows::{TransferMoney, WithdrawMoney};

/// Application dependency container.
///
/// All collaborators are held behind trait objects in `Arc`, so the
/// container is cheap to clone and safe to share across threads.
///
/// # Examples
///
/// ```rust
/// use teller::infrastructure::AppDependencies;
///
/// let dependencies = AppDependencies::in_memory();
/// let withdraw = dependencies.withdraw_money();
/// let transfer = dependencies.transfer_money();
/// ```
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    repository: Arc<dyn AccountRepository>,
    notifications: Arc<dyn NotificationService>,
}

impl AppDependencies {
    /// Creates a new `AppDependencies` container.
    #[must_use]
    pub fn new(
        config: AppConfig,
        repository: Arc<dyn AccountRepository>,
        notifications: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            config,
            repository,
            notifications,
        }
    }

    /// Builds a fully in-process stack: default configuration, an empty
    /// in-memory account store, and tracing-backed notifications.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            AppConfig::default(),
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(TracingNotificationService::new()),
        )
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a reference to the account repository.
    #[must_use]
    pub fn repository(&self) -> &Arc<dyn AccountRepository> {
        &self.repository
    }

    /// Returns a reference to the notification service.
    #[must_use]
    pub fn notifications(&self) -> &Arc<dyn NotificationService> {
        &self.notifications
    }

    /// Builds a withdraw workflow wired to this container's collaborators.
    #[must_use]
    pub fn withdraw_money(&self) -> WithdrawMoney {
        WithdrawMoney::new(
            self.repository.clone(),
            self.notifications.clone(),
            self.config.notification_policy,
        )
    }

    /// Builds a transfer workflow wired to this container's collaborators.
    #[must_use]
    pub fn transfer_money(&self) -> TransferMoney {
        TransferMoney::new(
            self.repository.clone(),
            self.notifications.clone(),
            self.config.notification_policy,
        )
    }
}
