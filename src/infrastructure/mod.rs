//! Infrastructure layer for the money-movement core.
//!
//! This module contains the collaborator boundaries the workflows operate
//! through:
//!
//! - **Repository**: account lookup and persistence
//! - **Notifications**: threshold notification delivery
//! - **Configuration**: settings loaded from environment variables
//! - **Dependencies**: dependency injection container
//!
//! # Design Principles
//!
//! - **Trait-based abstraction**: external collaborators live behind traits
//!   for testability and flexibility
//! - **Synchronous, blocking calls**: the orchestration model has no
//!   suspension points, so the traits use plain `fn`

mod config;
mod dependencies;
mod notifications;
mod repository;

pub use config::{AppConfig, ConfigError};
pub use dependencies::AppDependencies;
pub use notifications::{NotificationError, NotificationService, TracingNotificationService};
pub use repository::{AccountRepository, InMemoryAccountRepository, RepositoryError};
