//! Application configuration management.
//!
//! Configuration is loaded from environment variables once at startup, with
//! defaults for everything that can safely default and a clear error for
//! anything that cannot be parsed.

use std::env;

use thiserror::Error;

use crate::application::workflows::NotificationPolicy;

/// Environment variable selecting the notification failure policy.
const NOTIFICATION_POLICY_VAR: &str = "NOTIFICATION_POLICY";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Application configuration.
///
/// # Environment Variables
///
/// - `NOTIFICATION_POLICY`: `"best-effort"` (default) or `"strict"`.
///   Controls whether a notification delivery failure is swallowed (logged)
///   or aborts the remainder of the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// How workflows react to notification delivery failures.
    pub notification_policy: NotificationPolicy,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults; set-but-invalid values
    /// are an error rather than a silent default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let notification_policy = match env::var(NOTIFICATION_POLICY_VAR) {
            Ok(value) => {
                value
                    .parse::<NotificationPolicy>()
                    .map_err(|message| ConfigError::InvalidValue {
                        key: NOTIFICATION_POLICY_VAR.to_string(),
                        message,
                    })?
            }
            Err(_) => NotificationPolicy::default(),
        };

        Ok(Self {
            notification_policy,
        })
    }
}
