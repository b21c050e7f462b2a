//! Account repository abstraction.
//!
//! # Design
//!
//! - **Trait-based abstraction**: `AccountRepository` allows for different
//!   backing stores (a database in production, in-memory for tests and
//!   embedding)
//! - **Load-mutate-save**: `get` hands out an owned `Account` value;
//!   `update` persists the whole value back. No handle stays live between
//!   the two calls.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::domain::account::Account;
use crate::domain::value_objects::AccountId;

/// Errors that can occur when interacting with the account store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No account has the requested identifier.
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    /// A storage operation failed.
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

/// Trait for account store implementations.
///
/// Implementations must be thread-safe (`Send + Sync`) so workflows can be
/// shared behind `Arc`. Both operations are synchronous and blocking; the
/// orchestration model has no suspension points.
pub trait AccountRepository: Send + Sync {
    /// Loads the account with the given identifier.
    ///
    /// # Errors
    ///
    /// - `RepositoryError::NotFound` if no account has that identifier
    /// - `RepositoryError::Persistence` if the store cannot be read
    fn get(&self, id: AccountId) -> Result<Account, RepositoryError>;

    /// Persists the given account value, replacing the stored state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Persistence` if the store cannot be
    /// written.
    fn update(&self, account: Account) -> Result<(), RepositoryError>;
}

/// In-memory account store.
///
/// Backs the account map with an `RwLock`ed `HashMap`. Suitable for tests
/// and in-process embedding; a lock poisoned by a panicking writer surfaces
/// as `RepositoryError::Persistence` instead of propagating the panic.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an account, replacing any previous state for
    /// the same identifier.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned. Seeding happens during setup,
    /// before any operation has run, so a poisoned lock here is a test-
    /// harness bug.
    pub fn insert(&self, account: Account) {
        self.accounts
            .write()
            .expect("account store lock poisoned during seeding")
            .insert(account.id, account);
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn get(&self, id: AccountId) -> Result<Account, RepositoryError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| RepositoryError::Persistence("account store lock poisoned".to_string()))?;

        accounts.get(&id).cloned().ok_or(RepositoryError::NotFound(id))
    }

    fn update(&self, account: Account) -> Result<(), RepositoryError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| RepositoryError::Persistence("account store lock poisoned".to_string()))?;

        accounts.insert(account.id, account);
        Ok(())
    }
}
