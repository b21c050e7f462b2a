//! Account money-movement core.
//!
//! Two operations, withdrawal and transfer, against account records,
//! enforcing balance and pay-in-limit invariants and triggering
//! notifications near thresholds.
//!
//! # Architecture
//!
//! The crate follows the Onion Architecture:
//!
//! - **Domain Layer**: value objects, the `Account` aggregate, and its
//!   invariant checks
//! - **Application Layer**: input validation and the two workflow
//!   orchestrators
//! - **Infrastructure Layer**: the repository and notification collaborator
//!   traits, their in-process implementations, configuration, and wiring
//!
//! Each operation is a fresh load-mutate-save cycle: accounts are read from
//! the repository, validated and mutated by domain logic, persisted back,
//! and nothing is cached between calls.

pub mod application;
pub mod domain;
pub mod infrastructure;
