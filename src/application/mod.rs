//! Application layer for the money-movement core.
//!
//! This module contains the operation orchestration:
//!
//! - **Validation**: input checks that run before any account state is read
//! - **Workflows**: the withdraw and transfer orchestrators
//!
//! Workflows talk to the outside world only through the infrastructure
//! traits, so every collaborator can be swapped for a test double.

pub mod validation;
pub mod workflows;

pub use validation::*;
pub use workflows::*;
