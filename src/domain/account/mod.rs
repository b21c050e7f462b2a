//! Account aggregate and related types.
//!
//! # Structure
//!
//! - [`aggregate`] - Account aggregate root with invariant checks and mutators
//! - [`errors`] - Domain errors for account operations
//!
//! # Design Principles
//!
//! - **Pure guards**: the `check_*` operations are side-effect free
//! - **Unconditional mutators**: `withdraw`/`pay_in` assume validation passed
//! - **Type safety**: amounts and identifiers are value objects, never bare
//!   primitives

pub mod aggregate;
pub mod errors;

pub use aggregate::*;
pub use errors::*;
