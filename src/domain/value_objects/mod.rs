//! Value objects for the money-movement domain.
//!
//! Value objects are immutable objects that have no identity. They are
//! defined only by their values and are used to describe characteristics or
//! attributes of domain entities.
//!
//! # Available Value Objects
//!
//! - [`AccountId`] - Unique identifier for accounts (UUID v7)
//! - [`Money`] - Exact-decimal monetary amount
//! - [`Email`] - Validated contact address for notifications
//! - [`Owner`] - Account holder (name + contact address)
//!
//! # Design Principles
//!
//! - **Immutability**: once created, values cannot be changed
//! - **Value equality**: two instances with the same values are equal
//! - **Self-validation**: invalid values cannot be created (smart constructors)

mod account_id;
mod email;
mod money;
mod owner;

pub use account_id::{AccountId, ValidationError as AccountIdValidationError};
pub use email::{Email, EmailError};
pub use money::{Money, MoneyError};
pub use owner::Owner;
