//! User domain module.
//!
//! This module provides all types related to the User aggregate:
//!
//! - [`UserId`]: UUID-based unique user identifier
//! - [`Username`]: normalized login name, 4 to 10 lowercase letters
//! - [`Email`]: normalized email address with a masked display form
//! - [`User`]: the aggregate itself
//! - [`UserError`]: rejected no-op change operations

mod aggregate;
mod errors;
mod identifier;

pub use aggregate::User;
pub use errors::UserError;
pub use identifier::{Email, UserId, Username};
