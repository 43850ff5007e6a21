//! Player statistics.
//!
//! Applies game outcomes to a user's counters. The target account is always
//! the authenticated identity; the update is one atomic repository write,
//! so concurrent outcomes for one player never lose each other.
mod error;
mod outcome;
mod scorekeeper;

pub use error::*;
pub use outcome::*;
pub use scorekeeper::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
pub use handlers::*;
