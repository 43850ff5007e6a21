//! Words: the guess dictionary and the word of the day.
//!
//! ## Architecture
//!
//! - [`Dictionary`] — Immutable list of legal guesses, loaded once
//! - [`Rotation`] — Pool state: available words, retired words, current word
//! - [`WordPool`] — Sole owner of the rotation; publishes the daily word
//! - [`Schedule`] — Daily firing time at a fixed UTC offset
//! - [`Scheduler`] — Timer task invoking [`WordPool::rotate`] once per firing
//!
//! Each word moves `Available → Retired` exactly once. Retiring a word and
//! publishing it as current are one atomic repository update, so readers
//! never see one without the other.
mod dictionary;
mod error;
mod pool;
mod rotation;
mod schedule;
mod scheduler;

pub use dictionary::*;
pub use error::*;
pub use pool::*;
pub use rotation::*;
pub use schedule::*;
pub use scheduler::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
pub use handlers::*;
