//! Document repository behind every piece of persisted state.
//!
//! Records are JSON documents addressed by `(collection, key)`. The only
//! write that mutates an existing record is [`Repository::update`], which is
//! atomic per key, so read-modify-write never interleaves for one record.
//!
//! ## Backends
//!
//! - [`Memory`] — In-process maps, used by tests and single-node deployments
//! - [`Postgres`] — One JSONB table, updates inside a row-locking transaction
//!
//! ## Collections
//!
//! Constants for all persistent entities: users, dictionary words, and the
//! daily rotation slot.
mod error;
mod memory;
mod postgres;
mod repository;

pub use error::*;
pub use memory::*;
pub use postgres::*;
pub use repository::*;

/// Collection of registered user accounts, keyed by username.
#[rustfmt::skip]
pub const USERS:    &str = "users";
/// Collection of dictionary words used to validate guesses.
#[rustfmt::skip]
pub const WORDS:    &str = "words";
/// Collection holding the single daily rotation document.
#[rustfmt::skip]
pub const ROTATION: &str = "rotation";

/// Decodes a stored document into a domain record.
pub fn decode<T>(doc: Document) -> Result<T, DataError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(doc).map_err(DataError::from)
}

/// Encodes a domain record as a storable document.
pub fn encode<T>(record: &T) -> Result<Document, DataError>
where
    T: serde::Serialize,
{
    serde_json::to_value(record).map_err(DataError::from)
}

/// Bounds a store call by [`prodle_core::STORE_TIMEOUT`].
pub async fn bounded<F, T>(call: F) -> Result<T, DataError>
where
    F: std::future::Future<Output = Result<T, DataError>>,
{
    tokio::time::timeout(prodle_core::STORE_TIMEOUT, call)
        .await
        .map_err(|_| DataError::Unavailable("store call timed out".to_string()))?
}
