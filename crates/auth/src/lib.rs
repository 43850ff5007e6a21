//! Authentication and sessions.
//!
//! Stateless JWT sessions with Argon2 password hashing. A session token is
//! self-describing: verifying it needs only the shared secret and a clock,
//! never a store lookup. Logging out clears the client cookie and nothing
//! more, so an issued token stays valid until it expires.
//!
//! ## Security
//!
//! - [`Crypto`] — Token issue and verification
//! - [`Claims`] — Token payload
//! - [`password`] — Argon2 hashing and verification
//!
//! ## Accounts
//!
//! - [`Credentials`] — Registration, login, and user lookup
//! - [`Auth`] — Request gate yielding the verified identity
mod claims;
mod credentials;
mod crypto;
mod dto;
mod error;
pub mod password;

pub use claims::*;
pub use credentials::*;
pub use crypto::*;
pub use dto::*;
pub use error::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
mod session;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
#[cfg(feature = "server")]
pub use session::*;
