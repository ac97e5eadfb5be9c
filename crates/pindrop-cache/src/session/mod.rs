//! Session storage module.
//!
//! Redis-backed storage for the login sessions referenced by access tokens.

mod session_store;

pub use session_store::{SessionData, SessionStore};
