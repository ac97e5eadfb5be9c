//! # pindrop-cache
//!
//! Redis layer holding login sessions.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Sessions referenced by access tokens, with expiry and revocation
//!
//! ## Example
//!
//! ```ignore
//! use pindrop_cache::{RedisPool, RedisPoolConfig, SessionStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let sessions = SessionStore::new(pool, 1800);
//!
//! let session_id = sessions.create(user_id).await?;
//! assert!(sessions.is_active(&session_id, user_id).await?);
//! sessions.revoke(&session_id).await?;
//! ```

pub mod pool;
pub mod session;

pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use session::{SessionData, SessionStore};
