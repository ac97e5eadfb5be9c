//! Active login sessions in Redis.
//!
//! A login opens a session whose id is embedded in the access token. The
//! session key expires together with the token, and logout deletes it, so
//! a token stays usable only while its session key exists.

use crate::pool::{RedisPool, RedisPoolError, RedisResult};
use pindrop_core::UserId;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

/// Key prefix for sessions
const SESSION_PREFIX: &str = "session:";

/// Key prefix for the per-user set of session ids
const USER_SESSIONS_PREFIX: &str = "user_sessions:";

/// Stored session data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Owner of the session
    pub user_id: UserId,
    /// Login timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl SessionData {
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Session store backing token revocation
#[derive(Clone, Debug)]
pub struct SessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl SessionStore {
    /// Create a store whose sessions live for `ttl_seconds`
    #[must_use]
    pub fn new(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    fn key(session_id: &str) -> String {
        format!("{SESSION_PREFIX}{session_id}")
    }

    fn user_key(user_id: UserId) -> String {
        format!("{USER_SESSIONS_PREFIX}{user_id}")
    }

    /// Open a new session for `user_id` and return its id
    pub async fn create(&self, user_id: UserId) -> RedisResult<String> {
        let session_id = uuid::Uuid::new_v4().simple().to_string();
        let data = SessionData::new(user_id);

        self.pool
            .set_json(&Self::key(&session_id), &data, self.ttl_seconds)
            .await?;

        let ttl = i64::try_from(self.ttl_seconds)
            .map_err(|_| RedisPoolError::InvalidTtl(self.ttl_seconds))?;
        let user_key = Self::user_key(user_id);
        let mut conn = self.pool.get().await?;
        conn.sadd::<_, _, ()>(&user_key, &session_id).await?;
        conn.expire::<_, ()>(&user_key, ttl).await?;

        tracing::debug!(user_id = %user_id, "Session opened");
        Ok(session_id)
    }

    /// Look up a live session
    pub async fn get(&self, session_id: &str) -> RedisResult<Option<SessionData>> {
        self.pool.get_json(&Self::key(session_id)).await
    }

    /// True when `session_id` is live and belongs to `user_id`
    pub async fn is_active(&self, session_id: &str, user_id: UserId) -> RedisResult<bool> {
        Ok(self
            .get(session_id)
            .await?
            .is_some_and(|data| data.user_id == user_id))
    }

    /// End one session. Returns false when it was already gone.
    pub async fn revoke(&self, session_id: &str) -> RedisResult<bool> {
        if let Some(data) = self.get(session_id).await? {
            let mut conn = self.pool.get().await?;
            conn.srem::<_, _, ()>(Self::user_key(data.user_id), session_id)
                .await?;
        }

        let deleted = self.pool.delete(&Self::key(session_id)).await?;
        if deleted {
            tracing::debug!("Session revoked");
        }
        Ok(deleted)
    }

    /// End every session of a user, returning how many were live
    pub async fn revoke_all_for_user(&self, user_id: UserId) -> RedisResult<i64> {
        let user_key = Self::user_key(user_id);
        let mut conn = self.pool.get().await?;

        let session_ids: Vec<String> = conn.smembers(&user_key).await?;
        let keys: Vec<String> = session_ids.iter().map(|id| Self::key(id)).collect();
        let count = self.pool.delete_many(&keys).await?;

        conn.del::<_, ()>(&user_key).await?;

        tracing::info!(user_id = %user_id, count, "Revoked all sessions for user");
        Ok(count)
    }
}
