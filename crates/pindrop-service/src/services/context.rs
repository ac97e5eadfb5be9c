//! Service context - dependency container for services
//!
//! Holds the repositories, the vote store, the session store and the JWT
//! service needed by services.

use std::sync::Arc;

use pindrop_cache::{RedisPool, SessionStore};
use pindrop_common::auth::JwtService;
use pindrop_core::traits::{ReportRepository, UserRepository, VoteStore};
use pindrop_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    redis_pool: RedisPool,

    user_repo: Arc<dyn UserRepository>,
    report_repo: Arc<dyn ReportRepository>,
    vote_store: Arc<dyn VoteStore>,

    session_store: SessionStore,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    /// Transactional store for votes and their counters
    pub fn vote_store(&self) -> &dyn VoteStore {
        self.vote_store.as_ref()
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &self.redis_pool)
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<RedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    vote_store: Option<Arc<dyn VoteStore>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: RedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn vote_store(mut self, store: Arc<dyn VoteStore>) -> Self {
        self.vote_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext. Sessions live as long as access tokens.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::validation(format!("{name} is required"));

        let redis_pool = self.redis_pool.ok_or_else(|| missing("redis_pool"))?;
        let jwt_service = self.jwt_service.ok_or_else(|| missing("jwt_service"))?;
        let session_ttl = u64::try_from(jwt_service.access_token_expiry())
            .map_err(|_| ServiceError::validation("access token expiry must be positive"))?;

        Ok(ServiceContext {
            pool: self.pool.ok_or_else(|| missing("pool"))?,
            session_store: SessionStore::new(redis_pool.clone(), session_ttl),
            redis_pool,
            user_repo: self.user_repo.ok_or_else(|| missing("user_repo"))?,
            report_repo: self.report_repo.ok_or_else(|| missing("report_repo"))?,
            vote_store: self.vote_store.ok_or_else(|| missing("vote_store"))?,
            jwt_service,
        })
    }
}
