//! In-memory implementations of the persistence ports for service tests.
//!
//! All tables live behind one async mutex. A vote transaction takes that
//! mutex on its first read, works on a copy, and writes the copy back on
//! commit. Dropping the transaction discards the copy.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, OwnedMutexGuard};

use pindrop_cache::{RedisPool, RedisPoolConfig};
use pindrop_common::auth::JwtService;
use pindrop_core::entities::{NewReport, NewUser, Report, ReportStats, User, Vote};
use pindrop_core::error::DomainError;
use pindrop_core::traits::{
    RepoResult, ReportQuery, ReportRepository, UserRepository, VoteStore, VoteTransaction,
};
use pindrop_core::value_objects::{ReportId, StatsDelta, UserId, VoteState};

use crate::services::{ServiceContext, ServiceContextBuilder};

#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub users: BTreeMap<UserId, (User, String)>,
    pub reports: BTreeMap<ReportId, Report>,
    pub stats: HashMap<ReportId, ReportStats>,
    pub votes: HashMap<(ReportId, UserId), Vote>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn live_report(&self, id: ReportId) -> Option<&Report> {
        self.reports.get(&id).filter(|r| !r.is_deleted())
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    fail_apply_delta: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `apply_delta` fail with a database error
    pub fn fail_apply_delta(&self) {
        self.fail_apply_delta.store(true, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> Tables {
        self.tables.lock().await.clone()
    }

    pub async fn add_user(&self, email: &str) -> User {
        UserRepository::create(
            self,
            &NewUser {
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                phone_num: "+15550100".to_string(),
                email: email.to_string(),
            },
            "hash",
        )
        .await
        .unwrap()
    }

    pub async fn add_report(&self, owner: UserId) -> Report {
        ReportRepository::create(
            self,
            &NewReport {
                user_id: owner,
                title: "Broken streetlight".to_string(),
                location: "5th and Main".to_string(),
                directions: String::new(),
                description: "Out for a week".to_string(),
            },
        )
        .await
        .unwrap()
    }

    /// Drop the stats row of a report to simulate a broken database
    pub async fn remove_stats(&self, id: ReportId) {
        self.tables.lock().await.stats.remove(&id);
    }

    pub async fn set_stats(&self, stats: ReportStats) {
        self.tables.lock().await.stats.insert(stats.report_id, stats);
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .users
            .get(&id)
            .map(|(user, _)| user.clone())
            .filter(|u| !u.is_deleted()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .users
            .values()
            .map(|(user, _)| user)
            .find(|u| u.email == email && !u.is_deleted())
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(UserRepository::find_by_email(self, email).await?.is_some())
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        if self.email_exists(&user.email).await? {
            return Err(DomainError::EmailAlreadyExists);
        }
        let mut tables = self.tables.lock().await;
        let id = UserId::new(tables.next_id());
        let created = User {
            id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone_num: user.phone_num.clone(),
            email: user.email.clone(),
            created_at: Utc::now(),
            deleted_at: None,
        };
        tables
            .users
            .insert(id, (created.clone(), password_hash.to_string()));
        Ok(created)
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut tables = self.tables.lock().await;
        match tables.users.get_mut(&user.id) {
            Some((stored, _)) if !stored.is_deleted() => {
                stored.first_name.clone_from(&user.first_name);
                stored.last_name.clone_from(&user.last_name);
                Ok(())
            }
            _ => Err(DomainError::UserNotFound(user.id)),
        }
    }

    async fn delete(&self, id: UserId) -> RepoResult<DateTime<Utc>> {
        let mut tables = self.tables.lock().await;
        match tables.users.get_mut(&id) {
            Some((stored, _)) if !stored.is_deleted() => {
                let now = Utc::now();
                stored.deleted_at = Some(now);
                Ok(now)
            }
            _ => Err(DomainError::UserNotFound(id)),
        }
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .users
            .get(&id)
            .filter(|(user, _)| !user.is_deleted())
            .map(|(_, hash)| hash.clone()))
    }
}

#[async_trait]
impl ReportRepository for MemoryStore {
    async fn find_by_id(&self, id: ReportId) -> RepoResult<Option<Report>> {
        Ok(self.tables.lock().await.live_report(id).cloned())
    }

    async fn list(&self, query: ReportQuery) -> RepoResult<Vec<Report>> {
        let tables = self.tables.lock().await;
        let after = query.after.map_or(0, ReportId::into_inner);
        Ok(tables
            .reports
            .values()
            .filter(|r| r.id.into_inner() > after && !r.is_deleted())
            .take(usize::try_from(query.limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn create(&self, report: &NewReport) -> RepoResult<Report> {
        let mut tables = self.tables.lock().await;
        let id = ReportId::new(tables.next_id());
        let created = Report {
            id,
            user_id: report.user_id,
            title: report.title.clone(),
            location: report.location.clone(),
            directions: report.directions.clone(),
            description: report.description.clone(),
            timestamp: Utc::now(),
            deleted_at: None,
        };
        tables.reports.insert(id, created.clone());
        tables.stats.insert(id, ReportStats::zeroed(id));
        Ok(created)
    }

    async fn update(&self, report: &Report) -> RepoResult<()> {
        let mut tables = self.tables.lock().await;
        match tables.reports.get_mut(&report.id) {
            Some(stored) if !stored.is_deleted() => {
                *stored = Report {
                    deleted_at: None,
                    ..report.clone()
                };
                Ok(())
            }
            _ => Err(DomainError::ReportNotFound(report.id)),
        }
    }

    async fn delete(&self, id: ReportId) -> RepoResult<DateTime<Utc>> {
        let mut tables = self.tables.lock().await;
        match tables.reports.get_mut(&id) {
            Some(stored) if !stored.is_deleted() => {
                let now = Utc::now();
                stored.deleted_at = Some(now);
                Ok(now)
            }
            _ => Err(DomainError::ReportNotFound(id)),
        }
    }

    async fn stats(&self, id: ReportId) -> RepoResult<Option<ReportStats>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .live_report(id)
            .and_then(|_| tables.stats.get(&id).copied()))
    }

    async fn record_view(&self, id: ReportId) -> RepoResult<Option<ReportStats>> {
        let mut tables = self.tables.lock().await;
        if tables.live_report(id).is_none() {
            return Ok(None);
        }
        Ok(tables.stats.get_mut(&id).map(|stats| {
            stats.view_count += 1;
            *stats
        }))
    }
}

#[async_trait]
impl VoteStore for MemoryStore {
    async fn begin(&self) -> RepoResult<Box<dyn VoteTransaction>> {
        Ok(Box::new(MemoryTransaction {
            tables: Arc::clone(&self.tables),
            guard: None,
            working: Tables::default(),
            fail_apply_delta: self.fail_apply_delta.load(Ordering::SeqCst),
        }))
    }
}

struct MemoryTransaction {
    tables: Arc<Mutex<Tables>>,
    guard: Option<OwnedMutexGuard<Tables>>,
    working: Tables,
    fail_apply_delta: bool,
}

impl MemoryTransaction {
    async fn working(&mut self) -> &mut Tables {
        if self.guard.is_none() {
            let guard = Arc::clone(&self.tables).lock_owned().await;
            self.working = guard.clone();
            self.guard = Some(guard);
        }
        &mut self.working
    }
}

#[async_trait]
impl VoteTransaction for MemoryTransaction {
    async fn lock_stats(&mut self, report_id: ReportId) -> RepoResult<Option<ReportStats>> {
        Ok(self.working().await.stats.get(&report_id).copied())
    }

    async fn find_vote(
        &mut self,
        report_id: ReportId,
        user_id: UserId,
    ) -> RepoResult<Option<Vote>> {
        Ok(self.working().await.votes.get(&(report_id, user_id)).cloned())
    }

    async fn write_vote(
        &mut self,
        report_id: ReportId,
        user_id: UserId,
        state: VoteState,
        at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let tables = self.working().await;
        match state.direction() {
            Some(direction) => {
                tables.votes.insert(
                    (report_id, user_id),
                    Vote {
                        report_id,
                        user_id,
                        direction,
                        timestamp: at,
                    },
                );
            }
            None => {
                tables.votes.remove(&(report_id, user_id));
            }
        }
        Ok(())
    }

    async fn apply_delta(
        &mut self,
        report_id: ReportId,
        delta: StatsDelta,
    ) -> RepoResult<Option<ReportStats>> {
        if self.fail_apply_delta {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        let tables = self.working().await;
        let Some(stats) = tables.stats.get_mut(&report_id) else {
            return Ok(None);
        };
        *stats = stats.apply_delta(delta)?;
        Ok(Some(*stats))
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let Self { guard, working, .. } = *self;
        if let Some(mut guard) = guard {
            *guard = working;
        }
        Ok(())
    }
}

/// Service context over `store`. The database and Redis pools are never
/// connected.
pub fn context(store: &MemoryStore) -> ServiceContext {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/pindrop_unused")
        .unwrap();
    let redis_pool = RedisPool::new(RedisPoolConfig::default()).unwrap();

    ServiceContextBuilder::new()
        .pool(pool)
        .redis_pool(redis_pool)
        .user_repo(Arc::new(store.clone()))
        .report_repo(Arc::new(store.clone()))
        .vote_store(Arc::new(store.clone()))
        .jwt_service(Arc::new(JwtService::new(
            "test-secret-key-that-is-long-enough",
            900,
        )))
        .build()
        .unwrap()
}
