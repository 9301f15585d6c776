#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use secrecy::SecretString;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::RwLock;

use exam_auth_server::{
    app_state::AppState,
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Account, NewAccount, Role},
    repositories::AccountRepository,
};

/// Mirrors the Postgres tables: one map per role, unique email per map.
pub struct InMemoryAccountRepository {
    tables: Arc<RwLock<HashMap<Role, Vec<Account>>>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicUsize::new(1),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of trait calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Out-of-band delete, standing in for an operator removing a row.
    pub async fn remove(&self, role: Role, id: i64) -> bool {
        let mut tables = self.tables.write().await;
        let Some(rows) = tables.get_mut(&role) else {
            return false;
        };
        let before = rows.len();
        rows.retain(|a| a.id != id);
        rows.len() != before
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, role: Role, email: &str) -> AppResult<Option<Account>> {
        self.record_call();
        let tables = self.tables.read().await;
        Ok(tables
            .get(&role)
            .and_then(|rows| rows.iter().find(|a| a.email == email))
            .cloned())
    }

    async fn find_by_id(&self, role: Role, id: i64) -> AppResult<Option<Account>> {
        self.record_call();
        let tables = self.tables.read().await;
        Ok(tables
            .get(&role)
            .and_then(|rows| rows.iter().find(|a| a.id == id))
            .cloned())
    }

    async fn insert(&self, role: Role, account: NewAccount) -> AppResult<Account> {
        self.record_call();
        let mut tables = self.tables.write().await;
        let rows = tables.entry(role).or_default();

        if rows.iter().any(|a| a.email == account.email) {
            return Err(AppError::DuplicateEmail);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
        let account = account.into_account(id, role);
        rows.push(account.clone());
        Ok(account)
    }
}

/// Every call fails the way a dropped connection would.
pub struct UnavailableAccountRepository;

#[async_trait]
impl AccountRepository for UnavailableAccountRepository {
    async fn find_by_email(&self, _role: Role, _email: &str) -> AppResult<Option<Account>> {
        Err(AppError::StorageError("pool timed out while waiting for an open connection".to_string()))
    }

    async fn find_by_id(&self, _role: Role, _id: i64) -> AppResult<Option<Account>> {
        Err(AppError::StorageError("pool timed out while waiting for an open connection".to_string()))
    }

    async fn insert(&self, _role: Role, _account: NewAccount) -> AppResult<Account> {
        Err(AppError::StorageError("pool timed out while waiting for an open connection".to_string()))
    }
}

pub fn test_config() -> Config {
    Config {
        app_env: "test".to_string(),
        database_url: SecretString::from("postgres://postgres@127.0.0.1:1/exam_auth_test".to_string()),
        database_max_connections: 1,
        database_connect_timeout_secs: 1,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        api_base_path: "/api".to_string(),
        cors_allowed_origins: vec!["http://localhost:5173".to_string()],
        jwt_secret: SecretString::from("integration_test_jwt_secret_key".to_string()),
        jwt_expiration_minutes: 5,
    }
}

pub fn test_state(repository: Arc<dyn AccountRepository>) -> Arc<AppState> {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy("postgres://postgres@127.0.0.1:1/exam_auth_test")
        .expect("lazy pool should build");

    Arc::new(AppState::with_repository(
        test_config(),
        Database::from_pool(pool),
        repository,
    ))
}
