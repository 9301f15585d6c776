use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{Account, NewAccount, Role},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_email(&self, role: Role, email: &str) -> AppResult<Option<Account>>;
    async fn find_by_id(&self, role: Role, id: i64) -> AppResult<Option<Account>>;
    /// Unique-email violations surface as `AppError::DuplicateEmail`.
    async fn insert(&self, role: Role, account: NewAccount) -> AppResult<Account>;
}

/// Statements for one role table. Table names only ever come from here.
struct RoleStatements {
    find_by_email: &'static str,
    find_by_id: &'static str,
    insert: &'static str,
}

const ATTENDEE_STATEMENTS: RoleStatements = RoleStatements {
    find_by_email: "SELECT id, name, email, password_hash FROM attendee WHERE email = $1",
    find_by_id: "SELECT id, name, email, password_hash FROM attendee WHERE id = $1",
    insert: "INSERT INTO attendee (name, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING id, name, email, password_hash",
};

const PROCTOR_STATEMENTS: RoleStatements = RoleStatements {
    find_by_email: "SELECT id, name, email, password_hash FROM proctor WHERE email = $1",
    find_by_id: "SELECT id, name, email, password_hash FROM proctor WHERE id = $1",
    insert: "INSERT INTO proctor (name, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING id, name, email, password_hash",
};

fn statements(role: Role) -> &'static RoleStatements {
    match role {
        Role::Attendee => &ATTENDEE_STATEMENTS,
        Role::Proctor => &PROCTOR_STATEMENTS,
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
}

impl AccountRow {
    fn into_account(self, role: Role) -> Account {
        Account {
            id: self.id,
            role,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}

pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_email(&self, role: Role, email: &str) -> AppResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(statements(role).find_by_email)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.into_account(role)))
    }

    async fn find_by_id(&self, role: Role, id: i64) -> AppResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(statements(role).find_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.into_account(role)))
    }

    async fn insert(&self, role: Role, account: NewAccount) -> AppResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(statements(role).insert)
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.password_hash)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into_account(role))
    }
}
