use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{AccountRepository, PgAccountRepository},
    services::account_service::AccountService,
};

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        db.ensure_schema().await?;

        let account_repository = Arc::new(PgAccountRepository::new(&db));
        Ok(Self::with_repository(config, db, account_repository))
    }

    /// Builds the state around any repository; the pool is only used for
    /// readiness checks and shutdown.
    pub fn with_repository(
        config: Config,
        db: Database,
        account_repository: Arc<dyn AccountRepository>,
    ) -> Self {
        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_minutes);
        let account_service = Arc::new(AccountService::new(account_repository, jwt_service));

        Self {
            account_service,
            db,
            config: Arc::new(config),
        }
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.account_service.jwt_service()
    }
}
