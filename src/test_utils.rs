use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::{app_state::AppState, config::Config, db::Database, repositories::AccountRepository};

/// Pool that never connects unless a test asks it to.
pub fn lazy_database() -> Database {
    let pool = PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_millis(200))
        .connect_lazy("postgres://postgres@127.0.0.1:1/exam_auth_test")
        .expect("lazy pool should build");
    Database::from_pool(pool)
}

pub fn test_state(repository: Arc<dyn AccountRepository>) -> Arc<AppState> {
    Arc::new(AppState::with_repository(
        Config::test_config(),
        lazy_database(),
        repository,
    ))
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockAccountRepository;

    #[tokio::test]
    async fn test_state_uses_test_config() {
        let state = test_state(Arc::new(MockAccountRepository::new()));
        assert_eq!(state.config.api_base_path, "/api");
        assert_eq!(state.jwt_service().expiration_minutes(), 5);
    }
}
