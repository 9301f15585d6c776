pub mod auth_handler;
pub mod health_handler;

use std::sync::Arc;

use actix_web::web;

use crate::app_state::AppState;

pub use auth_handler::{json_config, me, signin, signup};
pub use health_handler::{health_check, health_check_live, health_check_ready};

/// Registers shared data, the health checks, and the auth routes under the
/// configured base path.
pub fn configure(cfg: &mut web::ServiceConfig, state: &Arc<AppState>) {
    cfg.app_data(web::Data::new(Arc::clone(state)))
        .app_data(web::Data::new(state.jwt_service().clone()))
        .app_data(json_config())
        .service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .service(
            web::scope(&state.config.api_base_path).service(
                web::scope("/auth")
                    .service(signup)
                    .service(signin)
                    .service(me),
            ),
        );
}
