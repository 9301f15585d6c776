use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AuthMiddleware, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{SigninRequest, SignupRequest},
};

#[post("/signup")]
pub async fn signup(
    state: web::Data<Arc<AppState>>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.account_service.signup(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/signin")]
pub async fn signin(
    state: web::Data<Arc<AppState>>,
    request: web::Json<SigninRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.account_service.signin(request.into_inner()).await?;
    Ok(HttpResponse::Accepted().json(response))
}

#[get("/me", wrap = "AuthMiddleware")]
pub async fn me(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = state.account_service.get_profile(&auth.0).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Body errors (bad JSON, missing fields) come back in the same shape as
/// every other client error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}
