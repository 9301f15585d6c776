use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, App, HttpServer};

use exam_auth_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config
        .validate_for_production()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config)
        .await
        .map(Arc::new)
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!(
        "Starting HTTP server on {}:{} (auth routes under '{}/auth')",
        bind_addr.0,
        bind_addr.1,
        state.config.api_base_path
    );

    let server_state = Arc::clone(&state);
    HttpServer::new(move || {
        let cors = server_state
            .config
            .cors_allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(r#"%a "%r" %s %b %T req_id=%{x-request-id}o"#))
            .configure(|cfg| handlers::configure(cfg, &server_state))
    })
    .bind(bind_addr)?
    .run()
    .await?;

    state.db.close().await;
    Ok(())
}
