use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use summer_school_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("FATAL: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let bind = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config).await.map_err(|e| {
        log::error!("FATAL: failed to initialise application state: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;
    let jwt_service = Arc::clone(&state.jwt_service);
    let state = web::Data::new(state);

    log::info!("Summer School server listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let jwt_service = Arc::clone(&jwt_service);
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(|cfg| handlers::configure(cfg, jwt_service))
    })
    .bind(bind)?
    .run()
    .await
}
