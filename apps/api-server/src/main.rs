//! # Userhub API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod routes;
mod state;
mod telemetry;


use config::AppConfig;
use middleware::{CanonicalPath, cors, security_headers};
use observability::AccessLog;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Userhub API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await?;
    routes::log_routes(&config.base_path);

    let base_path = config.base_path.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(CanonicalPath)
            .wrap(cors())
            .wrap(security_headers())
            .wrap(AccessLog)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure(base_path.clone()))
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
