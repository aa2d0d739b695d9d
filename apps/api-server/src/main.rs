//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        env = ?config.env,
        "Starting Blog API Server on {}:{}",
        config.host,
        config.port
    );

    #[cfg(feature = "postgres")]
    let pool = match &config.database {
        Some(db_config) => match blog_infra::DbPool::connect(db_config).await {
            Ok(pool) => Some(pool),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                None
            }
        },
        None => {
            tracing::warn!(
                "{} not set. Running without database.",
                config.env.database_url_var()
            );
            None
        }
    };

    #[cfg(feature = "postgres")]
    let state = match &pool {
        Some(pool) => AppState::with_pool(pool),
        None => AppState::in_memory(),
    };

    #[cfg(not(feature = "postgres"))]
    let state = AppState::in_memory();

    // Runs until SIGINT/SIGTERM
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    #[cfg(feature = "postgres")]
    if let Some(pool) = pool {
        if let Err(e) = pool.close().await {
            tracing::error!("Failed to close database pool: {}", e);
        }
    }

    tracing::info!("Blog API Server stopped");
    Ok(())
}
