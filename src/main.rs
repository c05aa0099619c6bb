use std::process;

use cityease::{app, config::AppConfig, utils::constant::*};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cityease=info,tower_http=info".into()),
        )
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(
            "cityease".into(),
            std::io::stdout,
        ))
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        error!(error = %e, "Invalid configuration");
        process::exit(1);
    });

    let db_pool = PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .acquire_timeout(DB_ACQUIRE_TIMEOUT)
        .idle_timeout(DB_IDLE_TIMEOUT)
        .connect(&config.database_url)
        .await
        .unwrap_or_else(|e| {
            error!(error = %e, "Database connection failed");
            process::exit(1);
        });
    info!("Connected to PostgreSQL database");

    if let Err(e) = sqlx::migrate!().run(&db_pool).await {
        error!(error = %e, "Failed to run database migrations");
        process::exit(1);
    }
    info!("Database tables initialized");

    let app = app(db_pool, &config).unwrap_or_else(|e| {
        error!(error = %e, "Failed to load catalog");
        process::exit(1);
    });

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await.unwrap_or_else(|e| {
        error!(error = %e, %addr, "Failed to bind listener");
        process::exit(1);
    });
    info!(%addr, "CityEase backend listening");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        process::exit(1);
    }
}
