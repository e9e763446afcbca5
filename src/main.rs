// src/main.rs

use dotenvy::dotenv;
use nights_quiz::config::Config;
use nights_quiz::routes;
use nights_quiz::seed::seed_questions;
use nights_quiz::state::AppState;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenv().ok();
    let config = Config::from_env();

    // Logs go to stdout and to a daily-rolling file under logs/.
    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.rust_log))
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let pool = connect_pool(&config.database_url).await;
    tracing::info!("Database connected...");

    tracing::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations applied successfully.");

    // First boot gets the starter question deck.
    if let Err(e) = seed_questions(&pool).await {
        tracing::error!("Failed to seed starter questions: {:?}", e);
    }

    let state = AppState::new(pool, config.clone());
    let app = routes::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Arabian Nights Quiz API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Builds the Postgres pool, waiting out a database container that is
/// still starting up.
async fn connect_pool(database_url: &str) -> PgPool {
    let mut attempt = 0;
    loop {
        match PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await
        {
            Ok(pool) => return pool,
            Err(e) => {
                attempt += 1;
                if attempt > 5 {
                    panic!("Failed to connect to database after 5 retries: {}", e);
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", attempt);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}
