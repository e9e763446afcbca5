// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Number of questions served when the client omits `limit` or sends junk.
pub const DEFAULT_QUESTION_COUNT: i64 = 10;

/// Number of entries returned by the leaderboard.
pub const TOP_SCORES_LIMIT: i64 = 10;

/// Guest tokens stay valid for a week.
pub const GUEST_TOKEN_SECONDS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub port: u16,
    pub frontend_url: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(GUEST_TOKEN_SECONDS);

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        let frontend_url = env::var("FRONTEND_URL").ok();

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            port,
            frontend_url,
            rust_log,
        }
    }
}
