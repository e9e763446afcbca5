// src/handlers/auth.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{config::Config, error::AppError, utils::jwt::sign_guest_token};

/// DTO for requesting a guest session. The name is optional; absent or
/// blank names fall back to "Guest".
#[derive(Debug, Deserialize)]
pub struct GuestLoginRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// Issues a guest credential.
///
/// No registration: any display name gets a signed bearer token carrying
/// the name and the guest identity marker, valid for the configured window.
pub async fn guest_login(
    State(config): State<Config>,
    Json(payload): Json<GuestLoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload
        .username
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Guest".to_string());

    let token = sign_guest_token(&name, &config.jwt_secret, config.jwt_expiration)?;

    Ok(Json(json!({
        "token": token,
        "type": "Bearer"
    })))
}
