// src/utils/jwt.rs

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::Config, error::AppError};

/// Subject stamped into every guest token. Guests are the only identity
/// kind in this system.
pub const GUEST_SUBJECT: &str = "guest";

/// Claims carried by a guest session token.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Claims {
    /// Identity marker; always `GUEST_SUBJECT`.
    pub sub: String,
    /// Display name chosen by the player.
    pub name: String,
    /// Expiration as a Unix timestamp. `jsonwebtoken` rejects expired
    /// tokens on decode, so the validity window needs no extra check.
    pub exp: usize,
}

/// Signs a guest session token carrying the display name.
pub fn sign_guest_token(
    name: &str,
    secret: &str,
    expiration_seconds: u64,
) -> Result<String, AppError> {
    let expires_at = chrono::Utc::now().timestamp() as usize + expiration_seconds as usize;

    let claims = Claims {
        sub: GUEST_SUBJECT.to_owned(),
        name: name.to_owned(),
        exp: expires_at,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.to_string()))
}

/// Verifies and decodes a token string, returning its `Claims`.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

    Ok(token_data.claims)
}

/// Bearer-token middleware for the protected routes.
///
/// Pulls the token out of `Authorization: Bearer <token>`, verifies it
/// and injects the `Claims` into the request extensions; anything else
/// becomes a 401 with the usual JSON error body.
pub async fn auth_middleware(
    State(config): State<Config>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

    let claims = verify_jwt(token, &config.jwt_secret)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
