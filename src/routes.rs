// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{auth, quiz, score},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the application router.
///
/// Sub-routers nest under `/api/...`; the two mutating routes sit behind
/// the bearer middleware. Trace and CORS layers wrap the whole tree.
pub fn create_router(state: AppState) -> Router {
    let mut origins: Vec<HeaderValue> = vec![
        "http://localhost:5173".parse().unwrap(),
        "http://127.0.0.1:5173".parse().unwrap(),
        "http://localhost:3000".parse().unwrap(),
    ];
    if let Some(frontend) = state
        .config
        .frontend_url
        .as_deref()
        .and_then(|u| u.parse::<HeaderValue>().ok())
    {
        origins.push(frontend);
    }

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new().route("/guest", post(auth::guest_login));

    let quiz_routes = Router::new()
        .route("/", get(quiz::list_questions))
        .route(
            "/",
            post(quiz::create_question).route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        );

    let score_routes = Router::new()
        .route("/top", get(score::top_scores))
        // Protected score routes
        .merge(
            Router::new()
                .route("/add", post(score::add_score))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    Router::new()
        .route("/", get(|| async { "Arabian Nights Quiz API is running" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/quiz", quiz_routes)
        .nest("/api/score", score_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
