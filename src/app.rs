use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::{HeaderValue, Method, header};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::ApiError;
use crate::handlers::{game_handler, health_handler, validate_matches_handler};
use crate::states::app_state::AppState;

/// Request bodies are buffered whole so they can be logged; anything larger
/// than this fails the request with the usual 500.
const MAX_LOGGED_BODY: usize = 1024 * 1024;

pub fn build_app(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    let api = Router::new()
        .route("/health", get(health_handler))
        .route("/game", get(game_handler))
        .route("/validate_matches", post(validate_matches_handler));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn(log_request))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

async fn log_request(request: Request, next: Next) -> Result<Response, ApiError> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_LOGGED_BODY).await?;

    tracing::info!("{} {}", parts.method, parts.uri);
    tracing::info!("Headers: {:?}", parts.headers);
    tracing::info!("Body: {}", String::from_utf8_lossy(&bytes));

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
