use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::scoring::ScoreError;

/// Anything that can go wrong while serving a request. Clients only ever see
/// a generic 500; the detail is logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid query string: {0}")]
    Query(#[from] QueryRejection),

    #[error("invalid request body: {0}")]
    Json(#[from] JsonRejection),

    #[error("could not read request body: {0}")]
    Body(#[from] axum::Error),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal server error" })),
        )
            .into_response()
    }
}
