use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::data::load_country_data;
use crate::enums::difficulty::Difficulty;
use crate::error::ApiError;
use crate::game::generate_round;
use crate::models::matches::{ValidateRequest, ValidateResponse};
use crate::models::round::GameRound;
use crate::scoring::score_matches;
use crate::states::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GameParams {
    pub difficulty: Option<String>,
    pub count: Option<usize>,
}

pub async fn health_handler() -> Json<Value> {
    tracing::info!("Health check requested");
    Json(json!({ "status": "healthy" }))
}

pub async fn game_handler(
    State(state): State<AppState>,
    params: Result<Query<GameParams>, QueryRejection>,
) -> Result<Json<GameRound>, ApiError> {
    tracing::info!("Game data requested");
    let Query(params) = params?;

    let difficulty = params
        .difficulty
        .as_deref()
        .map(Difficulty::from)
        .unwrap_or_default();
    let count = params.count.unwrap_or(state.settings.round_size);

    let data = load_country_data(&state.settings.data_file).await;
    let round = generate_round(&data, difficulty, count, &mut rand::rng());
    tracing::debug!(?difficulty, countries = round.countries.len(), "Round generated");

    Ok(Json(round))
}

pub async fn validate_matches_handler(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError> {
    tracing::info!("Validate matches requested");
    let Json(request) = payload?;

    let result = score_matches(&request.matches, &request.correct_matches)?;
    Ok(Json(result))
}
