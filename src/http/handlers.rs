//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer. Catalog work is synchronous file reading and in-memory
//! transformation, so it runs under `spawn_blocking`.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use super::dto::{HealthResponse, LandingResponse, PredictRequest, PredictResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::{Mission, PlanetRecord, SystemRecord};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
///
/// Landing endpoint listing the available API surface.
pub async fn landing() -> Json<LandingResponse> {
    Json(LandingResponse {
        service: "exovis-backend".to_string(),
        status: "ok".to_string(),
        endpoints: vec![
            "/health".to_string(),
            "/api/exoplanets/{mission}".to_string(),
            "/api/systems".to_string(),
            "/api/summary".to_string(),
            "/api/predict".to_string(),
            "/api/predict/batch".to_string(),
        ],
    })
}

/// GET /health
///
/// Reports catalog file availability and model status.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut catalogs = HashMap::new();
    for mission in Mission::ALL {
        catalogs.insert(mission.to_string(), state.store.is_available(mission));
    }

    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        data_dir: state.store.data_dir().display().to_string(),
        catalogs,
        model: if state.predictor.is_some() {
            "loaded".to_string()
        } else {
            "unavailable".to_string()
        },
    })
}

/// GET /api/exoplanets/{mission}
///
/// Normalized catalog for one mission. Unknown mission tokens are 404.
pub async fn get_mission_catalog(
    State(state): State<AppState>,
    Path(mission): Path<String>,
) -> HandlerResult<Vec<PlanetRecord>> {
    let mission =
        Mission::from_str(&mission).map_err(|_| AppError::UnknownMission(mission.clone()))?;

    let store = Arc::clone(&state.store);
    let records = tokio::task::spawn_blocking(move || {
        services::load_mission_catalog(&store, mission)
    })
    .await
    .map_err(|e| AppError::Internal(format!("task join error: {}", e)))??;

    Ok(Json(records))
}

/// GET /api/systems
///
/// Multi-planet systems derived from the Kepler and K2 confirmed subsets.
/// A missing mission source is non-fatal; both missing yields an empty
/// array, not an error.
pub async fn get_planet_systems(
    State(state): State<AppState>,
) -> HandlerResult<Vec<SystemRecord>> {
    let store = Arc::clone(&state.store);
    let systems = tokio::task::spawn_blocking(move || services::load_planet_systems(&store))
        .await
        .map_err(|e| AppError::Internal(format!("task join error: {}", e)))??;

    Ok(Json(systems))
}

/// GET /api/summary
///
/// Per-mission record counts and source fingerprints, best-effort.
pub async fn get_catalog_summary(
    State(state): State<AppState>,
) -> HandlerResult<services::CatalogSummary> {
    let store = Arc::clone(&state.store);
    let summary = tokio::task::spawn_blocking(move || services::load_catalog_summary(&store))
        .await
        .map_err(|e| AppError::Internal(format!("task join error: {}", e)))?;

    Ok(Json(summary))
}

/// POST /api/predict
///
/// Classify a single named feature vector.
pub async fn predict(
    State(state): State<AppState>,
    Json(features): Json<PredictRequest>,
) -> HandlerResult<PredictResponse> {
    let predictor = state.predictor.ok_or(AppError::ModelUnavailable)?;
    let prediction = predictor.predict(&features)?;

    Ok(Json(PredictResponse {
        label: prediction.label,
        probabilities: prediction.probabilities,
        classes: predictor.classes().to_vec(),
    }))
}

/// POST /api/predict/batch
///
/// Classify every row of an uploaded CSV. Returns the input CSV with the
/// prediction columns appended.
pub async fn predict_batch(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let predictor = state.predictor.clone().ok_or(AppError::ModelUnavailable)?;

    let output = tokio::task::spawn_blocking(move || predictor.predict_csv(&body))
        .await
        .map_err(|e| AppError::Internal(format!("task join error: {}", e)))??;

    Ok(([(header::CONTENT_TYPE, "text/csv")], output))
}
