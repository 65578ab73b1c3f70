//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;
use crate::predict::PredictError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Unknown mission token in the request path
    UnknownMission(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Predict endpoints called without loaded artifacts
    ModelUnavailable,
    /// Internal server error
    Internal(String),
    /// Catalog read/parse error
    Catalog(CatalogError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::UnknownMission(mission) => (
                StatusCode::NOT_FOUND,
                ApiError::new(
                    "UNKNOWN_MISSION",
                    format!("unknown mission '{}'; expected kepler, tess or k2", mission),
                ),
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::ModelUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new(
                    "MODEL_UNAVAILABLE",
                    "no model artifacts loaded; prediction endpoints are disabled",
                ),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Catalog(err) => match err {
                CatalogError::SourceNotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    ApiError::new("SOURCE_NOT_FOUND", err.to_string()),
                ),
                CatalogError::Malformed { .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("MALFORMED_SOURCE", err.to_string()),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::Catalog(err)
    }
}

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::MissingFeature(_) | PredictError::BadInput(_) => {
                AppError::BadRequest(err.to_string())
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
