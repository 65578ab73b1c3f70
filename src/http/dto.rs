//! Data Transfer Objects for the HTTP API.
//!
//! The catalog and system wire types already derive Serialize in the
//! models module; only the endpoints with bespoke payloads get DTOs here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response for the landing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingResponse {
    /// Service name
    pub service: String,
    /// Status of the service
    pub status: String,
    /// Available endpoint paths
    pub endpoints: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Catalog data directory as configured
    pub data_dir: String,
    /// Per-mission source file availability, keyed by route token
    pub catalogs: HashMap<String, bool>,
    /// Model status: "loaded" or "unavailable"
    pub model: String,
}

/// Request body for single prediction: a named feature map.
pub type PredictRequest = HashMap<String, f64>;

/// Response for single prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Decoded class label
    pub label: String,
    /// Softmax probabilities in class order
    pub probabilities: Vec<f64>,
    /// Class labels matching the probabilities
    pub classes: Vec<String>,
}
