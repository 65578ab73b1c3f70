//! Candidate classification.
//!
//! The model is a pre-trained multiclass classifier exported as a
//! self-contained JSON artifact bundle: scaler parameters, per-class
//! linear scores and the label order. Inference is three steps —
//! scale, score, decode label — with no further numerical work.
//!
//! Artifacts are loaded once at startup and shared read-only with every
//! request handler.

pub mod artifacts;
pub mod predictor;

pub use artifacts::ModelArtifacts;
pub use predictor::{Prediction, Predictor};

/// Result type for prediction operations.
pub type PredictResult<T> = Result<T, PredictError>;

/// Error type for artifact loading and inference.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The artifact bundle does not exist.
    #[error("model artifacts not found: {path}")]
    ArtifactNotFound { path: String },

    /// The bundle exists but is unreadable or internally inconsistent.
    #[error("invalid model artifacts: {0}")]
    InvalidArtifact(String),

    /// An input is missing a feature the model requires.
    #[error("missing feature '{0}'")]
    MissingFeature(String),

    /// The request payload could not be interpreted.
    #[error("bad prediction input: {0}")]
    BadInput(String),
}
