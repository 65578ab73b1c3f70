//! Model artifact bundle.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{PredictError, PredictResult};

/// File name of the artifact bundle inside the model directory.
pub const ARTIFACT_FILE: &str = "model.json";

/// Standardization parameters fitted during training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Everything needed to run inference: feature order, scaler, per-class
/// weights and the label order used to decode predictions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifacts {
    /// Input features in model order.
    pub feature_names: Vec<String>,
    pub scaler: ScalerParams,
    /// Class labels in score order.
    pub classes: Vec<String>,
    /// One weight row per class, one column per feature.
    pub weights: Vec<Vec<f64>>,
    /// One intercept per class.
    pub intercepts: Vec<f64>,
}

impl ModelArtifacts {
    /// Load and validate the bundle from `<dir>/model.json`.
    pub fn load(dir: &Path) -> PredictResult<Self> {
        let path = dir.join(ARTIFACT_FILE);
        if !path.is_file() {
            return Err(PredictError::ArtifactNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(&path).map_err(|e| {
            PredictError::InvalidArtifact(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a bundle held in memory.
    pub fn from_json_str(content: &str) -> PredictResult<Self> {
        let artifacts: Self = serde_json::from_str(content)
            .map_err(|e| PredictError::InvalidArtifact(e.to_string()))?;
        artifacts.validate()?;
        Ok(artifacts)
    }

    /// Check dimensional agreement between the parts of the bundle.
    fn validate(&self) -> PredictResult<()> {
        let features = self.feature_names.len();
        let classes = self.classes.len();

        if features == 0 {
            return Err(PredictError::InvalidArtifact(
                "bundle declares no features".to_string(),
            ));
        }
        if classes == 0 {
            return Err(PredictError::InvalidArtifact(
                "bundle declares no classes".to_string(),
            ));
        }
        if self.scaler.mean.len() != features || self.scaler.scale.len() != features {
            return Err(PredictError::InvalidArtifact(format!(
                "scaler dimensions {}/{} do not match {} features",
                self.scaler.mean.len(),
                self.scaler.scale.len(),
                features
            )));
        }
        if self.weights.len() != classes || self.intercepts.len() != classes {
            return Err(PredictError::InvalidArtifact(format!(
                "weight rows {} / intercepts {} do not match {} classes",
                self.weights.len(),
                self.intercepts.len(),
                classes
            )));
        }
        for (index, row) in self.weights.iter().enumerate() {
            if row.len() != features {
                return Err(PredictError::InvalidArtifact(format!(
                    "weight row {} has {} columns, expected {}",
                    index,
                    row.len(),
                    features
                )));
            }
        }
        if self.scaler.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(PredictError::InvalidArtifact(
                "scaler contains a zero or non-finite scale".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_bundle_json() -> String {
    serde_json::json!({
        "feature_names": ["koi_period", "koi_prad", "koi_depth"],
        "scaler": {
            "mean": [10.0, 2.0, 500.0],
            "scale": [5.0, 1.0, 250.0]
        },
        "classes": ["CANDIDATE", "CONFIRMED", "FALSE_POSITIVE"],
        "weights": [
            [0.1, -0.2, 0.05],
            [1.5, 0.8, -0.3],
            [-1.2, -0.5, 0.9]
        ],
        "intercepts": [0.2, -0.1, -0.4]
    })
    .to_string()
}
