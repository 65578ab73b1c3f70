//! Inference: scale, score, decode label.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::RawTable;

use super::artifacts::ModelArtifacts;
use super::{PredictError, PredictResult};

/// Result of classifying one feature vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Decoded class label.
    pub label: String,
    /// Softmax probabilities in class order (see [`Predictor::classes`]).
    pub probabilities: Vec<f64>,
}

/// Read-only inference engine built from loaded artifacts.
#[derive(Debug, Clone)]
pub struct Predictor {
    artifacts: ModelArtifacts,
}

impl Predictor {
    pub fn new(artifacts: ModelArtifacts) -> Self {
        Self { artifacts }
    }

    /// Load artifacts from a directory and build the predictor.
    pub fn load(dir: &Path) -> PredictResult<Self> {
        Ok(Self::new(ModelArtifacts::load(dir)?))
    }

    /// Class labels in probability order.
    pub fn classes(&self) -> &[String] {
        &self.artifacts.classes
    }

    /// Feature names in model order.
    pub fn feature_names(&self) -> &[String] {
        &self.artifacts.feature_names
    }

    /// Classify a named feature map. Every model feature must be present.
    pub fn predict(&self, features: &HashMap<String, f64>) -> PredictResult<Prediction> {
        let mut vector = Vec::with_capacity(self.artifacts.feature_names.len());
        for name in &self.artifacts.feature_names {
            let value = features
                .get(name)
                .copied()
                .ok_or_else(|| PredictError::MissingFeature(name.clone()))?;
            vector.push(value);
        }
        Ok(self.predict_vector(&vector))
    }

    /// Classify every row of an uploaded CSV and return the input with a
    /// `predicted_label` column and one `<CLASS>_prob` column per class
    /// appended.
    pub fn predict_csv(&self, content: &str) -> PredictResult<String> {
        let table =
            RawTable::from_csv_str(content).map_err(|e| PredictError::BadInput(e.to_string()))?;
        if table.is_empty() {
            return Err(PredictError::BadInput("no data rows in upload".to_string()));
        }

        let source_columns: Vec<String> =
            table.column_names().iter().map(|s| s.to_string()).collect();

        let mut writer = csv::Writer::from_writer(Vec::new());
        let mut header: Vec<String> = source_columns.clone();
        header.push("predicted_label".to_string());
        for class in self.classes() {
            header.push(format!("{}_prob", class));
        }
        writer
            .write_record(&header)
            .map_err(|e| PredictError::BadInput(e.to_string()))?;

        for (row_index, row) in table.rows().enumerate() {
            let mut vector = Vec::with_capacity(self.artifacts.feature_names.len());
            for name in &self.artifacts.feature_names {
                let value = row.get_f64(name).ok_or_else(|| {
                    PredictError::MissingFeature(format!("{} (row {})", name, row_index + 1))
                })?;
                vector.push(value);
            }
            let prediction = self.predict_vector(&vector);

            let mut record: Vec<String> = source_columns
                .iter()
                .map(|column| row.get(column).unwrap_or_default().to_string())
                .collect();
            record.push(prediction.label);
            for probability in prediction.probabilities {
                record.push(probability.to_string());
            }
            writer
                .write_record(&record)
                .map_err(|e| PredictError::BadInput(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| PredictError::BadInput(e.to_string()))?;
        String::from_utf8(bytes)
            .map_err(|e| PredictError::BadInput(format!("non-utf8 output: {}", e)))
    }

    /// The three inference steps: standardize, linear class scores, softmax
    /// with argmax label decode.
    fn predict_vector(&self, features: &[f64]) -> Prediction {
        let scaled: Vec<f64> = features
            .iter()
            .zip(&self.artifacts.scaler.mean)
            .zip(&self.artifacts.scaler.scale)
            .map(|((value, mean), scale)| (value - mean) / scale)
            .collect();

        let scores: Vec<f64> = self
            .artifacts
            .weights
            .iter()
            .zip(&self.artifacts.intercepts)
            .map(|(row, intercept)| {
                row.iter()
                    .zip(&scaled)
                    .map(|(weight, value)| weight * value)
                    .sum::<f64>()
                    + intercept
            })
            .collect();

        let probabilities = softmax(&scores);
        let best = probabilities
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(index, _)| index)
            .unwrap_or(0);

        Prediction {
            label: self.artifacts.classes[best].clone(),
            probabilities,
        }
    }
}

/// Numerically stable softmax.
fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}
