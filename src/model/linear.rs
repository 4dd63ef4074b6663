//! Logistic-regression classifier stored as plain JSON coefficients.

use super::{read_json, Classifier};
use crate::error::{AssessmentError, LoadError};
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticClassifier {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticClassifier {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let c: LogisticClassifier = read_json(path)?;
        if c.coefficients.is_empty() {
            return Err(LoadError::Invalid {
                path: path.to_path_buf(),
                reason: "no coefficients".to_string(),
            });
        }
        Ok(c)
    }
}

impl Classifier for LogisticClassifier {
    fn score(&self, features: &FeatureVector) -> Result<f64, AssessmentError> {
        if features.dim() != self.coefficients.len() {
            return Err(AssessmentError::Prediction(format!(
                "model expects {} features, got {}",
                self.coefficients.len(),
                features.dim()
            )));
        }
        let z: f64 = features
            .as_slice()
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.intercept;
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}
