//! Standardization parameters exported from a fitted scaler (`mean_`, `scale_`).

use super::{read_json, Scaler};
use crate::error::{AssessmentError, LoadError};
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let s: StandardScaler = read_json(path)?;
        if s.mean.len() != s.scale.len() {
            return Err(LoadError::Invalid {
                path: path.to_path_buf(),
                reason: format!(
                    "mean has {} entries but scale has {}",
                    s.mean.len(),
                    s.scale.len()
                ),
            });
        }
        Ok(s)
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, AssessmentError> {
        if features.dim() != self.mean.len() || features.dim() != self.scale.len() {
            return Err(AssessmentError::Scaling(format!(
                "scaler expects {} features, got {}",
                self.mean.len(),
                features.dim()
            )));
        }
        let values = features
            .as_slice()
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (m, s))| {
                // zero variance columns are left unscaled
                let s = if *s == 0.0 { 1.0 } else { *s };
                (x - m) / s
            })
            .collect::<Vec<f64>>();
        if values.iter().any(|v| !v.is_finite()) {
            return Err(AssessmentError::Scaling(
                "transform produced a non-finite value".to_string(),
            ));
        }
        Ok(FeatureVector::new(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standardizes_each_column() {
        let s = StandardScaler::new(vec![1.0, 10.0, 5.0], vec![2.0, 5.0, 0.0]);
        let out = s.transform(&FeatureVector::new(vec![3.0, 0.0, 7.0])).unwrap();
        assert_eq!(out.values, vec![1.0, -2.0, 2.0]);
    }

    #[test]
    fn shape_mismatch_is_a_scaling_error() {
        let s = StandardScaler::new(vec![0.0; 11], vec![1.0; 11]);
        let err = s.transform(&FeatureVector::new(vec![0.0; 12])).unwrap_err();
        assert_eq!(err.kind(), "scaling_error");
    }

    #[test]
    fn mismatched_parameters_fail_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        std::fs::write(&path, r#"{"mean":[0,0],"scale":[1]}"#).unwrap();
        assert!(matches!(StandardScaler::load(&path), Err(LoadError::Invalid { .. })));
    }
}
