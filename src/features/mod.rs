//! Feature encoding: patient record → fixed-order numeric vector for the model.

mod bmi;
mod encoder;

pub use bmi::{bmi, bmi_category, BmiCategory};
pub use encoder::FeatureEncoder;

use serde::{Deserialize, Serialize};

/// Model-side column names in the order the classifier was trained on.
pub const FEATURE_COLUMNS: [&str; FEATURE_DIM] = [
    "gender",
    "height",
    "weight",
    "ap_hi",
    "ap_lo",
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
    "age_years",
    "imc",
];

pub const FEATURE_DIM: usize = 12;

/// Fixed-order feature vector, the sole input to the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn dim(&self) -> usize {
        self.values.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Value of a named column, if present.
    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == column)
            .and_then(|i| self.values.get(i).copied())
    }

    pub fn to_f32(&self) -> Vec<f32> {
        self.values.iter().map(|v| *v as f32).collect()
    }
}
