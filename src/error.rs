//! Error types for asset loading and per-request assessment.

use std::path::PathBuf;
use thiserror::Error;

/// Terminal failure of a single assessment. None of these are retried and
/// none carry a probability.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid input: {field} {reason}")]
    InputValidation { field: &'static str, reason: String },

    #[error("scaling failed: {0}")]
    Scaling(String),

    #[error("prediction failed: {0}")]
    Prediction(String),
}

impl AssessmentError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AssessmentError::InputValidation {
            field,
            reason: reason.into(),
        }
    }

    /// Stable identifier used in log lines and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            AssessmentError::Configuration(_) => "configuration_error",
            AssessmentError::InputValidation { .. } => "input_validation_error",
            AssessmentError::Scaling(_) => "scaling_error",
            AssessmentError::Prediction(_) => "prediction_error",
        }
    }
}

/// Failure while reading the configuration file or the classifier and
/// scaler artifacts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("ONNX runtime error: {0}")]
    Onnx(#[from] ort::Error),

    #[error("invalid artifact {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}
