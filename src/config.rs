//! Application configuration: model artifacts, tier bands, advice copy, logging.

use crate::error::LoadError;
use crate::risk::{AdviceTable, Band, TierScheme};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Classifier and scaler artifacts
    pub model: ModelConfig,
    /// Probability → tier bands
    pub risk: RiskConfig,
    /// Per-tier recommendation text and display color
    pub advice: AdviceTable,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierFormat {
    Onnx,
    Logistic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub classifier_path: PathBuf,
    pub classifier_format: ClassifierFormat,
    /// Scoring proceeds unscaled when this is unset or the file is missing
    pub scaler_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub scheme: TierScheme,
    /// Custom band table; overrides `scheme` when set
    pub bands: Option<Vec<Band>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            classifier_path: PathBuf::from("cardio_model.onnx"),
            classifier_format: ClassifierFormat::Onnx,
            scaler_path: Some(PathBuf::from("scaler.json")),
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            scheme: TierScheme::ThreeBand,
            bands: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load from JSON file if present; otherwise return default. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn load(path: &std::path::Path) -> Result<Self, LoadError> {
        if path.exists() {
            crate::model::read_json(path)
        } else {
            Ok(Self::default())
        }
    }
}
