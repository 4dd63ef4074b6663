//! Externally trained artifacts: the classifier and optional feature scaler.
//!
//! Both are loaded once at startup and shared read-only behind the
//! [`Classifier`] and [`Scaler`] traits.

mod linear;
mod onnx;
mod scaler;

pub use linear::LogisticClassifier;
pub use onnx::OnnxClassifier;
pub use scaler::StandardScaler;

use crate::config::{ClassifierFormat, ModelConfig};
use crate::error::{AssessmentError, LoadError};
use crate::features::FeatureVector;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Produces the probability of the positive (disease) class.
pub trait Classifier: Send + Sync {
    fn score(&self, features: &FeatureVector) -> Result<f64, AssessmentError>;
}

/// Fitted transform applied before scoring.
pub trait Scaler: Send + Sync {
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, AssessmentError>;
}

/// Artifacts as found on disk. Either may be absent.
#[derive(Clone, Default)]
pub struct ModelAssets {
    pub classifier: Option<Arc<dyn Classifier>>,
    pub scaler: Option<Arc<dyn Scaler>>,
}

impl ModelAssets {
    /// Missing files are tolerated (logged); files that exist but do not
    /// load are an error.
    pub fn load(config: &ModelConfig) -> Result<Self, LoadError> {
        let classifier: Option<Arc<dyn Classifier>> = if config.classifier_path.exists() {
            let c: Arc<dyn Classifier> = match config.classifier_format {
                ClassifierFormat::Onnx => Arc::new(OnnxClassifier::load(&config.classifier_path)?),
                ClassifierFormat::Logistic => {
                    Arc::new(LogisticClassifier::load(&config.classifier_path)?)
                }
            };
            info!(path = %config.classifier_path.display(), format = ?config.classifier_format, "classifier loaded");
            Some(c)
        } else {
            error!(path = %config.classifier_path.display(), "classifier not found; assessments will fail");
            None
        };

        let scaler: Option<Arc<dyn Scaler>> = match config.scaler_path.as_deref() {
            Some(path) if path.exists() => {
                let s = StandardScaler::load(path)?;
                info!(path = %path.display(), "scaler loaded");
                Some(Arc::new(s))
            }
            Some(path) => {
                warn!(path = %path.display(), "scaler not found; predictions may be inaccurate without scaling");
                None
            }
            None => {
                warn!("no scaler configured; scoring raw features");
                None
            }
        };

        Ok(Self { classifier, scaler })
    }
}

pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let data = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
