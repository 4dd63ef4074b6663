//! Cardiovascular risk assessment from a patient intake record.
//!
//! Modular structure:
//! - [`patient`] — Intake record, form defaults, field bounds
//! - [`features`] — Fixed-order feature encoding and BMI
//! - [`model`] — Classifier and scaler artifacts (ONNX, JSON)
//! - [`risk`] — Scorer, tier bands, advice, assessment engine
//! - [`report`] — Text rendering of results and failures
//! - [`logging`] — Structured logging

pub mod config;
pub mod error;
pub mod patient;
pub mod features;
pub mod model;
pub mod risk;
pub mod report;
pub mod logging;

pub use config::AppConfig;
pub use error::{AssessmentError, LoadError};
pub use patient::{Gender, Level, PatientInput};
pub use features::{bmi, FeatureEncoder, FeatureVector};
pub use model::{Classifier, ModelAssets, OnnxClassifier, Scaler};
pub use risk::{RiskAssessment, RiskEngine, RiskScorer, RiskTier, TierTable};
pub use logging::StructuredLogger;
