//! Encoder: validated patient record → `FeatureVector` in model column order.

use super::{bmi, FeatureVector, FEATURE_DIM};
use crate::error::AssessmentError;
use crate::patient::{self, Gender, PatientInput};

#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Validate and encode. Column order matches `FEATURE_COLUMNS`.
    pub fn encode(&self, p: &PatientInput) -> Result<FeatureVector, AssessmentError> {
        patient::validate(p)?;
        let values = vec![
            match p.gender {
                Gender::Female => 0.0,
                Gender::Male => 1.0,
            },
            p.height_cm,
            p.weight_kg,
            p.systolic_bp as f64,
            p.diastolic_bp as f64,
            p.cholesterol.0 as f64,
            p.glucose.0 as f64,
            flag(p.smoker),
            flag(p.alcohol_user),
            flag(p.physically_active),
            p.age as f64,
            bmi(p.height_cm, p.weight_kg),
        ];
        debug_assert_eq!(values.len(), FEATURE_DIM);
        Ok(FeatureVector::new(values))
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}
