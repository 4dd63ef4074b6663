//! Declared field bounds, checked before a record is encoded.

use super::{Level, PatientInput};
use crate::error::AssessmentError;

pub mod bounds {
    pub const AGE: (u32, u32) = (18, 100);
    /// Exclusive lower bound, inclusive upper bound
    pub const HEIGHT_CM: (f64, f64) = (50.0, 250.0);
    /// Exclusive lower bound, inclusive upper bound
    pub const WEIGHT_KG: (f64, f64) = (20.0, 200.0);
    pub const SYSTOLIC_BP: (i32, i32) = (70, 250);
    pub const DIASTOLIC_BP: (i32, i32) = (40, 180);
    pub const LEVEL: (u8, u8) = (1, 3);
}

/// Reject the first field outside its declared bound.
pub fn validate(p: &PatientInput) -> Result<(), AssessmentError> {
    let (lo, hi) = bounds::AGE;
    if !(lo..=hi).contains(&p.age) {
        return Err(AssessmentError::invalid(
            "age",
            format!("must be in [{lo}, {hi}], got {}", p.age),
        ));
    }
    open_closed("height_cm", p.height_cm, bounds::HEIGHT_CM)?;
    open_closed("weight_kg", p.weight_kg, bounds::WEIGHT_KG)?;
    closed("systolic_bp", p.systolic_bp, bounds::SYSTOLIC_BP)?;
    closed("diastolic_bp", p.diastolic_bp, bounds::DIASTOLIC_BP)?;
    level("cholesterol", p.cholesterol)?;
    level("glucose", p.glucose)?;
    Ok(())
}

fn open_closed(field: &'static str, v: f64, (lo, hi): (f64, f64)) -> Result<(), AssessmentError> {
    // NaN fails both comparisons
    if v.is_finite() && v > lo && v <= hi {
        Ok(())
    } else {
        Err(AssessmentError::invalid(
            field,
            format!("must be in ({lo}, {hi}], got {v}"),
        ))
    }
}

fn closed(field: &'static str, v: i32, (lo, hi): (i32, i32)) -> Result<(), AssessmentError> {
    if (lo..=hi).contains(&v) {
        Ok(())
    } else {
        Err(AssessmentError::invalid(
            field,
            format!("must be in [{lo}, {hi}], got {v}"),
        ))
    }
}

fn level(field: &'static str, v: Level) -> Result<(), AssessmentError> {
    let (lo, hi) = bounds::LEVEL;
    if (lo..=hi).contains(&v.0) {
        Ok(())
    } else {
        Err(AssessmentError::invalid(
            field,
            format!("must be one of 1, 2, 3, got {}", v.0),
        ))
    }
}
