//! Patient intake record: the fields a single submission carries, with the
//! form's initial values and declared bounds.

mod validate;

pub use validate::{bounds, validate};

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

/// Ordinal laboratory level as recorded in the training data (1, 2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(pub u8);

impl Level {
    pub const NORMAL: Level = Level(1);
    pub const ABOVE_NORMAL: Level = Level(2);
    pub const WELL_ABOVE_NORMAL: Level = Level(3);

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "normal",
            2 => "above normal",
            3 => "well above normal",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

/// One submission. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Age in whole years
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Systolic blood pressure (mmHg)
    pub systolic_bp: i32,
    /// Diastolic blood pressure (mmHg)
    pub diastolic_bp: i32,
    pub cholesterol: Level,
    pub glucose: Level,
    pub smoker: bool,
    pub alcohol_user: bool,
    pub physically_active: bool,
}

impl Default for PatientInput {
    fn default() -> Self {
        Self {
            age: 50,
            gender: Gender::Female,
            height_cm: 170.0,
            weight_kg: 70.0,
            systolic_bp: 120,
            diastolic_bp: 80,
            cholesterol: Level::NORMAL,
            glucose: Level::NORMAL,
            smoker: false,
            alcohol_user: false,
            physically_active: true,
        }
    }
}

impl PatientInput {
    /// Parse a JSON record. Bounds are not checked here.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snake_case_gender_and_plain_levels() {
        let json = r#"{
            "age": 61, "gender": "male", "height_cm": 182.0, "weight_kg": 95.5,
            "systolic_bp": 150, "diastolic_bp": 95, "cholesterol": 3, "glucose": 2,
            "smoker": true, "alcohol_user": false, "physically_active": false
        }"#;
        let p = PatientInput::from_json(json).unwrap();
        assert_eq!(p.gender, Gender::Male);
        assert_eq!(p.cholesterol, Level::WELL_ABOVE_NORMAL);
        assert_eq!(p.glucose.label(), "above normal");
        assert!(p.smoker);
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{"age": 40, "gender": "female"}"#;
        assert!(PatientInput::from_json(json).is_err());
    }

    #[test]
    fn defaults_match_form_initial_values() {
        let p = PatientInput::default();
        assert_eq!(p.age, 50);
        assert_eq!(p.gender, Gender::Female);
        assert_eq!((p.systolic_bp, p.diastolic_bp), (120, 80));
        assert!(p.physically_active);
        assert!(validate(&p).is_ok());
    }
}
