//! Body-mass index, the one derived feature.

use serde::{Deserialize, Serialize};

/// `weight_kg / (height_cm / 100)^2`; 0.0 when height is not positive.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    if height_cm > 0.0 {
        let m = height_cm / 100.0;
        weight_kg / (m * m)
    } else {
        0.0
    }
}

/// WHO adult BMI bands, display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_value() {
        let v = bmi(170.0, 70.0);
        assert!((v - 24.22).abs() < 1e-2, "bmi = {v}");
    }

    #[test]
    fn non_positive_height_yields_zero() {
        assert_eq!(bmi(0.0, 70.0), 0.0);
        assert_eq!(bmi(-10.0, 70.0), 0.0);
    }

    #[test]
    fn monotone_in_weight_and_height() {
        for h in [60.0, 120.0, 170.0, 249.0] {
            let mut prev = bmi(h, 21.0);
            for w in [30.0, 55.5, 80.0, 120.0, 199.0] {
                let cur = bmi(h, w);
                assert!(cur > prev);
                prev = cur;
            }
        }
        for w in [25.0, 70.0, 150.0] {
            let mut prev = bmi(51.0, w);
            for h in [80.0, 140.0, 190.0, 250.0] {
                let cur = bmi(h, w);
                assert!(cur < prev);
                prev = cur;
            }
        }
    }

    #[test]
    fn categories() {
        assert_eq!(bmi_category(17.0), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Normal);
        assert_eq!(bmi_category(24.22), BmiCategory::Normal);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(31.0), BmiCategory::Obese);
    }
}
