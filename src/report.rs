use std::fmt::Write;

use crate::error::AssessmentError;
use crate::risk::RiskAssessment;

/// Text result panel for one assessment.
pub fn render(a: &RiskAssessment) -> String {
    let mut output = String::new();
    let p = &a.echoed_inputs;

    let _ = writeln!(output, "# Cardiovascular Risk Assessment");
    let _ = writeln!(
        output,
        "Body-mass index: {:.2} ({})",
        a.bmi,
        a.bmi_category.label()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Result: {}", a.tier.as_str().to_uppercase());
    let _ = writeln!(output, "{}", a.advice.headline);
    let _ = writeln!(
        output,
        "Estimated probability of risk: {:.2}%",
        a.probability * 100.0
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "{}", a.advice.recommendation);
    if !a.scaled {
        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "Warning: scored without feature scaling; the estimate may be inaccurate."
        );
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "## Inputs");
    let _ = writeln!(
        output,
        "- Age {} | {:?} | {:.1} cm | {:.1} kg",
        p.age, p.gender, p.height_cm, p.weight_kg
    );
    let _ = writeln!(
        output,
        "- Blood pressure {}/{} mmHg",
        p.systolic_bp, p.diastolic_bp
    );
    let _ = writeln!(
        output,
        "- Cholesterol {} | Glucose {}",
        p.cholesterol, p.glucose
    );
    let _ = writeln!(
        output,
        "- Smoker: {} | Alcohol: {} | Active: {}",
        yes_no(p.smoker),
        yes_no(p.alcohol_user),
        yes_no(p.physically_active)
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "Model probability: {:.4}", a.probability);
    output
}

/// Message for a failed assessment. Never includes a probability.
pub fn render_error(e: &AssessmentError) -> String {
    match e {
        AssessmentError::InputValidation { field, reason } => {
            format!("Invalid input: {field} {reason}. Correct the value and try again.")
        }
        AssessmentError::Configuration(msg) => {
            format!("The prediction model is not available ({msg}). Check the configuration.")
        }
        AssessmentError::Scaling(msg) => format!(
            "Could not scale the input data. Make sure all numeric fields are correct. Detail: {msg}"
        ),
        AssessmentError::Prediction(msg) => {
            format!("Could not compute a prediction. Detail: {msg}")
        }
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}
