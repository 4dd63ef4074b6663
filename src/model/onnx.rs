//! ONNX Runtime inference. Input: [1, 12] f32, output: class probabilities.
//! Exports of tree ensembles and linear models are both accepted as long as
//! the probability output is a plain tensor (no ZipMap).

use super::Classifier;
use crate::error::{AssessmentError, LoadError};
use crate::features::FeatureVector;
use ndarray::Array2;
use std::path::Path;
use std::sync::Once;

static ORT_INIT: Once = Once::new();

fn init_env() {
    ORT_INIT.call_once(|| {
        if let Err(e) = ort::init().with_name("cardio-risk").commit() {
            tracing::warn!(error = %e, "ONNX runtime initialization failed");
        }
    });
}

/// Output names checked first when picking the probability tensor.
const PROBABILITY_OUTPUTS: [&str; 3] = ["probabilities", "output_probability", "probability"];

pub struct OnnxClassifier {
    session: ort::Session,
    input_name: String,
    output_name: String,
}

impl OnnxClassifier {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        init_env();
        let session = ort::Session::builder()?.commit_from_file(path)?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input".to_string());

        let candidates: Vec<(&str, bool)> = session
            .outputs
            .iter()
            .map(|o| {
                let float_tensor = matches!(
                    o.output_type,
                    ort::ValueType::Tensor {
                        ty: ort::TensorElementType::Float32,
                        ..
                    }
                );
                (o.name.as_str(), float_tensor)
            })
            .collect();
        let output_name = select_output(&candidates)
            .map(str::to_string)
            .ok_or_else(|| LoadError::Invalid {
                path: path.to_path_buf(),
                reason: "no float tensor output; export the classifier with zipmap=False"
                    .to_string(),
            })?;

        tracing::debug!(input = %input_name, output = %output_name, "ONNX session ready");

        Ok(Self {
            session,
            input_name,
            output_name,
        })
    }

    fn run(&self, arr: Array2<f32>) -> Result<Vec<f32>, ort::Error> {
        let input = ort::Tensor::from_array(arr)?;
        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input]?)?;
        let view = outputs[self.output_name.as_str()].try_extract_tensor::<f32>()?;
        Ok(view.iter().copied().collect())
    }
}

impl Classifier for OnnxClassifier {
    fn score(&self, features: &FeatureVector) -> Result<f64, AssessmentError> {
        let arr = Array2::from_shape_vec((1, features.dim()), features.to_f32())
            .map_err(|e| AssessmentError::Prediction(e.to_string()))?;
        let out = self
            .run(arr)
            .map_err(|e| AssessmentError::Prediction(e.to_string()))?;
        positive_class(&out).map_err(|n| {
            AssessmentError::Prediction(format!(
                "unexpected output of {} values from '{}'",
                n, self.output_name
            ))
        })
    }
}

/// Pick the probability output among `(name, is_float_tensor)` pairs.
/// Non-tensor outputs (ZipMap sequences, int64 labels) are never chosen.
fn select_output<'a>(outputs: &[(&'a str, bool)]) -> Option<&'a str> {
    let tensors = || outputs.iter().filter(|(_, t)| *t).map(|(n, _)| *n);
    PROBABILITY_OUTPUTS
        .iter()
        .find_map(|want| tensors().find(|n| n == want))
        .or_else(|| tensors().last())
}

/// `[p0, p1]` yields `p1`; a single value is taken as the probability.
/// Any other length is returned as the error.
fn positive_class(out: &[f32]) -> Result<f64, usize> {
    match out {
        [p] => Ok(*p as f64),
        [_, p1] => Ok(*p1 as f64),
        other => Err(other.len()),
    }
}
