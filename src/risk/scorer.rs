//! Feature vector → disease probability through the injected scaler and classifier.

use crate::error::AssessmentError;
use crate::features::FeatureVector;
use crate::model::{Classifier, ModelAssets, Scaler};
use std::sync::Arc;
use tracing::warn;

/// Classifier outputs are f32; allow rounding just past the unit interval.
const PROBABILITY_SLACK: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub probability: f64,
    /// False when no scaler was available
    pub scaled: bool,
}

#[derive(Clone)]
pub struct RiskScorer {
    classifier: Option<Arc<dyn Classifier>>,
    scaler: Option<Arc<dyn Scaler>>,
}

impl RiskScorer {
    pub fn new(classifier: Option<Arc<dyn Classifier>>, scaler: Option<Arc<dyn Scaler>>) -> Self {
        Self { classifier, scaler }
    }

    pub fn from_assets(assets: ModelAssets) -> Self {
        Self::new(assets.classifier, assets.scaler)
    }

    pub fn has_scaler(&self) -> bool {
        self.scaler.is_some()
    }

    /// Probability of the positive class. Without a scaler the raw vector is
    /// scored and `scaled` is false.
    pub fn score(&self, features: &FeatureVector) -> Result<Score, AssessmentError> {
        let classifier = self.classifier.as_ref().ok_or_else(|| {
            AssessmentError::Configuration("prediction model is not loaded".to_string())
        })?;

        let (probability, scaled) = match &self.scaler {
            Some(scaler) => {
                let scaled = scaler.transform(features)?;
                (classifier.score(&scaled)?, true)
            }
            None => {
                warn!("scoring without scaler; accuracy may be degraded");
                (classifier.score(features)?, false)
            }
        };

        if !probability.is_finite()
            || probability < -PROBABILITY_SLACK
            || probability > 1.0 + PROBABILITY_SLACK
        {
            return Err(AssessmentError::Prediction(format!(
                "classifier returned {probability}, expected a probability in [0, 1]"
            )));
        }

        Ok(Score {
            probability: probability.clamp(0.0, 1.0),
            scaled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LogisticClassifier, StandardScaler};

    struct Fixed(f64);

    impl Classifier for Fixed {
        fn score(&self, _: &FeatureVector) -> Result<f64, AssessmentError> {
            Ok(self.0)
        }
    }

    struct Failing;

    impl Classifier for Failing {
        fn score(&self, _: &FeatureVector) -> Result<f64, AssessmentError> {
            Err(AssessmentError::Prediction("boom".into()))
        }
    }

    fn vector() -> FeatureVector {
        FeatureVector::new(vec![1.0; 12])
    }

    #[test]
    fn missing_classifier_is_configuration_error() {
        let scorer = RiskScorer::new(None, None);
        let err = scorer.score(&vector()).unwrap_err();
        assert!(matches!(err, AssessmentError::Configuration(_)));
    }

    #[test]
    fn missing_scaler_still_scores() {
        let scorer = RiskScorer::new(Some(Arc::new(Fixed(0.42))), None);
        let s = scorer.score(&vector()).unwrap();
        assert_eq!(s.probability, 0.42);
        assert!(!s.scaled);
    }

    #[test]
    fn scaler_is_applied_before_classifier() {
        // weights pick out column 0; scaler maps 1.0 → 0.0, so p = sigmoid(0) = 0.5
        let mut w = vec![0.0; 12];
        w[0] = 3.0;
        let classifier = Arc::new(LogisticClassifier::new(w, 0.0));
        let scaler = Arc::new(StandardScaler::new(vec![1.0; 12], vec![2.0; 12]));
        let scorer = RiskScorer::new(Some(classifier.clone()), Some(scaler));
        let s = scorer.score(&vector()).unwrap();
        assert!(s.scaled);
        assert!((s.probability - 0.5).abs() < 1e-12);

        let raw = RiskScorer::new(Some(classifier), None).score(&vector()).unwrap();
        assert!(raw.probability > 0.9);
    }

    #[test]
    fn scaler_shape_mismatch_is_scaling_error() {
        let scaler = Arc::new(StandardScaler::new(vec![0.0; 5], vec![1.0; 5]));
        let scorer = RiskScorer::new(Some(Arc::new(Fixed(0.1))), Some(scaler));
        assert!(matches!(
            scorer.score(&vector()),
            Err(AssessmentError::Scaling(_))
        ));
    }

    #[test]
    fn classifier_failure_and_bad_output_are_prediction_errors() {
        let scorer = RiskScorer::new(Some(Arc::new(Failing)), None);
        assert!(matches!(
            scorer.score(&vector()),
            Err(AssessmentError::Prediction(_))
        ));
        for bad in [f64::NAN, 1.5, -0.2] {
            let scorer = RiskScorer::new(Some(Arc::new(Fixed(bad))), None);
            assert!(matches!(
                scorer.score(&vector()),
                Err(AssessmentError::Prediction(_))
            ));
        }
    }

    #[test]
    fn repeated_scoring_is_identical() {
        let classifier = Arc::new(LogisticClassifier::new(vec![0.1; 12], -1.0));
        let scaler = Arc::new(StandardScaler::new(vec![0.5; 12], vec![0.25; 12]));
        let scorer = RiskScorer::new(Some(classifier), Some(scaler));
        let a = scorer.score(&vector()).unwrap();
        let b = scorer.score(&vector()).unwrap();
        assert_eq!(a.probability.to_bits(), b.probability.to_bits());
    }
}
