//! Full assessment: validate and encode the record, score it, map the
//! probability to a tier, and attach the tier's advice.

use super::{Advice, AdviceTable, RiskScorer, RiskTier, TierTable};
use crate::config::AppConfig;
use crate::error::AssessmentError;
use crate::features::{bmi_category, BmiCategory, FeatureEncoder, FEATURE_COLUMNS};
use crate::model::ModelAssets;
use crate::patient::PatientInput;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Result of one assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub assessment_id: String,
    pub assessed_at: DateTime<Utc>,
    pub probability: f64,
    pub tier: RiskTier,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub advice: Advice,
    /// False when scored without a scaler
    pub scaled: bool,
    pub echoed_inputs: PatientInput,
}

pub struct RiskEngine {
    encoder: FeatureEncoder,
    scorer: RiskScorer,
    tiers: TierTable,
    advice: AdviceTable,
}

impl RiskEngine {
    pub fn new(scorer: RiskScorer, tiers: TierTable, advice: AdviceTable) -> Self {
        Self {
            encoder: FeatureEncoder::new(),
            scorer,
            tiers,
            advice,
        }
    }

    /// Build from configuration and already loaded assets. Fails only on an
    /// invalid band table; a missing classifier surfaces per assessment.
    pub fn from_config(config: &AppConfig, assets: ModelAssets) -> Result<Self, AssessmentError> {
        let tiers = TierTable::from_config(&config.risk)?;
        let scorer = RiskScorer::from_assets(assets);
        if !scorer.has_scaler() {
            warn!("no scaler loaded; assessments run on unscaled features");
        }
        Ok(Self::new(scorer, tiers, config.advice.clone()))
    }

    pub fn assess(&self, input: &PatientInput) -> Result<RiskAssessment, AssessmentError> {
        let assessment_id = Uuid::new_v4().to_string();
        let result = self.assess_inner(assessment_id.clone(), input);
        if let Err(ref e) = result {
            warn!(assessment_id = %assessment_id, kind = e.kind(), error = %e, "assessment failed");
        }
        result
    }

    fn assess_inner(
        &self,
        assessment_id: String,
        input: &PatientInput,
    ) -> Result<RiskAssessment, AssessmentError> {
        let features = self.encoder.encode(input)?;
        debug!(
            assessment_id = %assessment_id,
            columns = ?FEATURE_COLUMNS,
            values = ?features.values,
            "features encoded"
        );
        let bmi = features.get("imc").unwrap_or_default();

        let score = self.scorer.score(&features)?;
        let band = self.tiers.band(score.probability);

        info!(
            assessment_id = %assessment_id,
            probability = score.probability,
            tier = %band.tier,
            scaled = score.scaled,
            "assessment complete"
        );

        Ok(RiskAssessment {
            assessment_id,
            assessed_at: Utc::now(),
            probability: score.probability,
            tier: band.tier,
            bmi,
            bmi_category: bmi_category(bmi),
            advice: self.advice.for_band(band),
            scaled: score.scaled,
            echoed_inputs: input.clone(),
        })
    }
}
