//! Tier-keyed recommendation copy and display color. Pure data.

use super::{Band, RiskTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub headline: String,
    pub recommendation: String,
    /// CSS-style hex color
    pub color: String,
}

/// Advice keyed by a band's `message_key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdviceTable {
    entries: BTreeMap<String, Advice>,
}

impl AdviceTable {
    pub fn new(entries: BTreeMap<String, Advice>) -> Self {
        Self { entries }
    }

    /// Entry for the band's message key, else the built-in entry for its tier.
    pub fn for_band(&self, band: &Band) -> Advice {
        self.entries
            .get(&band.message_key)
            .or_else(|| self.entries.get(band.tier.as_str()))
            .cloned()
            .unwrap_or_else(|| default_advice(band.tier))
    }
}

impl Default for AdviceTable {
    fn default() -> Self {
        let entries = [RiskTier::Low, RiskTier::Moderate, RiskTier::High]
            .into_iter()
            .map(|t| (t.as_str().to_string(), default_advice(t)))
            .collect();
        Self { entries }
    }
}

fn default_advice(tier: RiskTier) -> Advice {
    let (headline, recommendation, color) = match tier {
        RiskTier::Low => (
            "Low risk of cardiovascular disease.",
            "Keep a balanced diet rich in fruit and vegetables, stay physically active, \
             avoid tobacco, moderate alcohol, sleep well and keep up periodic check-ups.",
            "#28a745",
        ),
        RiskTier::Moderate => (
            "Moderate risk of cardiovascular disease.",
            "Some indicators are elevated. Review blood pressure, cholesterol and glucose \
             with your doctor and aim for at least 150 minutes of moderate exercise a week.",
            "#ffc107",
        ),
        RiskTier::High => (
            "High risk of cardiovascular disease.",
            "Consult a health professional (general practitioner or cardiologist) for an \
             evaluation. Monitor blood pressure, cholesterol and glucose regularly, follow a \
             DASH or Mediterranean diet, stop smoking, limit alcohol and manage stress.",
            "#dc3545",
        ),
    };
    Advice {
        headline: headline.to_string(),
        recommendation: recommendation.to_string(),
        color: color.to_string(),
    }
}
