//! Probability → tier via an ordered band table.
//!
//! A table is a list of `(lower_bound, tier, message_key)` entries. Lookup
//! returns the band with the greatest lower bound not above the probability,
//! so boundary values belong to the higher band.

use crate::config::RiskConfig;
use crate::error::AssessmentError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in band presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierScheme {
    /// high at >= 0.5
    Binary,
    /// moderate at >= 0.35, high at >= 0.65
    ThreeBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub lower_bound: f64,
    pub tier: RiskTier,
    pub message_key: String,
}

impl Band {
    pub fn new(lower_bound: f64, tier: RiskTier) -> Self {
        Self {
            lower_bound,
            tier,
            message_key: tier.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TierTable {
    /// Sorted by descending lower bound; last entry has bound 0.0
    bands: Vec<Band>,
}

impl TierTable {
    /// Rejects empty tables, bounds outside [0, 1], duplicate bounds and
    /// tables without a band starting at 0.0.
    pub fn new(mut bands: Vec<Band>) -> Result<Self, AssessmentError> {
        if bands.is_empty() {
            return Err(AssessmentError::Configuration(
                "tier table has no bands".to_string(),
            ));
        }
        if let Some(b) = bands
            .iter()
            .find(|b| !(0.0..=1.0).contains(&b.lower_bound))
        {
            return Err(AssessmentError::Configuration(format!(
                "band lower bound {} is outside [0, 1]",
                b.lower_bound
            )));
        }
        bands.sort_by(|a, b| b.lower_bound.total_cmp(&a.lower_bound));
        if bands.windows(2).any(|w| w[0].lower_bound == w[1].lower_bound) {
            return Err(AssessmentError::Configuration(
                "duplicate band lower bound".to_string(),
            ));
        }
        if bands.last().map(|b| b.lower_bound) != Some(0.0) {
            return Err(AssessmentError::Configuration(
                "tier table must contain a band starting at 0.0".to_string(),
            ));
        }
        Ok(Self { bands })
    }

    pub fn binary() -> Self {
        Self {
            bands: vec![Band::new(0.5, RiskTier::High), Band::new(0.0, RiskTier::Low)],
        }
    }

    pub fn three_band() -> Self {
        Self {
            bands: vec![
                Band::new(0.65, RiskTier::High),
                Band::new(0.35, RiskTier::Moderate),
                Band::new(0.0, RiskTier::Low),
            ],
        }
    }

    pub fn from_scheme(scheme: TierScheme) -> Self {
        match scheme {
            TierScheme::Binary => Self::binary(),
            TierScheme::ThreeBand => Self::three_band(),
        }
    }

    pub fn from_config(config: &RiskConfig) -> Result<Self, AssessmentError> {
        match &config.bands {
            Some(bands) => Self::new(bands.clone()),
            None => Ok(Self::from_scheme(config.scheme)),
        }
    }

    /// First matching band. Anything below every bound (only possible
    /// outside [0, 1]) falls into the lowest band.
    pub fn band(&self, probability: f64) -> &Band {
        self.bands
            .iter()
            .find(|b| probability >= b.lower_bound)
            .unwrap_or_else(|| &self.bands[self.bands.len() - 1])
    }

    pub fn tier(&self, probability: f64) -> RiskTier {
        self.band(probability).tier
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_boundaries() {
        let t = TierTable::binary();
        assert_eq!(t.tier(0.0), RiskTier::Low);
        assert_eq!(t.tier(0.49), RiskTier::Low);
        assert_eq!(t.tier(0.5), RiskTier::High);
        assert_eq!(t.tier(1.0), RiskTier::High);
    }

    #[test]
    fn three_band_boundaries() {
        let t = TierTable::three_band();
        assert_eq!(t.tier(0.0), RiskTier::Low);
        assert_eq!(t.tier(0.34), RiskTier::Low);
        assert_eq!(t.tier(0.35), RiskTier::Moderate);
        assert_eq!(t.tier(0.649), RiskTier::Moderate);
        assert_eq!(t.tier(0.65), RiskTier::High);
        assert_eq!(t.tier(1.0), RiskTier::High);
    }

    #[test]
    fn total_over_unit_interval() {
        let t = TierTable::three_band();
        let mut prev = RiskTier::Low;
        for i in 0..=1000 {
            let tier = t.tier(i as f64 / 1000.0);
            assert!(tier >= prev, "tiers must not decrease as probability grows");
            prev = tier;
        }
        assert_eq!(t.tier(-0.1), RiskTier::Low);
        assert_eq!(t.tier(f64::NAN), RiskTier::Low);
    }

    #[test]
    fn custom_table_is_sorted_and_validated() {
        let t = TierTable::new(vec![
            Band::new(0.0, RiskTier::Low),
            Band::new(0.9, RiskTier::High),
            Band::new(0.2, RiskTier::Moderate),
        ])
        .unwrap();
        assert_eq!(t.bands()[0].lower_bound, 0.9);
        assert_eq!(t.tier(0.2), RiskTier::Moderate);
        assert_eq!(t.tier(0.89), RiskTier::Moderate);
        assert_eq!(t.tier(0.9), RiskTier::High);
    }

    #[test]
    fn invalid_tables_are_configuration_errors() {
        let cases = vec![
            vec![],
            vec![Band::new(0.5, RiskTier::High)],
            vec![Band::new(0.0, RiskTier::Low), Band::new(1.5, RiskTier::High)],
            vec![Band::new(0.0, RiskTier::Low), Band::new(0.0, RiskTier::High)],
        ];
        for bands in cases {
            let err = TierTable::new(bands).unwrap_err();
            assert_eq!(err.kind(), "configuration_error");
        }
    }

    #[test]
    fn config_bands_override_scheme() {
        let config = RiskConfig {
            scheme: TierScheme::Binary,
            bands: Some(vec![
                Band::new(0.0, RiskTier::Low),
                Band::new(0.35, RiskTier::Moderate),
            ]),
        };
        let t = TierTable::from_config(&config).unwrap();
        assert_eq!(t.tier(0.99), RiskTier::Moderate);
    }
}
