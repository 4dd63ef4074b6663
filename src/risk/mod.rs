//! Risk scoring: probability from the model, tier from the band table.

mod advice;
mod bands;
mod engine;
mod scorer;

pub use advice::{Advice, AdviceTable};
pub use bands::{Band, RiskTier, TierScheme, TierTable};
pub use engine::{RiskAssessment, RiskEngine};
pub use scorer::{RiskScorer, Score};
