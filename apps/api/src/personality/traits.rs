use serde::{Deserialize, Serialize};

use crate::personality::items::OceanTrait;
use crate::personality::scoring::InvalidInputError;

/// Lowest and highest score the downstream classifier accepts.
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;

/// Normalized Big-Five scores, each in [1.0, 5.0].
///
/// Serializes as `{"O": .., "C": .., "E": .., "A": .., "N": ..}`, the payload
/// shape the prediction service expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TraitScoreSet {
    #[serde(rename = "O")]
    pub openness: f64,
    #[serde(rename = "C")]
    pub conscientiousness: f64,
    #[serde(rename = "E")]
    pub extraversion: f64,
    #[serde(rename = "A")]
    pub agreeableness: f64,
    #[serde(rename = "N")]
    pub neuroticism: f64,
}

impl TraitScoreSet {
    /// Builds a score set from a per-trait function.
    pub fn from_fn(mut f: impl FnMut(OceanTrait) -> f64) -> Self {
        Self {
            openness: f(OceanTrait::Openness),
            conscientiousness: f(OceanTrait::Conscientiousness),
            extraversion: f(OceanTrait::Extraversion),
            agreeableness: f(OceanTrait::Agreeableness),
            neuroticism: f(OceanTrait::Neuroticism),
        }
    }

    pub fn get(&self, trait_group: OceanTrait) -> f64 {
        match trait_group {
            OceanTrait::Openness => self.openness,
            OceanTrait::Conscientiousness => self.conscientiousness,
            OceanTrait::Extraversion => self.extraversion,
            OceanTrait::Agreeableness => self.agreeableness,
            OceanTrait::Neuroticism => self.neuroticism,
        }
    }

    /// Checks every score is finite and inside [1, 5].
    /// Only needed for sets that did not come out of the scoring engine.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        for t in OceanTrait::ALL {
            let value = self.get(t);
            if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(InvalidInputError::ScoreOutOfRange {
                    trait_code: t.code(),
                    value,
                });
            }
        }
        Ok(())
    }
}
