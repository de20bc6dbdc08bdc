//! IPIP-50 inventory scoring.
//!
//! Answers arrive keyed by item code (`EXT1`..`OPN10`) on a 1–5 scale, so the
//! per-trait means are already on the classifier's scale. The inventory
//! measures emotional stability (`EST`) rather than neuroticism; N is
//! `6 - mean(EST)`.

use std::collections::HashMap;

use crate::personality::scoring::InvalidInputError;
use crate::personality::traits::{TraitScoreSet, MAX_SCORE, MIN_SCORE};

pub const ITEMS_PER_SCALE: usize = 10;

/// Item-code prefixes in instrument order.
const SCALES: [&str; 5] = ["EXT", "EST", "AGR", "CSN", "OPN"];

/// How many missing codes are listed in `MissingItems`.
const MISSING_SAMPLE: usize = 3;

fn scale_codes(prefix: &str) -> impl Iterator<Item = String> + '_ {
    (1..=ITEMS_PER_SCALE).map(move |i| format!("{prefix}{i}"))
}

/// All 50 item codes in instrument order.
pub fn item_codes() -> Vec<String> {
    SCALES.iter().copied().flat_map(scale_codes).collect()
}

pub fn score_ipip50(answers: &HashMap<String, f64>) -> Result<TraitScoreSet, InvalidInputError> {
    let missing: Vec<String> = item_codes()
        .into_iter()
        .filter(|code| !answers.contains_key(code))
        .collect();
    if !missing.is_empty() {
        return Err(InvalidInputError::MissingItems {
            total: missing.len(),
            sample: missing.into_iter().take(MISSING_SAMPLE).collect(),
        });
    }

    for code in item_codes() {
        let value = answers[&code];
        if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(InvalidInputError::ItemOutOfRange { code, value });
        }
    }

    let mean = |prefix: &str| -> f64 {
        scale_codes(prefix).map(|code| answers[&code]).sum::<f64>() / ITEMS_PER_SCALE as f64
    };
    let scores = TraitScoreSet {
        openness: mean("OPN"),
        conscientiousness: mean("CSN"),
        extraversion: mean("EXT"),
        agreeableness: mean("AGR"),
        neuroticism: MIN_SCORE + MAX_SCORE - mean("EST"),
    };

    scores.validate()?;
    Ok(scores)
}
