//! Trait scoring engine for the 25-item questionnaire.
//!
//! Algorithm:
//! 1. Validate: exactly 25 answers, each an integer in [0, 5]
//! 2. Flip reversed items (`5 - v`)
//! 3. Average the five items of each trait → [0, 5]
//! 4. Stretch the mean onto the classifier's scale: `1 + (mean / 5) * 4` → [1, 5]
//!
//! Pure and stateless; only reads the static item table.

use serde_json::Value;
use thiserror::Error;

use crate::personality::items::{
    items_for, reverse_answer, OceanTrait, ITEM_COUNT, MAX_ANSWER, MIN_ANSWER,
};
use crate::personality::traits::{TraitScoreSet, MAX_SCORE, MIN_SCORE};

/// Rejected questionnaire or score input. Indexes are zero-based positions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("Expected {expected} answers, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Answer at index {index} is {value}, expected an integer in [0, 5]")]
    OutOfRange { index: usize, value: i64 },

    #[error("Answer at index {index} is not an integer: {value}")]
    NotAnInteger { index: usize, value: String },

    #[error("Missing item(s): {} ... total {total}", .sample.join(", "))]
    MissingItems { sample: Vec<String>, total: usize },

    #[error("Item {code} must be in [1, 5], got {value}")]
    ItemOutOfRange { code: String, value: f64 },

    #[error("Score {trait_code} must be in [1, 5], got {value}")]
    ScoreOutOfRange { trait_code: &'static str, value: f64 },
}

/// A complete, validated answer set in item order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionnaireResponse([u8; ITEM_COUNT]);

impl QuestionnaireResponse {
    pub fn answers(&self) -> &[u8; ITEM_COUNT] {
        &self.0
    }

    /// Validates untyped wire values. Floats are accepted only when integral
    /// (`3.0`); strings, nulls and fractional numbers are rejected.
    pub fn from_json(values: &[Value]) -> Result<Self, InvalidInputError> {
        check_length(values.len())?;
        let mut answers = [0_u8; ITEM_COUNT];
        for (index, value) in values.iter().enumerate() {
            answers[index] = check_answer(index, json_integer(index, value)?)?;
        }
        Ok(Self(answers))
    }
}

impl TryFrom<&[i64]> for QuestionnaireResponse {
    type Error = InvalidInputError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        check_length(values.len())?;
        let mut answers = [0_u8; ITEM_COUNT];
        for (index, &value) in values.iter().enumerate() {
            answers[index] = check_answer(index, value)?;
        }
        Ok(Self(answers))
    }
}

fn check_length(actual: usize) -> Result<(), InvalidInputError> {
    if actual != ITEM_COUNT {
        return Err(InvalidInputError::WrongLength {
            expected: ITEM_COUNT,
            actual,
        });
    }
    Ok(())
}

fn check_answer(index: usize, value: i64) -> Result<u8, InvalidInputError> {
    if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
        return Err(InvalidInputError::OutOfRange { index, value });
    }
    Ok(value as u8)
}

fn json_integer(index: usize, value: &Value) -> Result<i64, InvalidInputError> {
    if let Some(i) = value.as_i64() {
        return Ok(i);
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        _ => Err(InvalidInputError::NotAnInteger {
            index,
            value: value.to_string(),
        }),
    }
}

/// Scores a validated response.
pub fn score(responses: &QuestionnaireResponse) -> TraitScoreSet {
    TraitScoreSet::from_fn(|t| rescale(trait_mean(responses, t)))
}

/// Validates raw answers, then scores them.
pub fn score_answers(answers: &[i64]) -> Result<TraitScoreSet, InvalidInputError> {
    let responses = QuestionnaireResponse::try_from(answers)?;
    Ok(score(&responses))
}

/// Mean of a trait's items after reversal, in [0, 5].
pub fn trait_mean(responses: &QuestionnaireResponse, trait_group: OceanTrait) -> f64 {
    let (sum, count) = items_for(trait_group).fold((0_u32, 0_u32), |(sum, count), (i, spec)| {
        let raw = responses.0[i];
        let value = if spec.is_reversed() {
            reverse_answer(raw)
        } else {
            raw
        };
        (sum + value as u32, count + 1)
    });
    sum as f64 / count as f64
}

/// Linear map from the [0, 5] answer scale to the [1, 5] score scale.
pub fn rescale(mean: f64) -> f64 {
    MIN_SCORE + (mean / MAX_ANSWER as f64) * (MAX_SCORE - MIN_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const EPS: f64 = 1e-9;

    fn uniform(v: i64) -> Vec<i64> {
        vec![v; ITEM_COUNT]
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    /// Deterministic pseudo-random answer sets (LCG) for coverage beyond uniform inputs.
    fn answer_sets(count: usize) -> Vec<Vec<i64>> {
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        (0..count)
            .map(|_| {
                (0..ITEM_COUNT)
                    .map(|_| {
                        state = state
                            .wrapping_mul(6364136223846793005)
                            .wrapping_add(1442695040888963407);
                        ((state >> 33) % 6) as i64
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_all_zero() {
        let s = score_answers(&uniform(0)).unwrap();
        assert_eq!(s.openness, 1.0);
        // one reversed item contributes 5 → mean 1.0 → 1.8
        assert_close(s.extraversion, 1.8);
        assert_close(s.neuroticism, 1.8);
        assert_close(s.agreeableness, 1.8);
        assert_close(s.conscientiousness, 1.8);
    }

    #[test]
    fn test_all_five() {
        let s = score_answers(&uniform(5)).unwrap();
        assert_eq!(s.openness, 5.0);
        // [5, 5, 5, 5, reversed(5) = 0] → mean 4.0 → 4.2
        assert_close(s.extraversion, 4.2);
        assert_close(s.neuroticism, 4.2);
        assert_close(s.agreeableness, 4.2);
        assert_close(s.conscientiousness, 4.2);
    }

    #[test]
    fn test_reversal_inverts_polarity() {
        let mut answers = uniform(0);
        answers[0..4].copy_from_slice(&[5, 5, 5, 5]);
        answers[4] = 0;
        let s = score_answers(&answers).unwrap();
        assert_eq!(s.extraversion, 5.0);
    }

    #[test]
    fn test_neuroticism_reverses_second_item() {
        let mut answers = uniform(0);
        answers[5..10].copy_from_slice(&[5, 0, 5, 5, 5]);
        let s = score_answers(&answers).unwrap();
        assert_eq!(s.neuroticism, 5.0);
    }

    #[test]
    fn test_mixed_answers() {
        // Openness items 21–25 = [1, 2, 3, 4, 5] → mean 3.0 → 1 + 0.6 * 4 = 3.4
        let mut answers = uniform(0);
        answers[20..25].copy_from_slice(&[1, 2, 3, 4, 5]);
        let s = score_answers(&answers).unwrap();
        assert_close(s.openness, 3.4);
    }

    #[test]
    fn test_rescale_endpoints() {
        assert_eq!(rescale(0.0), 1.0);
        assert_eq!(rescale(5.0), 5.0);
        assert_close(rescale(2.5), 3.0);
    }

    #[test]
    fn test_scores_always_in_range() {
        let mut inputs: Vec<Vec<i64>> = (0..=5).map(uniform).collect();
        inputs.extend(answer_sets(500));
        for answers in inputs {
            let s = score_answers(&answers).unwrap();
            for t in OceanTrait::ALL {
                let v = s.get(t);
                assert!((1.0..=5.0).contains(&v), "{t:?} = {v} for {answers:?}");
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for answers in answer_sets(20) {
            assert_eq!(score_answers(&answers), score_answers(&answers));
        }
    }

    #[test]
    fn test_monotonic_per_item() {
        use crate::personality::items::ITEM_SPECS;

        for base in answer_sets(30) {
            for (i, spec) in ITEM_SPECS.iter().enumerate() {
                let mut answers = base.clone();
                let mut previous: Option<f64> = None;
                for v in MIN_ANSWER..=MAX_ANSWER {
                    answers[i] = v;
                    let current = score_answers(&answers).unwrap().get(spec.trait_group);
                    if let Some(prev) = previous {
                        if spec.is_reversed() {
                            assert!(current <= prev, "item {i} raised {:?}", spec.trait_group);
                        } else {
                            assert!(current >= prev, "item {i} lowered {:?}", spec.trait_group);
                        }
                    }
                    previous = Some(current);
                }
            }
        }
    }

    #[test]
    fn test_other_traits_unaffected_by_item() {
        let base = uniform(3);
        let baseline = score_answers(&base).unwrap();
        let mut answers = base.clone();
        answers[0] = 5; // extraversion item
        let s = score_answers(&answers).unwrap();
        assert!(s.extraversion > baseline.extraversion);
        assert_eq!(s.openness, baseline.openness);
        assert_eq!(s.neuroticism, baseline.neuroticism);
        assert_eq!(s.agreeableness, baseline.agreeableness);
        assert_eq!(s.conscientiousness, baseline.conscientiousness);
    }

    #[test]
    fn test_rejects_short_and_long_input() {
        assert_eq!(
            score_answers(&vec![3; 24]),
            Err(InvalidInputError::WrongLength {
                expected: 25,
                actual: 24
            })
        );
        assert_eq!(
            score_answers(&vec![3; 26]),
            Err(InvalidInputError::WrongLength {
                expected: 25,
                actual: 26
            })
        );
        assert!(score_answers(&[]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let mut answers = uniform(2);
        answers[7] = 6;
        assert_eq!(
            score_answers(&answers),
            Err(InvalidInputError::OutOfRange { index: 7, value: 6 })
        );

        answers[7] = 2;
        answers[0] = -1;
        assert_eq!(
            score_answers(&answers),
            Err(InvalidInputError::OutOfRange {
                index: 0,
                value: -1
            })
        );
    }

    #[test]
    fn test_error_message_names_index_and_value() {
        let err = InvalidInputError::OutOfRange { index: 12, value: 9 };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains('9'));
    }

    #[test]
    fn test_from_json_accepts_integral_numbers() {
        let mut values = vec![json!(4); ITEM_COUNT];
        values[3] = json!(2.0);
        let r = QuestionnaireResponse::from_json(&values).unwrap();
        assert_eq!(r.answers()[3], 2);
        assert_eq!(r.answers()[0], 4);
    }

    #[test]
    fn test_from_json_rejects_fraction_string_and_null() {
        for (bad, index) in [(json!(2.5), 1), (json!("3"), 10), (json!(null), 24)] {
            let mut values = vec![json!(1); ITEM_COUNT];
            values[index] = bad.clone();
            match QuestionnaireResponse::from_json(&values) {
                Err(InvalidInputError::NotAnInteger { index: i, value }) => {
                    assert_eq!(i, index);
                    assert_eq!(value, bad.to_string());
                }
                other => panic!("unexpected for {bad}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let mut values = vec![json!(1); ITEM_COUNT];
        values[2] = json!(7);
        assert_eq!(
            QuestionnaireResponse::from_json(&values),
            Err(InvalidInputError::OutOfRange { index: 2, value: 7 })
        );
    }

    #[test]
    fn test_from_json_checks_length_first() {
        let values = vec![json!("x"); 3];
        assert!(matches!(
            QuestionnaireResponse::from_json(&values),
            Err(InvalidInputError::WrongLength { actual: 3, .. })
        ));
    }
}
