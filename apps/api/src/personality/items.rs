//! Item table for the 25-statement questionnaire.
//!
//! Position in the table is the position of the answer in a
//! `QuestionnaireResponse`. Each trait owns five consecutive statements;
//! the last statement of every group except Neuroticism and Openness is
//! phrased against the trait, and Neuroticism flips its second statement.

use serde::{Deserialize, Serialize};

use OceanTrait::{Agreeableness, Conscientiousness, Extraversion, Neuroticism, Openness};

/// Number of statements in the questionnaire.
pub const ITEM_COUNT: usize = 25;

/// Lowest and highest raw answer on the 0–5 Likert scale.
pub const MIN_ANSWER: i64 = 0;
pub const MAX_ANSWER: i64 = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OceanTrait {
    Extraversion,
    Neuroticism,
    Agreeableness,
    Conscientiousness,
    Openness,
}

impl OceanTrait {
    pub const ALL: [OceanTrait; 5] = [
        OceanTrait::Extraversion,
        OceanTrait::Neuroticism,
        OceanTrait::Agreeableness,
        OceanTrait::Conscientiousness,
        OceanTrait::Openness,
    ];

    /// Single-letter key used on the wire (`O`, `C`, `E`, `A`, `N`).
    pub fn code(self) -> &'static str {
        match self {
            OceanTrait::Extraversion => "E",
            OceanTrait::Neuroticism => "N",
            OceanTrait::Agreeableness => "A",
            OceanTrait::Conscientiousness => "C",
            OceanTrait::Openness => "O",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Normal,
    Reversed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub trait_group: OceanTrait,
    pub polarity: Polarity,
}

impl ItemSpec {
    const fn normal(trait_group: OceanTrait) -> Self {
        Self {
            trait_group,
            polarity: Polarity::Normal,
        }
    }

    const fn reversed(trait_group: OceanTrait) -> Self {
        Self {
            trait_group,
            polarity: Polarity::Reversed,
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.polarity == Polarity::Reversed
    }
}

pub static ITEM_SPECS: [ItemSpec; ITEM_COUNT] = [
    // 1–5
    ItemSpec::normal(Extraversion),
    ItemSpec::normal(Extraversion),
    ItemSpec::normal(Extraversion),
    ItemSpec::normal(Extraversion),
    ItemSpec::reversed(Extraversion),
    // 6–10
    ItemSpec::normal(Neuroticism),
    ItemSpec::reversed(Neuroticism),
    ItemSpec::normal(Neuroticism),
    ItemSpec::normal(Neuroticism),
    ItemSpec::normal(Neuroticism),
    // 11–15
    ItemSpec::normal(Agreeableness),
    ItemSpec::normal(Agreeableness),
    ItemSpec::normal(Agreeableness),
    ItemSpec::normal(Agreeableness),
    ItemSpec::reversed(Agreeableness),
    // 16–20
    ItemSpec::normal(Conscientiousness),
    ItemSpec::normal(Conscientiousness),
    ItemSpec::normal(Conscientiousness),
    ItemSpec::normal(Conscientiousness),
    ItemSpec::reversed(Conscientiousness),
    // 21–25
    ItemSpec::normal(Openness),
    ItemSpec::normal(Openness),
    ItemSpec::normal(Openness),
    ItemSpec::normal(Openness),
    ItemSpec::normal(Openness),
];

/// Zero-based positions and specs of the items assigned to `trait_group`.
pub fn items_for(trait_group: OceanTrait) -> impl Iterator<Item = (usize, &'static ItemSpec)> {
    ITEM_SPECS
        .iter()
        .enumerate()
        .filter(move |(_, spec)| spec.trait_group == trait_group)
}

/// Flips an answer phrased against its trait: `5 - v`.
pub fn reverse_answer(value: u8) -> u8 {
    MAX_ANSWER as u8 - value
}
