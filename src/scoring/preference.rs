// Slider value to preference conversion

use serde::{Deserialize, Serialize};

use crate::config::constants::{SLIDER_MAX, SLIDER_NEUTRAL};
use crate::errors::{AssessmentError, Result};

/// A validated 0-10 slider position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct SliderValue(u8);

impl SliderValue {
    pub const NEUTRAL: SliderValue = SliderValue(SLIDER_NEUTRAL);

    pub fn new(value: i64) -> Result<Self> {
        if (0..=SLIDER_MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(AssessmentError::InvalidSliderValue(value))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn is_neutral(&self) -> bool {
        self.0 == SLIDER_NEUTRAL
    }

    /// Which side this value leans toward and how strongly (0-5)
    pub fn preference(&self) -> Preference {
        match self.0.cmp(&SLIDER_NEUTRAL) {
            std::cmp::Ordering::Equal => Preference {
                side: None,
                strength: 0,
            },
            std::cmp::Ordering::Less => Preference {
                side: Some(Side::Left),
                strength: SLIDER_NEUTRAL - self.0,
            },
            std::cmp::Ordering::Greater => Preference {
                side: Some(Side::Right),
                strength: self.0 - SLIDER_NEUTRAL,
            },
        }
    }

    /// Legacy 0-300 wire range: 5 -> 150, 0..4 -> 0..40, 6..10 -> 200..240.
    /// Only for consumers that still speak the old format.
    pub fn to_legacy_range(&self) -> u16 {
        let v = self.0 as u16;
        match self.0.cmp(&SLIDER_NEUTRAL) {
            std::cmp::Ordering::Equal => 150,
            std::cmp::Ordering::Less => v * 10,
            std::cmp::Ordering::Greater => 200 + (v - 6) * 10,
        }
    }

    /// Inverse of `to_legacy_range`; values the legacy scale never produces are rejected
    pub fn from_legacy_range(legacy: u16) -> Result<Self> {
        match legacy {
            150 => Ok(Self::NEUTRAL),
            0..=40 if legacy % 10 == 0 => Ok(Self((legacy / 10) as u8)),
            200..=240 if legacy % 10 == 0 => Ok(Self(((legacy - 200) / 10 + 6) as u8)),
            _ => Err(AssessmentError::InvalidSliderValue(legacy as i64)),
        }
    }
}

impl TryFrom<i64> for SliderValue {
    type Error = AssessmentError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SliderValue> for u8 {
    fn from(value: SliderValue) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Direction and strength of one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preference {
    /// `None` at the neutral position
    pub side: Option<Side>,
    pub strength: u8,
}

/// A response with both sides resolved to their categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedResponse {
    pub question_id: String,
    pub value: u8,
    pub left_category: String,
    pub right_category: String,
    /// `None` for a neutral answer
    pub preferred_category: Option<String>,
    pub strength: u8,
}

impl ResolvedResponse {
    pub fn new(
        question_id: &str,
        value: SliderValue,
        left_category: &str,
        right_category: &str,
    ) -> Self {
        let preference = value.preference();
        let preferred_category = preference.side.map(|side| match side {
            Side::Left => left_category.to_string(),
            Side::Right => right_category.to_string(),
        });

        Self {
            question_id: question_id.to_string(),
            value: value.get(),
            left_category: left_category.to_string(),
            right_category: right_category.to_string(),
            preferred_category,
            strength: preference.strength,
        }
    }

    /// True when the category was shown on either side
    pub fn involves(&self, category: &str) -> bool {
        self.left_category == category || self.right_category == category
    }
}
