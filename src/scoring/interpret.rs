// Style interpretation of coordinates and dimension balances

use serde::{Deserialize, Serialize};

use super::types::{Coordinates, DimensionScore};
use crate::config::constants::DEFAULT_NEUTRAL_THRESHOLD;
use crate::config::{AxisSign, PhraseConfig, Position};

/// Style resolved for a point on the map. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleInterpretation {
    pub position: Position,
    pub style: String,
    pub description: String,
    pub traits: Vec<String>,
}

/// Interpret coordinates with the default neutral threshold (0.1)
pub fn interpret_coordinates(coordinates: Coordinates, config: &PhraseConfig) -> StyleInterpretation {
    interpret_coordinates_with(coordinates, config, DEFAULT_NEUTRAL_THRESHOLD)
}

pub fn interpret_coordinates_with(
    coordinates: Coordinates,
    config: &PhraseConfig,
    neutral_threshold: f64,
) -> StyleInterpretation {
    let position = classify(coordinates, neutral_threshold);
    let styles = config.style_definitions();

    match styles.get(position) {
        Some(def) => StyleInterpretation {
            position,
            style: def.name.clone(),
            description: def.description.clone(),
            traits: def.traits.clone(),
        },
        None => {
            tracing::warn!("No style defined for {}; using placeholder", position);
            StyleInterpretation {
                position,
                style: format!("{} Style", position),
                description: format!("Style at position {}", position),
                traits: Vec::new(),
            }
        }
    }
}

/// Sign of one coordinate; values within the threshold count as neutral
pub fn axis_sign(value: f64, neutral_threshold: f64) -> AxisSign {
    if value.abs() <= neutral_threshold {
        AxisSign::Neutral
    } else if value > 0.0 {
        AxisSign::Positive
    } else {
        AxisSign::Negative
    }
}

/// Place coordinates in one of the nine regions
pub fn classify(coordinates: Coordinates, neutral_threshold: f64) -> Position {
    use AxisSign::{Negative, Neutral, Positive};

    match (
        axis_sign(coordinates.x, neutral_threshold),
        axis_sign(coordinates.y, neutral_threshold),
    ) {
        (Neutral, Neutral) => Position::Center,
        (Neutral, Positive) => Position::BorderNorth,
        (Neutral, Negative) => Position::BorderSouth,
        (Negative, Neutral) => Position::BorderWest,
        (Positive, Neutral) => Position::BorderEast,
        (Positive, Positive) => Position::Quadrant1,
        (Negative, Positive) => Position::Quadrant2,
        (Negative, Negative) => Position::Quadrant3,
        (Positive, Negative) => Position::Quadrant4,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    Neutral,
    Slight,
    Moderate,
    Strong,
    VeryStrong,
}

impl Intensity {
    pub fn from_balance(balance: f64) -> Self {
        let magnitude = balance.abs();
        if magnitude < 0.1 {
            Intensity::Neutral
        } else if magnitude < 0.3 {
            Intensity::Slight
        } else if magnitude < 0.5 {
            Intensity::Moderate
        } else if magnitude < 0.7 {
            Intensity::Strong
        } else {
            Intensity::VeryStrong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Neutral => "neutral",
            Intensity::Slight => "slight",
            Intensity::Moderate => "moderate",
            Intensity::Strong => "strong",
            Intensity::VeryStrong => "very strong",
        }
    }
}

/// Human-readable reading of one dimension balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionInterpretation {
    /// Winning category, or "balanced"
    pub primary: String,
    pub intensity: Intensity,
    pub description: String,
}

pub fn interpret_dimension_score(score: &DimensionScore) -> DimensionInterpretation {
    let intensity = Intensity::from_balance(score.dimension_balance);

    if intensity == Intensity::Neutral {
        return DimensionInterpretation {
            primary: "balanced".to_string(),
            intensity,
            description: format!("Balanced between {} and {}", score.category1, score.category2),
        };
    }

    let primary = if score.dimension_balance < 0.0 {
        score.category1.clone()
    } else {
        score.category2.clone()
    };

    DimensionInterpretation {
        description: format!("{} preference for {}", intensity.as_str(), primary),
        primary,
        intensity,
    }
}
