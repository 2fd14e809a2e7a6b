// Style definitions for the nine regions of the style map

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine regions a coordinate pair can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    Quadrant1,   // (+, +)
    Quadrant2,   // (-, +)
    Quadrant3,   // (-, -)
    Quadrant4,   // (+, -)
    BorderNorth, // x neutral, y positive
    BorderSouth, // x neutral, y negative
    BorderWest,  // x negative, y neutral
    BorderEast,  // x positive, y neutral
    Center,
}

impl Position {
    pub const ALL: [Position; 9] = [
        Position::Quadrant1,
        Position::Quadrant2,
        Position::Quadrant3,
        Position::Quadrant4,
        Position::BorderNorth,
        Position::BorderSouth,
        Position::BorderWest,
        Position::BorderEast,
        Position::Center,
    ];

    /// Key used for this region in the configuration document
    pub fn as_key(&self) -> &'static str {
        match self {
            Position::Quadrant1 => "quadrant1",
            Position::Quadrant2 => "quadrant2",
            Position::Quadrant3 => "quadrant3",
            Position::Quadrant4 => "quadrant4",
            Position::BorderNorth => "borderNorth",
            Position::BorderSouth => "borderSouth",
            Position::BorderWest => "borderWest",
            Position::BorderEast => "borderEast",
            Position::Center => "center",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Sign of one coordinate relative to the neutral band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisSign {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleCoordinates {
    pub x: AxisSign,
    pub y: AxisSign,
}

/// A named style attached to one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<StyleCoordinates>,
    #[serde(default)]
    pub traits: Vec<String>,
}

/// The style table keyed by region. Regions left out of a document
/// resolve to a placeholder at interpretation time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDefinitions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadrant1: Option<StyleDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadrant2: Option<StyleDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadrant3: Option<StyleDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadrant4: Option<StyleDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_north: Option<StyleDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_south: Option<StyleDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_west: Option<StyleDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_east: Option<StyleDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<StyleDefinition>,
}

impl StyleDefinitions {
    pub fn get(&self, position: Position) -> Option<&StyleDefinition> {
        match position {
            Position::Quadrant1 => self.quadrant1.as_ref(),
            Position::Quadrant2 => self.quadrant2.as_ref(),
            Position::Quadrant3 => self.quadrant3.as_ref(),
            Position::Quadrant4 => self.quadrant4.as_ref(),
            Position::BorderNorth => self.border_north.as_ref(),
            Position::BorderSouth => self.border_south.as_ref(),
            Position::BorderWest => self.border_west.as_ref(),
            Position::BorderEast => self.border_east.as_ref(),
            Position::Center => self.center.as_ref(),
        }
    }

    /// Built-in table used when a document carries no style definitions
    pub fn builtin() -> Self {
        use AxisSign::{Negative, Neutral, Positive};

        Self {
            quadrant1: Some(style(
                "Adaptive Collaborator",
                "Flexible approach with collaborative teamwork",
                (Positive, Positive),
                &["Flexible", "Collaborative", "Responsive", "Team-oriented"],
            )),
            quadrant2: Some(style(
                "Structured Collaborator",
                "Planned approach with collaborative teamwork",
                (Negative, Positive),
                &["Organized", "Collaborative", "Methodical", "Team-oriented"],
            )),
            quadrant3: Some(style(
                "Structured Leader",
                "Planned approach with individual leadership",
                (Negative, Negative),
                &["Organized", "Independent", "Methodical", "Self-directed"],
            )),
            quadrant4: Some(style(
                "Adaptive Leader",
                "Flexible approach with individual leadership",
                (Positive, Negative),
                &["Flexible", "Independent", "Responsive", "Self-directed"],
            )),
            border_north: Some(style(
                "Collaborative Bridge-Builder",
                "Balance between structured and adaptive with collaborative focus",
                (Neutral, Positive),
                &["Diplomatic", "Collaborative", "Balanced", "Harmonizing"],
            )),
            border_south: Some(style(
                "Independent Strategist",
                "Balance between structured and adaptive with independent focus",
                (Neutral, Negative),
                &["Strategic", "Independent", "Balanced", "Accountable"],
            )),
            border_west: Some(style(
                "Systematic Facilitator",
                "Structured approach with balanced individual/collaborative style",
                (Negative, Neutral),
                &["Organized", "Balanced", "Systematic", "Facilitating"],
            )),
            border_east: Some(style(
                "Agile Catalyst",
                "Adaptive approach with balanced individual/collaborative style",
                (Positive, Neutral),
                &["Adaptive", "Balanced", "Energizing", "Catalytic"],
            )),
            center: Some(style(
                "Dynamic Integrator",
                "Exceptional balance across all working styles",
                (Neutral, Neutral),
                &["Versatile", "Adaptive", "Balanced", "Integrative"],
            )),
        }
    }
}

fn style(name: &str, description: &str, signs: (AxisSign, AxisSign), traits: &[&str]) -> StyleDefinition {
    StyleDefinition {
        name: name.to_string(),
        description: description.to_string(),
        coordinates: Some(StyleCoordinates {
            x: signs.0,
            y: signs.1,
        }),
        traits: traits.iter().map(|t| t.to_string()).collect(),
    }
}
