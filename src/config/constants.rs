// Project-wide constants
//
// Centralised here so slider bounds and scoring defaults have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Lowest slider value (full preference for the left phrase).
pub const SLIDER_MIN: u8 = 0;

/// Highest slider value (full preference for the right phrase).
pub const SLIDER_MAX: u8 = 10;

/// The neutral slider position: no preference either way.
pub const SLIDER_NEUTRAL: u8 = 5;

/// Strongest preference a single response can express.
pub const MAX_PREFERENCE_STRENGTH: u8 = SLIDER_NEUTRAL - SLIDER_MIN;

/// Questions per assessment when the document does not say otherwise.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

pub const DEFAULT_MAX_QUESTION_COUNT: usize = 20;

/// Half-width of the neutral band around each axis.
pub const DEFAULT_NEUTRAL_THRESHOLD: f64 = 0.1;

/// Dimension plotted on the x axis (-1 = Reason, +1 = Play).
pub const DEFAULT_X_AXIS_DIMENSION: &str = "Uncertainty Attitude";

/// Dimension plotted on the y axis (-1 = Structure, +1 = Openness).
pub const DEFAULT_Y_AXIS_DIMENSION: &str = "Possibility Attitude";

/// Directory under $HOME holding config.toml and stored results.
pub const APP_DIR_NAME: &str = ".kinetic";
