// Scoring module
// Converts slider responses into category scores, dimension balances,
// coordinates and a style interpretation

mod engine;
mod interpret;
mod preference;
mod types;

pub use engine::{balance, score_assessment, ScoringEngine};
pub use interpret::{
    axis_sign, classify, interpret_coordinates, interpret_coordinates_with,
    interpret_dimension_score, DimensionInterpretation, Intensity, StyleInterpretation,
};
pub use preference::{Preference, ResolvedResponse, Side, SliderValue};
pub use types::{AssessmentScore, CategoryScore, Coordinates, DimensionScore, Response};
