// Kinetic - phrase-pair style assessment
// Library exports

pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod scoring;
pub mod session;
pub mod storage;

pub use errors::{AssessmentError, Result};
