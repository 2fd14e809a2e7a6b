// Configuration module
// Phrase configuration document plus application settings

mod app;
pub mod constants;
mod loader;
mod phrases;
mod settings;
mod styles;

pub use app::Config;
pub use loader::{load_config, load_config_from};
pub use phrases::{ConfigMetadata, Dimension, PhraseConfig, PhraseSet};
pub use settings::{AssessmentSettings, AxisConfig, PairingStrategy};
pub use styles::{AxisSign, Position, StyleCoordinates, StyleDefinition, StyleDefinitions};
