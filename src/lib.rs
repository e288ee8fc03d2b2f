pub mod models;
pub mod config;
pub mod scoring;
pub mod utils;
pub mod tui;

pub use models::{Badge, Category, EstimatorError, Mode, ProgressionInput, ProgressionResult, Result};
pub use config::Settings;
pub use scoring::{CalculationRequest, ProgressionCalculator};
