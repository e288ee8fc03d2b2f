use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("Invalid numeric input: {0:?}")]
    InvalidNumericInput(String),

    #[error("Cannot divide by a zero point value")]
    ZeroPointValue,

    #[error("Category {category} awards zero points")]
    ZeroCategoryPoints { category: String },

    #[error("No time remaining in the season ({days_remaining} days left)")]
    NoTimeRemaining { days_remaining: i64 },

    #[error("Unknown badge {label:?} for {mode}")]
    UnknownBadge { mode: String, label: String },

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Expected {expected} weights, got {got}")]
    WeightCountMismatch { expected: usize, got: usize },

    #[error("Weight {value} is outside 0-100")]
    InvalidWeight { value: u32 },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl EstimatorError {
    /// Status line shown by the presentation layers in place of a result.
    pub fn user_message(&self) -> String {
        match self {
            EstimatorError::InvalidNumericInput(_) => "Please enter a valid number".to_string(),
            EstimatorError::ZeroPointValue => {
                "Cannot compute: a category awards no points".to_string()
            }
            EstimatorError::ZeroCategoryPoints { category } => {
                format!("Cannot compute: {} awards no points", category)
            }
            EstimatorError::NoTimeRemaining { .. } => {
                "Cannot compute daily pace: the season has ended".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
