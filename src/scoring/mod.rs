pub mod calculator;
pub mod estimator;
pub mod weights;

pub use calculator::{CalculationRequest, ProgressionCalculator};
pub use estimator::{
    compute_daily_pace, compute_days_remaining, compute_games_needed, compute_points_remaining,
    compute_weighted_playtime, parse_points, run_projection,
};
pub use weights::{clamp_weight, parse_weight};
