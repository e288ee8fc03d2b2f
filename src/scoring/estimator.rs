use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::{
    Badge, CategoryEstimate, EstimatorError, ProgressionInput, ProgressionResult, Result,
    SeasonOutlook,
};

/// Parses the "current points" field. Negative values are allowed (past the goal).
///
/// Values outside the `i32` range are rejected so later arithmetic cannot overflow.
pub fn parse_points(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i32>()
        .map(i64::from)
        .map_err(|_| EstimatorError::InvalidNumericInput(input.to_string()))
}

pub fn compute_points_remaining(goal: &Badge, current_points: i64) -> Result<i64> {
    goal.threshold
        .checked_sub(current_points)
        .ok_or_else(|| EstimatorError::InvalidNumericInput(current_points.to_string()))
}

/// Smallest `n` with `n * category_points >= points_remaining`; zero once the goal is met.
pub fn compute_games_needed(points_remaining: i64, category_points: u32) -> Result<u64> {
    if category_points == 0 {
        return Err(EstimatorError::ZeroPointValue);
    }
    if points_remaining <= 0 {
        return Ok(0);
    }

    Ok((points_remaining as u64).div_ceil(category_points as u64))
}

/// `Σ (weight / 100) × playtime`. Missing weights count as zero.
///
/// Only a true weighted average when the weights sum to 100; otherwise a
/// scaled sum. Keeping the weights in range is the caller's job.
pub fn compute_weighted_playtime(playtimes: &[f64], weights: &[u32]) -> f64 {
    playtimes
        .iter()
        .zip(weights.iter().copied().chain(std::iter::repeat(0)))
        .map(|(t, w)| (w as f64 / 100.0) * t)
        .sum()
}

pub fn compute_days_remaining(season_end: NaiveDate, today: NaiveDate) -> i64 {
    (season_end - today).num_days()
}

/// Floor of `points_remaining / days_remaining`.
pub fn compute_daily_pace(points_remaining: i64, days_remaining: i64) -> Result<i64> {
    if days_remaining <= 0 {
        return Err(EstimatorError::NoTimeRemaining { days_remaining });
    }

    Ok(points_remaining.div_euclid(days_remaining))
}

/// Runs the whole projection. Pure in its input: no clock, no shared state.
///
/// `next_badge` is left empty here; it depends on the mode's ladder, which
/// the input does not carry.
pub fn run_projection(input: &ProgressionInput) -> Result<ProgressionResult> {
    let points_remaining = compute_points_remaining(&input.goal, input.current_points)?;

    let mut categories = Vec::with_capacity(input.categories.len());
    for category in &input.categories {
        let games_needed = compute_games_needed(points_remaining, category.points).map_err(|_| {
            EstimatorError::ZeroCategoryPoints {
                category: category.name.clone(),
            }
        })?;
        let playtime_minutes = games_needed as f64 * category.base_minutes;

        debug!(
            "{}: {} games, {:.0} minutes",
            category.name, games_needed, playtime_minutes
        );

        categories.push(CategoryEstimate {
            name: category.name.clone(),
            points: category.points,
            games_needed,
            playtime_minutes,
            weight: category.weight,
        });
    }

    let playtimes: Vec<f64> = categories.iter().map(|c| c.playtime_minutes).collect();
    let weights: Vec<u32> = categories.iter().map(|c| c.weight).collect();
    let weighted_playtime_minutes = compute_weighted_playtime(&playtimes, &weights);

    let days_remaining = compute_days_remaining(input.season_end, input.today);
    let outlook = match compute_daily_pace(points_remaining.max(0), days_remaining) {
        Ok(daily_pace) => {
            let slowest = playtimes.iter().copied().fold(0.0_f64, f64::max);
            SeasonOutlook::Active {
                days_remaining,
                daily_pace,
                weighted_daily_minutes: weighted_playtime_minutes / days_remaining as f64,
                max_daily_minutes: slowest / days_remaining as f64,
            }
        }
        Err(EstimatorError::NoTimeRemaining { days_remaining }) => {
            warn!("Season ended {} days ago", -days_remaining);
            SeasonOutlook::Ended { days_remaining }
        }
        Err(e) => return Err(e),
    };

    Ok(ProgressionResult {
        goal: input.goal.clone(),
        points_remaining,
        categories,
        weighted_playtime_minutes,
        outlook,
        next_badge: None,
    })
}
