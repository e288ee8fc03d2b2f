use crate::models::{EstimatorError, Result};

pub const MAX_TOTAL_WEIGHT: u32 = 100;

/// Lenient parse for a weight field: blank or garbage counts as 0.
pub fn parse_weight(input: &str) -> u32 {
    input.trim().parse::<u32>().unwrap_or(0)
}

/// Strict parse of a comma separated weight list such as `50,25,15,10`.
pub fn parse_weight_list(input: &str) -> Result<Vec<u32>> {
    input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| EstimatorError::InvalidNumericInput(part.trim().to_string()))
        })
        .collect()
}

pub fn total(weights: &[u32]) -> u64 {
    weights.iter().map(|w| *w as u64).sum()
}

/// Clamps `weights[changed]` so the whole list stays within 100.
///
/// Only the changed entry is touched. Returns the new value when a clamp
/// happened. Must be re-run on every edit: each change moves the ceiling
/// for all the others.
pub fn clamp_weight(weights: &mut [u32], changed: usize) -> Option<u32> {
    let current = *weights.get(changed)?;
    let other_sum = total(weights) - current as u64;
    let max_allowed = (MAX_TOTAL_WEIGHT as u64).saturating_sub(other_sum) as u32;

    if current > max_allowed {
        weights[changed] = max_allowed;
        Some(max_allowed)
    } else {
        None
    }
}

/// Clamps every entry as if typed left to right into empty fields.
pub fn clamp_all(weights: &mut [u32]) -> bool {
    let mut clamped = false;
    let mut used = 0_u64;
    for weight in weights.iter_mut() {
        let room = (MAX_TOTAL_WEIGHT as u64).saturating_sub(used) as u32;
        if *weight > room {
            *weight = room;
            clamped = true;
        }
        used += *weight as u64;
    }
    clamped
}

pub fn validate(weights: &[u32]) -> Result<()> {
    if let Some(&value) = weights.iter().find(|w| **w > MAX_TOTAL_WEIGHT) {
        return Err(EstimatorError::InvalidWeight { value });
    }

    let sum = total(weights);
    if sum > MAX_TOTAL_WEIGHT as u64 {
        return Err(EstimatorError::ConfigError(format!(
            "Weights must sum to at most {}, got {}",
            MAX_TOTAL_WEIGHT, sum
        )));
    }

    Ok(())
}
