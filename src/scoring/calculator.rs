use crate::{
    config::Settings,
    models::{Badge, Mode, ProgressionInput, ProgressionResult, Result},
    scoring::{estimator, weights},
    utils::{Clock, SystemClock},
};
use tracing::{info, warn};

/// One press of "calculate": raw field contents plus the selections around them.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub mode: Mode,
    pub goal: Badge,
    pub current_points: String,
    pub weights: Vec<u32>,
}

impl CalculationRequest {
    /// Top badge of `mode` and the configured default weights.
    pub fn with_defaults(settings: &Settings, mode: Mode, current_points: impl Into<String>) -> Self {
        Self {
            mode,
            goal: mode.default_goal(),
            current_points: current_points.into(),
            weights: settings.defaults.weights_for(mode).to_vec(),
        }
    }
}

pub struct ProgressionCalculator<C: Clock = SystemClock> {
    settings: Settings,
    clock: C,
}

impl ProgressionCalculator<SystemClock> {
    pub fn with_system_clock(settings: Settings) -> Self {
        Self::new(settings, SystemClock)
    }
}

impl<C: Clock> ProgressionCalculator<C> {
    pub fn new(settings: Settings, clock: C) -> Self {
        Self { settings, clock }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Assembles a projection input for today's date. Weights are clamped to a
    /// total of 100, left to right.
    pub fn build_input(
        &self,
        mode: Mode,
        goal: Badge,
        current_points: i64,
        weights: &[u32],
    ) -> Result<ProgressionInput> {
        let mut weights = weights.to_vec();
        if weights::clamp_all(&mut weights) {
            warn!("Weights exceeded 100% and were clamped to {:?}", weights);
        }

        let categories = mode.categories(self.settings.timing.match_minutes(), &weights)?;

        Ok(ProgressionInput {
            current_points,
            goal,
            categories,
            season_end: self.settings.season.end_date,
            today: self.clock.today(),
        })
    }

    pub fn calculate(&self, request: &CalculationRequest) -> Result<ProgressionResult> {
        let current_points = estimator::parse_points(&request.current_points)?;

        info!(
            "Projecting {} progress: {} points toward {}",
            request.mode,
            current_points,
            request.goal.display()
        );

        let input = self.build_input(
            request.mode,
            request.goal.clone(),
            current_points,
            &request.weights,
        )?;

        let mut result = estimator::run_projection(&input)?;
        result.next_badge = request.mode.next_badge(current_points);

        info!(
            "{} points remaining, {} days left",
            result.points_remaining,
            result.days_remaining()
        );

        Ok(result)
    }
}
