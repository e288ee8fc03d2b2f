use chrono::NaiveDate;
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{EstimatorError, Mode, Result};
use crate::scoring::weights;

const ENV_PREFIX: &str = "TOUR_CALC";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub app: AppSettings,
    pub season: SeasonSettings,
    pub timing: TimingSettings,
    pub defaults: DefaultSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonSettings {
    pub name: String,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingSettings {
    /// Minutes of actual play in one round
    pub base_match_minutes: f64,
    /// Queue, loading and transition time added to every round
    pub additional_match_minutes: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultSettings {
    pub mode: String,
    pub world_tour_weights: Vec<u32>,
    pub quick_play_weights: Vec<u32>,
}

impl TimingSettings {
    pub fn match_minutes(&self) -> f64 {
        self.base_match_minutes + self.additional_match_minutes
    }
}

impl DefaultSettings {
    pub fn mode(&self) -> Result<Mode> {
        Mode::parse(&self.mode)
    }

    pub fn weights_for(&self, mode: Mode) -> &[u32] {
        match mode {
            Mode::WorldTour => &self.world_tour_weights,
            Mode::QuickPlay => &self.quick_play_weights,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Tour Calculator".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "warn".to_string(),
            },
            season: SeasonSettings {
                name: "Season 8".to_string(),
                end_date: NaiveDate::from_ymd_opt(2025, 12, 11).unwrap_or_default(),
            },
            timing: TimingSettings {
                base_match_minutes: 10.0,
                additional_match_minutes: 3.0,
            },
            defaults: DefaultSettings {
                mode: Mode::WorldTour.as_str().to_string(),
                world_tour_weights: vec![50, 25, 15, 10],
                quick_play_weights: vec![20, 20, 20, 20, 20],
            },
        }
    }
}

impl Settings {
    pub fn new() -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Self::environment())
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?;

        s.try_deserialize()
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("defaults.world_tour_weights")
            .with_list_parse_key("defaults.quick_play_weights")
    }

    pub fn validate(&self) -> Result<()> {
        let timing = &self.timing;
        if !(timing.base_match_minutes > 0.0) || timing.additional_match_minutes < 0.0 {
            return Err(EstimatorError::ConfigError(format!(
                "Match timing must be positive, got {} + {} minutes",
                timing.base_match_minutes, timing.additional_match_minutes
            )));
        }

        self.defaults.mode()?;

        for mode in Mode::ALL {
            let list = self.defaults.weights_for(mode);
            if list.len() != mode.category_count() {
                return Err(EstimatorError::WeightCountMismatch {
                    expected: mode.category_count(),
                    got: list.len(),
                });
            }
            weights::validate(list)?;
        }

        Ok(())
    }
}
