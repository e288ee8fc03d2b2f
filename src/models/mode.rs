use serde::{Deserialize, Serialize};

use super::badge::{self, Badge, NextBadge, QUICK_PLAY_BADGES, WORLD_TOUR_BADGES};
use super::category::{Category, CategoryTemplate, QUICK_PLAY_CATEGORIES, WORLD_TOUR_CATEGORIES};
use super::error::{EstimatorError, Result};

/// Playlist being ranked in. Selects the badge ladder and the category table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mode {
    WorldTour,
    QuickPlay,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::WorldTour, Mode::QuickPlay];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::WorldTour => "world-tour",
            Mode::QuickPlay => "quick-play",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::WorldTour => "World Tour",
            Mode::QuickPlay => "Quick Play",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "world-tour" | "worldtour" | "wt" => Some(Mode::WorldTour),
            "quick-play" | "quickplay" | "qp" => Some(Mode::QuickPlay),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| EstimatorError::UnknownMode(s.to_string()))
    }

    pub fn toggle(&self) -> Self {
        match self {
            Mode::WorldTour => Mode::QuickPlay,
            Mode::QuickPlay => Mode::WorldTour,
        }
    }

    fn badge_table(&self) -> &'static [(&'static str, i64)] {
        match self {
            Mode::WorldTour => WORLD_TOUR_BADGES,
            Mode::QuickPlay => QUICK_PLAY_BADGES,
        }
    }

    pub fn category_templates(&self) -> &'static [CategoryTemplate] {
        match self {
            Mode::WorldTour => WORLD_TOUR_CATEGORIES,
            Mode::QuickPlay => QUICK_PLAY_CATEGORIES,
        }
    }

    pub fn category_count(&self) -> usize {
        self.category_templates().len()
    }

    pub fn badges(&self) -> Vec<Badge> {
        badge::ladder(self.badge_table())
    }

    /// The top badge of the ladder.
    pub fn default_goal(&self) -> Badge {
        let table = self.badge_table();
        let (label, threshold) = table[table.len() - 1];
        Badge::new(label, threshold)
    }

    pub fn find_badge(&self, label: &str) -> Result<Badge> {
        let wanted = label.trim();
        self.badge_table()
            .iter()
            .find(|(l, _)| l.eq_ignore_ascii_case(wanted))
            .map(|(l, t)| Badge::new(*l, *t))
            .ok_or_else(|| EstimatorError::UnknownBadge {
                mode: self.display_name().to_string(),
                label: label.to_string(),
            })
    }

    pub fn next_badge(&self, current_points: i64) -> Option<NextBadge> {
        badge::next_above(self.badge_table(), current_points)
    }

    /// Builds the category table for this mode with the given match length and weights.
    pub fn categories(&self, match_minutes: f64, weights: &[u32]) -> Result<Vec<Category>> {
        let templates = self.category_templates();
        if weights.len() != templates.len() {
            return Err(EstimatorError::WeightCountMismatch {
                expected: templates.len(),
                got: weights.len(),
            });
        }

        Ok(templates
            .iter()
            .zip(weights)
            .map(|(t, w)| Category::from_template(t, match_minutes).with_weight(*w))
            .collect())
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
