use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Badge, Category, NextBadge};

/// Everything a projection needs, owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressionInput {
    pub current_points: i64,
    pub goal: Badge,
    pub categories: Vec<Category>,
    pub season_end: NaiveDate,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryEstimate {
    pub name: String,
    pub points: u32,
    pub games_needed: u64,
    pub playtime_minutes: f64,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeasonOutlook {
    Active {
        days_remaining: i64,
        daily_pace: i64,
        weighted_daily_minutes: f64,
        max_daily_minutes: f64,
    },
    /// The end date is today or already behind us; no daily figures exist.
    Ended { days_remaining: i64 },
}

impl SeasonOutlook {
    pub fn days_remaining(&self) -> i64 {
        match self {
            SeasonOutlook::Active { days_remaining, .. } => *days_remaining,
            SeasonOutlook::Ended { days_remaining } => *days_remaining,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SeasonOutlook::Active { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressionResult {
    pub goal: Badge,
    pub points_remaining: i64,
    pub categories: Vec<CategoryEstimate>,
    pub weighted_playtime_minutes: f64,
    pub outlook: SeasonOutlook,
    pub next_badge: Option<NextBadge>,
}

impl ProgressionResult {
    pub fn days_remaining(&self) -> i64 {
        self.outlook.days_remaining()
    }

    pub fn goal_reached(&self) -> bool {
        self.points_remaining <= 0
    }
}
