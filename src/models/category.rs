use serde::{Deserialize, Serialize};

/// A way of finishing a match, before timing is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTemplate {
    pub name: &'static str,
    pub points: u32,
    /// Rounds played to reach this outcome; scales the match time.
    pub rounds: u32,
}

pub(crate) const WORLD_TOUR_CATEGORIES: &[CategoryTemplate] = &[
    CategoryTemplate { name: "Round one", points: 2, rounds: 1 },
    CategoryTemplate { name: "Round two", points: 6, rounds: 2 },
    CategoryTemplate { name: "Lose final round", points: 14, rounds: 3 },
    CategoryTemplate { name: "Win final round", points: 25, rounds: 3 },
];

pub(crate) const QUICK_PLAY_CATEGORIES: &[CategoryTemplate] = &[
    CategoryTemplate { name: "Quick Cash 1st place", points: 10, rounds: 1 },
    CategoryTemplate { name: "Quick Cash 2nd place", points: 6, rounds: 1 },
    CategoryTemplate { name: "Quick Cash 3rd place", points: 5, rounds: 1 },
    CategoryTemplate { name: "Team win", points: 10, rounds: 1 },
    CategoryTemplate { name: "Team loss", points: 5, rounds: 1 },
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    pub points: u32,
    /// Minutes spent per game ending in this category
    pub base_minutes: f64,
    /// Percent chance of this outcome, 0-100
    pub weight: u32,
}

impl Category {
    pub fn new(name: impl Into<String>, points: u32, base_minutes: f64) -> Self {
        Self {
            name: name.into(),
            points,
            base_minutes,
            weight: 0,
        }
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn from_template(template: &CategoryTemplate, match_minutes: f64) -> Self {
        Self::new(
            template.name,
            template.points,
            template.rounds as f64 * match_minutes,
        )
    }
}
