use serde::{Deserialize, Serialize};

/// Seasonal rank badges, lowest first.
pub(crate) const WORLD_TOUR_BADGES: &[(&str, i64)] = &[
    ("Bronze 4", 25),
    ("Bronze 3", 50),
    ("Bronze 2", 75),
    ("Bronze 1", 100),
    ("Silver 4", 150),
    ("Silver 3", 200),
    ("Silver 2", 250),
    ("Silver 1", 300),
    ("Gold 4", 375),
    ("Gold 3", 450),
    ("Gold 2", 525),
    ("Gold 1", 600),
    ("Platinum 4", 700),
    ("Platinum 3", 800),
    ("Platinum 2", 900),
    ("Platinum 1", 1000),
    ("Diamond 4", 1150),
    ("Diamond 3", 1300),
    ("Diamond 2", 1450),
    ("Diamond 1", 1600),
    ("Emerald 4", 1800),
    ("Emerald 3", 2000),
    ("Emerald 2", 2200),
    ("Emerald 1", 2400),
];

pub(crate) const QUICK_PLAY_BADGES: &[(&str, i64)] = &[
    ("Bronze 4", 50),
    ("Bronze 3", 100),
    ("Bronze 2", 150),
    ("Bronze 1", 200),
    ("Silver 4", 300),
    ("Silver 3", 400),
    ("Silver 2", 500),
    ("Silver 1", 600),
    ("Gold 4", 775),
    ("Gold 3", 950),
    ("Gold 2", 1125),
    ("Gold 1", 1300),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub threshold: i64,
}

impl Badge {
    pub fn new(label: impl Into<String>, threshold: i64) -> Self {
        Self {
            label: label.into(),
            threshold,
        }
    }

    /// Dropdown-style label, e.g. `Emerald 1: 2400`.
    pub fn display(&self) -> String {
        format!("{}: {}", self.label, self.threshold)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextBadge {
    pub badge: Badge,
    pub points_needed: i64,
}

pub(crate) fn ladder(table: &[(&str, i64)]) -> Vec<Badge> {
    table
        .iter()
        .map(|(label, threshold)| Badge::new(*label, *threshold))
        .collect()
}

pub(crate) fn next_above(table: &[(&str, i64)], current_points: i64) -> Option<NextBadge> {
    table
        .iter()
        .find(|(_, threshold)| *threshold > current_points)
        .map(|(label, threshold)| NextBadge {
            badge: Badge::new(*label, *threshold),
            points_needed: threshold.saturating_sub(current_points),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladders_are_ascending() {
        for table in [WORLD_TOUR_BADGES, QUICK_PLAY_BADGES] {
            assert!(table.windows(2).all(|w| w[0].1 < w[1].1));
        }
    }

    #[test]
    fn test_next_badge_skips_reached_tiers() {
        let next = next_above(WORLD_TOUR_BADGES, 2350).unwrap();
        assert_eq!(next.badge.label, "Emerald 1");
        assert_eq!(next.points_needed, 50);

        // Sitting exactly on a threshold means that badge is already earned
        let next = next_above(WORLD_TOUR_BADGES, 600).unwrap();
        assert_eq!(next.badge.label, "Platinum 4");
        assert_eq!(next.points_needed, 100);
    }

    #[test]
    fn test_no_next_badge_at_top() {
        assert!(next_above(QUICK_PLAY_BADGES, 1300).is_none());
    }

    #[test]
    fn test_display_label() {
        assert_eq!(Badge::new("Gold 1", 1300).display(), "Gold 1: 1300");
    }
}
