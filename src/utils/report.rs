use crate::models::{ProgressionResult, SeasonOutlook};

use super::format_duration;

pub const TABLE_HEADERS: [&str; 4] = ["Round Type", "Games", "Playtime", "Chance"];

/// Text summary shown above the category table.
pub fn summary_lines(result: &ProgressionResult) -> Vec<String> {
    let mut lines = Vec::new();

    if result.points_remaining == 0 {
        lines.push(format!("Goal reached: {}", result.goal.label));
    } else if result.goal_reached() {
        lines.push(format!(
            "Goal reached: {} points past {}",
            -result.points_remaining,
            result.goal.label
        ));
    } else {
        lines.push(format!(
            "Points remaining: {} (goal {})",
            result.points_remaining,
            result.goal.display()
        ));
    }

    if let Some(next) = &result.next_badge {
        lines.push(format!(
            "Next badge: {} ({} points away)",
            next.badge.label, next.points_needed
        ));
    }

    lines.push(format!(
        "Estimated play time: {}",
        format_duration(result.weighted_playtime_minutes)
    ));

    match &result.outlook {
        SeasonOutlook::Active {
            days_remaining,
            daily_pace,
            weighted_daily_minutes,
            max_daily_minutes,
        } => {
            lines.push(format!("Days left in season: {}", days_remaining));
            lines.push(format!("Daily points: {}", daily_pace));
            lines.push(format!(
                "Max daily play time: {}",
                format_duration(*max_daily_minutes)
            ));
            lines.push(format!(
                "Weighted daily play time: {}",
                format_duration(*weighted_daily_minutes)
            ));
        }
        SeasonOutlook::Ended { days_remaining } => {
            lines.push(format!("Days left in season: {}", days_remaining));
            lines.push("Cannot compute daily pace: the season has ended".to_string());
        }
    }

    lines
}

/// One row per category: name, games, formatted playtime, weight.
pub fn table_rows(result: &ProgressionResult) -> Vec<[String; 4]> {
    result
        .categories
        .iter()
        .map(|c| {
            [
                c.name.clone(),
                c.games_needed.to_string(),
                format_duration(c.playtime_minutes),
                format!("{}%", c.weight),
            ]
        })
        .collect()
}

/// Plain fixed-width table for terminal output.
pub fn render_table(result: &ProgressionResult) -> String {
    let rows = table_rows(result);
    let mut widths = TABLE_HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let line = |cells: [&str; 4]| {
        format!(
            "{:<w0$}  {:>w1$}  {:<w2$}  {:>w3$}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        )
        .trim_end()
        .to_string()
    };

    let mut out = vec![line(TABLE_HEADERS)];
    for row in &rows {
        out.push(line([&row[0], &row[1], &row[2], &row[3]]));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Badge, CategoryEstimate, NextBadge};

    fn sample(outlook: SeasonOutlook, points_remaining: i64) -> ProgressionResult {
        ProgressionResult {
            goal: Badge::new("Emerald 1", 2400),
            points_remaining,
            categories: vec![CategoryEstimate {
                name: "Round one".to_string(),
                points: 2,
                games_needed: 25,
                playtime_minutes: 325.0,
                weight: 50,
            }],
            weighted_playtime_minutes: 162.5,
            outlook,
            next_badge: Some(NextBadge {
                badge: Badge::new("Emerald 1", 2400),
                points_needed: 50,
            }),
        }
    }

    #[test]
    fn test_active_summary() {
        let outlook = SeasonOutlook::Active {
            days_remaining: 10,
            daily_pace: 5,
            weighted_daily_minutes: 16.25,
            max_daily_minutes: 32.5,
        };
        let lines = summary_lines(&sample(outlook, 50));

        assert_eq!(lines[0], "Points remaining: 50 (goal Emerald 1: 2400)");
        assert_eq!(lines[1], "Next badge: Emerald 1 (50 points away)");
        assert_eq!(lines[2], "Estimated play time: 2 hours, 42 minutes");
        assert!(lines.contains(&"Daily points: 5".to_string()));
        assert!(lines.contains(&"Max daily play time: 32 minutes".to_string()));
    }

    #[test]
    fn test_ended_summary() {
        let lines = summary_lines(&sample(SeasonOutlook::Ended { days_remaining: -2 }, 50));
        assert_eq!(
            lines.last().unwrap(),
            "Cannot compute daily pace: the season has ended"
        );
    }

    #[test]
    fn test_goal_reached_summary() {
        let outlook = SeasonOutlook::Ended { days_remaining: 0 };
        let lines = summary_lines(&sample(outlook, -15));
        assert_eq!(lines[0], "Goal reached: 15 points past Emerald 1");
    }

    #[test]
    fn test_goal_hit_exactly_summary() {
        let outlook = SeasonOutlook::Ended { days_remaining: 0 };
        let lines = summary_lines(&sample(outlook, 0));
        assert_eq!(lines[0], "Goal reached: Emerald 1");
    }

    #[test]
    fn test_render_table() {
        let outlook = SeasonOutlook::Ended { days_remaining: 0 };
        let table = render_table(&sample(outlook, 50));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Round Type"));
        assert!(lines[1].contains("5 hours, 25 minutes"));
        assert!(lines[1].ends_with("50%"));
    }
}
