/// Renders a minute count with the coarsest unit breakdown that applies.
///
/// Hours and minutes are truncated, never rounded: `89.9` minutes is
/// `"1 hours, 29 minutes"`. Negative or non-finite input renders as zero.
pub fn format_duration(total_minutes: f64) -> String {
    let total_minutes = if total_minutes.is_finite() {
        total_minutes.max(0.0)
    } else {
        0.0
    };

    let hours = (total_minutes / 60.0).floor() as u64;
    let minutes = (total_minutes % 60.0).floor() as u64;
    let days = hours / 24;

    if days > 0 {
        format!("{} days, {} hours, {} minutes", days, hours % 24, minutes)
    } else if hours > 0 {
        format!("{} hours, {} minutes", hours, minutes)
    } else {
        format!("{} minutes", minutes)
    }
}
