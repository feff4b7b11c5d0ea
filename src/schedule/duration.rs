use std::sync::OnceLock;

use regex::Regex;

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*(hour|day|week|month)s?").unwrap())
}

fn first_quantity(text: &str) -> Option<(u32, String)> {
    let lower = text.to_lowercase();
    let caps = duration_re().captures(&lower)?;
    let amount = caps[1].parse::<u32>().ok()?;
    Some((amount, caps[2].to_string()))
}

/// Interpret a free-form milestone duration as whole weeks.
///
/// `"N weeks"` → N, `"N months"` → 4N, `"N days"` → N/5 (floored, min 1).
/// Hours and unrecognized text mean the 2-week default.
pub fn parse_duration_weeks(duration: &str) -> u32 {
    match first_quantity(duration) {
        Some((n, unit)) => match unit.as_str() {
            "week" => n.max(1),
            "month" => (n * 4).max(1),
            "day" => (n / 5).max(1),
            _ => 2,
        },
        None => 2,
    }
}

/// Interpret a free-form task effort as hours.
///
/// `"N hours"` → N, `"N days"` → 8N, `"N weeks"` → 40N; default 8.
pub fn parse_effort_hours(effort: &str) -> f64 {
    match first_quantity(effort) {
        Some((n, unit)) => match unit.as_str() {
            "hour" => n as f64,
            "day" => (n * 8) as f64,
            "week" => (n * 40) as f64,
            _ => 8.0,
        },
        None => 8.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_duration_units() {
        assert_eq!(parse_duration_weeks("2 weeks"), 2);
        assert_eq!(parse_duration_weeks("1 week"), 1);
        assert_eq!(parse_duration_weeks("3 months"), 12);
        assert_eq!(parse_duration_weeks("12 days"), 2);
        assert_eq!(parse_duration_weeks("3 days"), 1);
        assert_eq!(parse_duration_weeks("soon"), 2);
    }

    #[test]
    fn test_units_are_case_insensitive() {
        assert_eq!(parse_duration_weeks("2 Weeks"), 2);
        assert_eq!(parse_effort_hours("16 HOURS"), 16.0);
    }

    #[test]
    fn test_task_effort_units() {
        assert_eq!(parse_effort_hours("16 hours"), 16.0);
        assert_eq!(parse_effort_hours("2 days"), 16.0);
        assert_eq!(parse_effort_hours("1 week"), 40.0);
        assert_eq!(parse_effort_hours("unknown"), 8.0);
    }
}
