use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The given date if it is a weekday, otherwise the following Monday.
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    let mut current = date;
    while !is_business_day(current) {
        current += Duration::days(1);
    }
    current
}

/// Advance exactly `days` business days, skipping weekends.
pub fn add_business_days(date: NaiveDate, days: u32) -> NaiveDate {
    let mut current = next_business_day(date);
    for _ in 0..days {
        current += Duration::days(1);
        current = next_business_day(current);
    }
    current
}

/// Last business day of a span occupying `duration_days` business days
/// starting at `start`. A one-day span ends the day it starts.
pub fn business_span_end(start: NaiveDate, duration_days: u32) -> NaiveDate {
    add_business_days(start, duration_days.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_normalizes_to_monday() {
        // 2026-08-29 is a Saturday.
        assert_eq!(next_business_day(date(2026, 8, 29)), date(2026, 8, 31));
        assert_eq!(next_business_day(date(2026, 8, 31)), date(2026, 8, 31));
    }

    #[test]
    fn test_add_business_days_skips_weekend() {
        // Friday + 1 business day = Monday.
        assert_eq!(add_business_days(date(2026, 8, 28), 1), date(2026, 8, 31));
        // Monday + 5 business days = next Monday.
        assert_eq!(add_business_days(date(2026, 8, 31), 5), date(2026, 9, 7));
    }

    #[test]
    fn test_span_end() {
        // 10 business days from a Monday end on the second Friday.
        assert_eq!(business_span_end(date(2026, 8, 31), 10), date(2026, 9, 11));
        assert_eq!(business_span_end(date(2026, 8, 31), 1), date(2026, 8, 31));
    }
}
