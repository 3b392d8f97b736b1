use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

/// Plain date formats attempted in order. Month-first forms come before
/// day-first forms, so an ambiguous value like "03/04/2024" resolves as
/// March 4th and day-first is only used when month-first cannot apply.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Formats attempted when the value carries a time component. Only the
/// date part is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a raw date cell whose format is not known in advance.
///
/// Each format in `DATE_FORMATS` is tried in order, then each in
/// `DATETIME_FORMATS` with the time part discarded. Returns `None` for
/// empty cells and for values no format accepts; callers decide whether
/// that makes the row unusable.
pub fn parse_mixed_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }

    debug!("unparseable date value: {:?}", trimmed);
    None
}

/// Formats a date as the calendar-month label used to group the monthly
/// report, e.g. "March 2024".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_mixed_date("2024-03-10"), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_parse_slash_ymd() {
        assert_eq!(parse_mixed_date("2024/03/10"), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_parse_month_first() {
        assert_eq!(parse_mixed_date("03/10/2024"), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_parse_day_first_fallback() {
        // Month-first cannot apply: 25 is not a valid month.
        assert_eq!(parse_mixed_date("25/03/2024"), Some(date(2024, 3, 25)));
    }

    #[test]
    fn test_ambiguous_value_prefers_month_first() {
        assert_eq!(parse_mixed_date("03/04/2024"), Some(date(2024, 3, 4)));
    }

    #[test]
    fn test_parse_month_name() {
        assert_eq!(parse_mixed_date("March 10, 2024"), Some(date(2024, 3, 10)));
        assert_eq!(parse_mixed_date("Mar 10, 2024"), Some(date(2024, 3, 10)));
        assert_eq!(parse_mixed_date("10 March 2024"), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_parse_datetime_keeps_date_part() {
        assert_eq!(
            parse_mixed_date("2024-03-10 14:30:00"),
            Some(date(2024, 3, 10))
        );
        assert_eq!(
            parse_mixed_date("2024-03-10T14:30:00"),
            Some(date(2024, 3, 10))
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_mixed_date("  2024-03-10  "), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert_eq!(parse_mixed_date(""), None);
        assert_eq!(parse_mixed_date("   "), None);
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert_eq!(parse_mixed_date("not-a-date"), None);
        assert_eq!(parse_mixed_date("2024-13-40"), None);
        assert_eq!(parse_mixed_date("N/A"), None);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(date(2024, 3, 10)), "March 2024");
        assert_eq!(month_label(date(2023, 12, 1)), "December 2023");
        // Same month in different years yields distinct labels.
        assert_ne!(month_label(date(2023, 3, 1)), month_label(date(2024, 3, 1)));
    }
}
