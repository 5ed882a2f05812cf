use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

// Shapes the HTML date input and pasted timestamps produce
const ISO_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const GENERIC_DATE_FORMATS: [&str; 7] = [
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%A, %B %d, %Y",
];

fn ordinal_suffix() -> &'static Regex {
    static ORDINAL: OnceLock<Regex> = OnceLock::new();
    ORDINAL.get_or_init(|| Regex::new(r"(\d{1,2})(st|nd|rd|th)\b").expect("valid ordinal regex"))
}

/// Parse a user-entered date into a calendar date.
///
/// Text containing `-` is read as `yyyy-mm-dd` (optionally followed by a time),
/// text containing `/` as `mm/dd/yyyy`, and anything else goes through a set of
/// long-form fallbacks. Returns `None` for blank or unparseable input.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if value.contains('-') {
        return parse_iso_like(value).or_else(|| parse_generic(value));
    }

    if value.contains('/') {
        return parse_slash(value);
    }

    parse_generic(value)
}

fn parse_iso_like(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }

    ISO_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
}

fn parse_slash(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('/').map(str::trim);
    let (month, day, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn parse_generic(value: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc2822(value) {
        return Some(datetime.date_naive());
    }

    let cleaned = ordinal_suffix().replace_all(value, "$1");
    GENERIC_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}

/// 1-based day of the trip on which `item_date` falls.
///
/// Missing or unparseable dates, and items dated before the trip starts,
/// all land on day 1.
pub fn compute_day_index(trip_start: Option<&str>, item_date: Option<&str>) -> u32 {
    let (Some(start), Some(item)) = (
        trip_start.and_then(parse_date),
        item_date.and_then(parse_date),
    ) else {
        return 1;
    };

    let offset = item.signed_duration_since(start).num_days();
    if offset < 0 {
        return 1;
    }

    u32::try_from(offset + 1).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_dates() {
        assert_eq!(parse_date("2024-06-01"), Some(date(2024, 6, 1)));
        assert_eq!(parse_date(" 2024-06-01 "), Some(date(2024, 6, 1)));
        assert_eq!(parse_date("2024-06-01T18:45"), Some(date(2024, 6, 1)));
        assert_eq!(parse_date("2024-06-01 07:15:00"), Some(date(2024, 6, 1)));
        assert_eq!(parse_date("2024-06-01T23:30:00-05:00"), Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_parse_slash_dates() {
        assert_eq!(parse_date("06/03/2024"), Some(date(2024, 6, 3)));
        assert_eq!(parse_date("6/3/2024"), Some(date(2024, 6, 3)));
        assert_eq!(parse_date("13/01/2024"), None);
        assert_eq!(parse_date("06/03"), None);
        assert_eq!(parse_date("06/03/2024/1"), None);
    }

    #[test]
    fn test_parse_generic_dates() {
        assert_eq!(parse_date("June 3, 2024"), Some(date(2024, 6, 3)));
        assert_eq!(parse_date("Jun 3rd 2024"), Some(date(2024, 6, 3)));
        assert_eq!(parse_date("3 June 2024"), Some(date(2024, 6, 3)));
    }

    #[test]
    fn test_parse_invalid_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("tomorrow"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn test_day_index_counts_from_one() {
        assert_eq!(compute_day_index(Some("2024-06-01"), Some("2024-06-01")), 1);
        assert_eq!(compute_day_index(Some("2024-06-01"), Some("2024-06-03")), 3);
        assert_eq!(compute_day_index(Some("06/01/2024"), Some("2024-06-10")), 10);
        assert_eq!(compute_day_index(Some("2024-12-31"), Some("01/01/2025")), 2);
    }

    #[test]
    fn test_day_index_clamps_to_first_day() {
        assert_eq!(compute_day_index(Some("2024-06-05"), Some("2024-06-01")), 1);
        assert_eq!(compute_day_index(None, Some("2024-06-01")), 1);
        assert_eq!(compute_day_index(Some("2024-06-01"), None), 1);
        assert_eq!(compute_day_index(Some("not a date"), Some("2024-06-03")), 1);
        assert_eq!(compute_day_index(Some("2024-06-01"), Some("13/45/2024")), 1);
    }
}
