use std::ops::Range;

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::entry::OrgDate;

static ACTIVE_TS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(\d{4}-\d{2}-\d{2})([^<>]*)>").expect("valid timestamp regex"));
static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(\d{4}-\d{2}-\d{2})([^<>]*)>--<(\d{4}-\d{2}-\d{2})([^<>]*)>").expect("valid range regex")
});
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2}):(\d{2})").expect("valid time regex"));

/// Builds a date from the `YYYY-MM-DD` part and whatever follows it inside
/// the brackets (day name, time, repeater). Only the first time is used, so a
/// span like `10:00-11:30` resolves to its start.
pub fn parse_timestamp(date: &str, rest: &str) -> Option<OrgDate> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    match TIME_RE.captures(rest) {
        Some(caps) => {
            let hour: u32 = caps[1].parse().ok()?;
            let minute: u32 = caps[2].parse().ok()?;
            let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
            Some(OrgDate::DateTime(day.and_time(time)))
        }
        None => Some(OrgDate::Date(day)),
    }
}

/// Parses a single bracketed active timestamp such as `<2024-01-05 Fri 10:00>`.
pub fn parse_active(text: &str) -> Option<OrgDate> {
    let caps = ACTIVE_TS_RE.captures(text)?;
    parse_timestamp(&caps[1], &caps[2])
}

/// Active timestamps and ranges found on one line, in order of appearance.
#[derive(Debug, Default, PartialEq)]
pub struct LineDates {
    pub timestamps: Vec<OrgDate>,
    pub ranges: Vec<(OrgDate, OrgDate)>,
}

pub fn scan_line(line: &str) -> LineDates {
    let mut found = LineDates::default();
    let mut covered: Vec<Range<usize>> = Vec::new();

    for caps in RANGE_RE.captures_iter(line) {
        if let Some(whole) = caps.get(0) {
            covered.push(whole.range());
        }
        let start = parse_timestamp(&caps[1], &caps[2]);
        let end = parse_timestamp(&caps[3], &caps[4]);
        if let (Some(start), Some(end)) = (start, end) {
            found.ranges.push((start, end));
        }
    }

    for caps in ACTIVE_TS_RE.captures_iter(line) {
        let Some(whole) = caps.get(0) else { continue };
        if covered.iter().any(|r| r.contains(&whole.start())) {
            continue;
        }
        if let Some(date) = parse_timestamp(&caps[1], &caps[2]) {
            found.timestamps.push(date);
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_active_variants() {
        assert_eq!(parse_active("<2024-01-05>"), Some(OrgDate::Date(day(2024, 1, 5))));
        assert_eq!(parse_active("<2024-01-05 Fri>"), Some(OrgDate::Date(day(2024, 1, 5))));
        assert_eq!(parse_active("<2024-01-05 Fri +1w>"), Some(OrgDate::Date(day(2024, 1, 5))));
        assert_eq!(
            parse_active("<2024-01-05 Fri 10:00-11:30>"),
            Some(OrgDate::DateTime(day(2024, 1, 5).and_hms_opt(10, 0, 0).unwrap()))
        );
    }

    #[test]
    fn test_invalid_calendar_date_is_ignored() {
        assert_eq!(parse_active("<2024-02-31 Sat>"), None);
        assert_eq!(parse_active("<2024-02-01 Thu 25:00>"), None);
    }

    #[test]
    fn test_scan_line_separates_ranges() {
        let found = scan_line("Trip <2024-05-01 Wed>--<2024-05-03 Fri> then call <2024-05-10>");
        assert_eq!(
            found.ranges,
            vec![(OrgDate::Date(day(2024, 5, 1)), OrgDate::Date(day(2024, 5, 3)))]
        );
        assert_eq!(found.timestamps, vec![OrgDate::Date(day(2024, 5, 10))]);
    }

    #[test]
    fn test_scan_line_ignores_inactive() {
        let found = scan_line("Noted [2024-05-01 Wed] somewhere");
        assert_eq!(found, LineDates::default());
    }
}
