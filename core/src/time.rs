use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use anyhow::{anyhow, Result};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Last second of the given local day.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default()) + Duration::seconds(86_399)
}

/// Sentinel used to rank undated tasks after every dated one.
pub fn far_future() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .map(|d| d.and_time(NaiveTime::default()))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Signed distance in (fractional) days from `reference` to `instant`.
pub fn delta_days(instant: NaiveDateTime, reference: NaiveDateTime) -> f64 {
    (instant - reference).num_milliseconds() as f64 / MILLIS_PER_DAY
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parses a reference instant such as `today`, `+3d` or `2025-01-01 09:00`.
pub fn parse_reference(input: &str) -> Result<NaiveDateTime> {
    parse_reference_at(input, now())
}

pub fn parse_reference_at(input: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let input = input.trim();
    let today = now.date();

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "now" => return Ok(now),
        "today" | "tod" => return Ok(end_of_day(today)),
        "tomorrow" | "tom" => return shifted(today, Duration::try_days(1), input),
        "yesterday" => return shifted(today, Duration::try_days(-1), input),
        _ => {}
    }

    // 2. Relative format (+Nd, +Nw)
    if let Some(rest) = input.strip_prefix('+') {
        let (num_str, unit) = match rest.char_indices().last() {
            Some((idx, _)) => rest.split_at(idx),
            None => return Err(anyhow!("Invalid relative format: {}", input)),
        };
        let count: i64 = num_str.parse().map_err(|_| anyhow!("Invalid relative format: {}", input))?;

        let delta = match unit {
            "d" => Duration::try_days(count),
            "w" => Duration::try_weeks(count),
            _ => return Err(anyhow!("Unknown unit in relative time: {}", unit)),
        };
        return shifted(today, delta, input);
    }

    // 3. Absolute formats
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(end_of_day(d));
    }

    Err(anyhow!("Could not parse date: {}", input))
}

fn shifted(today: NaiveDate, delta: Option<Duration>, input: &str) -> Result<NaiveDateTime> {
    delta
        .and_then(|d| today.checked_add_signed(d))
        .map(end_of_day)
        .ok_or_else(|| anyhow!("Invalid relative format: {}", input))
}
