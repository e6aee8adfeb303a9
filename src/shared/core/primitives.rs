use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, ParseError};

/// Display pattern for entry timestamps, e.g. `14:05 | 31 Jan 2025`.
pub const TIMESTAMP_FORMAT: &str = "%H:%M | %d %b %Y";

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local wall-clock time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
}

/// Parse a `HH:MM` or `HH:MM:SS` clock time.
pub fn parse_time(raw: &str) -> Result<NaiveTime, ParseError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
}

/// Combine an optional date and time, falling back to `now` for the missing half.
pub fn combine_or_now(
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    match (date, time) {
        (None, None) => None,
        (date, time) => Some(NaiveDateTime::new(
            date.unwrap_or(now.date()),
            time.unwrap_or(now.time()),
        )),
    }
}
