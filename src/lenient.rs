//! Lenient field parsing shared by every call site.
//!
//! Each parser documents its default-on-failure value. Nothing here returns
//! an error: malformed input degrades to the default.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

/// Parse a vote's points column. Defaults to `0`.
///
/// Accepts an optional sign followed by digits and ignores anything after
/// the digit run, so `"5 pts"` is 5 and `"3.9"` is 3. Values outside the
/// `i32` range also default to `0`.
pub fn parse_points(text: &str) -> i64 {
    let t = text.trim();
    let (negative, digits) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }

    let value = match digits[..end].parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) => return 0,
    };
    i32::try_from(value).map(i64::from).unwrap_or(0)
}

/// Layouts without an offset, tried after RFC 3339.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a `created` column, reading offset-less layouts as UTC.
/// Defaults to `None`.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    parse_local_timestamp(text, Utc.fix()).map(|dt| dt.with_timezone(&Utc))
}

/// Parse a `created` column into `local` time. Offset-less layouts are
/// taken as already being in `local`; RFC 3339 values are converted.
/// Defaults to `None`.
pub fn parse_local_timestamp(text: &str, local: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.with_timezone(&local));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(t, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(t, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    local.from_local_datetime(&naive).single()
}

/// Sort key for chronological ordering: unparseable timestamps sort as the epoch.
pub fn chronological_key(text: &str) -> DateTime<Utc> {
    parse_timestamp(text).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
