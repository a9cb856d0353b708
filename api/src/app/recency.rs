//! Relative-time labels and recency ordering
//!
//! Activity records only carry a coarse "N units ago" label. Ordering is
//! re-derived from that label by [`recency_score`], an approximate heuristic:
//! "6 days ago" and "1 week ago" compare by their rough day counts only.
//! Everything that depends on the heuristic goes through this module, so it
//! can be swapped for an instant-based ordering (records keep `occurred_at`).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::entities::ActivityRecord;

/// Label used when an upstream date can't be parsed
pub const UNKNOWN_TIME_LABEL: &str = "recently";

/// Score for labels the heuristic doesn't recognise; sorts last
pub const UNRECOGNIZED_SCORE: u32 = 999;

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Whole days between `event` and `now`, rounded up, at least 1
pub fn elapsed_days(event: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let ms = (now - event).num_milliseconds().unsigned_abs();
    ms.div_ceil(MS_PER_DAY).max(1)
}

/// Bucket an elapsed day count into a coarse phrase
pub fn days_ago_label(days: u64) -> String {
    if days <= 1 {
        "1 day ago".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        plural(days / 7, "week")
    } else {
        plural(days / 30, "month")
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Relative-time label for an event instant
pub fn relative_time_label(event: DateTime<Utc>, now: DateTime<Utc>) -> String {
    days_ago_label(elapsed_days(event, now))
}

/// Parse an upstream date string, assuming UTC when no offset is given.
///
/// Accepts `YYYY-MM-DD HH:MM:SS` (the feed proxy's format), RFC 3339,
/// RFC 2822 and a bare `YYYY-MM-DD`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Label for an upstream date string, [`UNKNOWN_TIME_LABEL`] if unparseable
pub fn label_for(raw: &str, now: DateTime<Utc>) -> (String, Option<DateTime<Utc>>) {
    match parse_timestamp(raw) {
        Some(instant) => (relative_time_label(instant, now), Some(instant)),
        None => (UNKNOWN_TIME_LABEL.to_string(), None),
    }
}

/// Approximate age in days recovered from a relative-time label
pub fn recency_score(label: &str) -> u32 {
    if label.contains("day ago") {
        1
    } else if label.contains("days ago") {
        leading_number(label).unwrap_or(UNRECOGNIZED_SCORE)
    } else if label.contains("week ago") {
        7
    } else if label.contains("weeks ago") {
        leading_number(label).map_or(UNRECOGNIZED_SCORE, |n| n.saturating_mul(7))
    } else if label.contains("month ago") {
        30
    } else if label.contains("months ago") {
        leading_number(label).map_or(UNRECOGNIZED_SCORE, |n| n.saturating_mul(30))
    } else {
        UNRECOGNIZED_SCORE
    }
}

fn leading_number(label: &str) -> Option<u32> {
    let digits: String = label
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Stable sort, most recent first by [`recency_score`]
pub fn sort_by_recency(records: &mut [ActivityRecord]) {
    records.sort_by_key(|r| recency_score(r.timestamp_label()));
}
