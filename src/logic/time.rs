//! Time bucketing and relative formatting logic
//!
//! Pure functions over epoch-millisecond timestamps. Wall-clock "now" is
//! always an explicit parameter so callers (and tests) control it.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// One day in milliseconds.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// One hour in milliseconds.
pub const HOUR_MS: i64 = 60 * 60 * 1000;

/// How long the "found" label lingers after mark-as-found.
pub const FOUND_DECAY_MS: i64 = 24 * HOUR_MS;

fn local_datetime(ts_ms: i64) -> Option<DateTime<Local>> {
    match Local.timestamp_millis_opt(ts_ms) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(dt, _) => Some(dt),
        LocalResult::None => None,
    }
}

/// Local calendar date of a timestamp, if representable.
fn local_date(ts_ms: i64) -> Option<NaiveDate> {
    local_datetime(ts_ms).map(|dt| dt.date_naive())
}

/// Start of the local calendar day containing `ts_ms` (00:00:00.000 local),
/// as epoch milliseconds.
///
/// Falls back to UTC day arithmetic if the local timezone cannot resolve
/// the instant (DST gaps around midnight).
pub fn start_of_local_day_ms(ts_ms: i64) -> i64 {
    let Some(date) = local_date(ts_ms) else {
        return ts_ms - ts_ms.rem_euclid(DAY_MS);
    };

    let midnight = date.and_time(NaiveTime::MIN);
    match midnight.and_local_timezone(Local) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
        LocalResult::None => ts_ms - ts_ms.rem_euclid(DAY_MS),
    }
}

/// Format a timestamp relative to `now_ms` for the "added …" / "found …"
/// echoes on cards and the detail screen.
///
/// Wording rules:
/// - same local calendar day → "today"
/// - previous local calendar day → "yesterday"
/// - under 7 days → "N day(s) ago"
/// - under 5 weeks → "N week(s) ago" (weeks = days / 7)
/// - under 24 months → "N month(s) ago" (months = days / 30)
/// - otherwise → "N year(s) ago" (years = days / 365)
///
/// The 30-day month and 365-day year are deliberate approximations; the
/// wording switches singular/plural exactly at N = 1.
pub fn format_relative_time(ts_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(ts_ms);
    let days = diff / DAY_MS;
    let weeks = days / 7;
    let months = days / 30;
    let years = days / 365;

    let ts_date = local_date(ts_ms);
    let now_date = local_date(now_ms);

    if ts_date.is_some() && ts_date == now_date {
        return "today".to_string();
    }

    let yesterday = now_date.and_then(|d| d.pred_opt());
    if ts_date.is_some() && ts_date == yesterday {
        return "yesterday".to_string();
    }

    if days < 7 {
        return if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{} days ago", days)
        };
    }
    if weeks < 5 {
        return if weeks == 1 {
            "1 week ago".to_string()
        } else {
            format!("{} weeks ago", weeks)
        };
    }
    if months < 24 {
        return if months == 1 {
            "1 month ago".to_string()
        } else {
            format!("{} months ago", months)
        };
    }
    if years == 1 {
        "1 year ago".to_string()
    } else {
        format!("{} years ago", years)
    }
}

/// Derived "found" label for an item.
///
/// Stateless decay window over `(found_at, now)`:
/// - no `found_at`, or 24h or more elapsed → no label
/// - under 1h elapsed → "found recently"
/// - otherwise → "found today"
pub fn found_label(found_at: Option<i64>, now_ms: i64) -> Option<&'static str> {
    let found_at = found_at?;
    let elapsed = now_ms - found_at;
    if elapsed >= FOUND_DECAY_MS {
        return None;
    }
    if elapsed < HOUR_MS {
        Some("found recently")
    } else {
        Some("found today")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_local_day_is_midnight() {
        let now = Local::now().timestamp_millis();
        let start = start_of_local_day_ms(now);
        assert!(start <= now);
        assert!(now - start < DAY_MS + HOUR_MS); // DST days can exceed 24h slightly

        // Idempotent: the day start of a day start is itself
        assert_eq!(start_of_local_day_ms(start), start);
    }

    #[test]
    fn test_found_label_recently() {
        let now = 1_700_000_000_000;
        assert_eq!(
            found_label(Some(now - 30 * 60 * 1000), now),
            Some("found recently")
        );
    }

    #[test]
    fn test_found_label_today() {
        let now = 1_700_000_000_000;
        assert_eq!(found_label(Some(now - 5 * HOUR_MS), now), Some("found today"));
    }

    #[test]
    fn test_found_label_expired() {
        let now = 1_700_000_000_000;
        assert_eq!(found_label(Some(now - 25 * HOUR_MS), now), None);
        // Exactly 24h is already expired
        assert_eq!(found_label(Some(now - FOUND_DECAY_MS), now), None);
    }

    #[test]
    fn test_found_label_boundary_one_hour() {
        let now = 1_700_000_000_000;
        // Exactly 1h flips from "recently" to "today"
        assert_eq!(found_label(Some(now - HOUR_MS), now), Some("found today"));
        assert_eq!(
            found_label(Some(now - HOUR_MS + 1), now),
            Some("found recently")
        );
    }

    #[test]
    fn test_found_label_absent() {
        assert_eq!(found_label(None, 1_700_000_000_000), None);
    }

    #[test]
    fn test_relative_time_today() {
        let now = Local::now().timestamp_millis();
        assert_eq!(format_relative_time(now, now), "today");
    }

    #[test]
    fn test_relative_time_yesterday() {
        // Midday avoids crossing a month/DST edge in most zones
        let now = start_of_local_day_ms(Local::now().timestamp_millis()) + 12 * HOUR_MS;
        assert_eq!(format_relative_time(now - DAY_MS, now), "yesterday");
    }

    #[test]
    fn test_relative_time_days() {
        let now = start_of_local_day_ms(Local::now().timestamp_millis()) + 12 * HOUR_MS;
        assert_eq!(format_relative_time(now - 3 * DAY_MS, now), "3 days ago");
        assert_eq!(format_relative_time(now - 6 * DAY_MS, now), "6 days ago");
    }

    #[test]
    fn test_relative_time_weeks() {
        let now = start_of_local_day_ms(Local::now().timestamp_millis()) + 12 * HOUR_MS;
        assert_eq!(format_relative_time(now - 7 * DAY_MS, now), "1 week ago");
        assert_eq!(format_relative_time(now - 20 * DAY_MS, now), "2 weeks ago");
        assert_eq!(format_relative_time(now - 34 * DAY_MS, now), "4 weeks ago");
    }

    #[test]
    fn test_relative_time_months() {
        let now = start_of_local_day_ms(Local::now().timestamp_millis()) + 12 * HOUR_MS;
        // 35 days: weeks = 5, months = 1
        assert_eq!(format_relative_time(now - 35 * DAY_MS, now), "1 month ago");
        assert_eq!(format_relative_time(now - 90 * DAY_MS, now), "3 months ago");
        // 719 days: months = 23, still months
        assert_eq!(
            format_relative_time(now - 719 * DAY_MS, now),
            "23 months ago"
        );
    }

    #[test]
    fn test_relative_time_years() {
        let now = start_of_local_day_ms(Local::now().timestamp_millis()) + 12 * HOUR_MS;
        // 720 days: months = 24 → years = 1
        assert_eq!(format_relative_time(now - 720 * DAY_MS, now), "1 year ago");
        assert_eq!(format_relative_time(now - 800 * DAY_MS, now), "2 years ago");
    }
}
