use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Parse a publication date into epoch milliseconds.
///
/// Accepts RFC 3339 (`2024-01-15T10:00:00Z`, `2024-01-15T10:00:00+05:30`),
/// naive date-times (`2024-01-15T10:00:00`, `2024-01-15 10:00:00.123`, read as
/// UTC) and plain dates (`2024-01-15`, midnight UTC). Surrounding whitespace is
/// ignored. Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().timestamp_millis());
    }
    None
}

/// Missing or unparseable dates rank as the epoch.
pub fn timestamp_or_epoch(raw: &str) -> i64 {
    parse_timestamp(raw).unwrap_or(0)
}

/// Card-style date, e.g. `Jan 5, 2024`, rendered in `tz`. Empty when unparseable.
pub fn display_date(raw: &str, tz: Tz) -> String {
    let Some(millis) = parse_timestamp(raw) else {
        return String::new();
    };
    match tz.timestamp_millis_opt(millis).single() {
        Some(local) => local.format("%b %-d, %Y").to_string(),
        None => String::new(),
    }
}

/// Human distance between `raw` and `now`, with an "ago"/"in" suffix.
///
/// Buckets follow the site's card labels: under 30s is "less than a minute",
/// then minutes, "about N hours", days, months and "about N years".
pub fn relative_age(raw: &str, now: DateTime<Utc>) -> String {
    let Some(millis) = parse_timestamp(raw) else {
        return String::new();
    };
    let delta_secs = (now.timestamp_millis() - millis) / 1000;
    let phrase = distance_phrase(delta_secs.unsigned_abs());
    if delta_secs >= 0 {
        format!("{phrase} ago")
    } else {
        format!("in {phrase}")
    }
}

fn distance_phrase(secs: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const MONTH: u64 = 30 * DAY;
    const YEAR: u64 = 365 * DAY;

    let plural = |n: u64, unit: &str| {
        if n == 1 {
            format!("1 {unit}")
        } else {
            format!("{n} {unit}s")
        }
    };

    if secs < 30 {
        "less than a minute".to_string()
    } else if secs < 45 * MINUTE {
        plural((secs + 30) / MINUTE, "minute")
    } else if secs < DAY {
        let hours = ((secs + HOUR / 2) / HOUR).max(1);
        format!("about {}", plural(hours, "hour"))
    } else if secs < MONTH {
        plural(((secs + DAY / 2) / DAY).max(1), "day")
    } else if secs < YEAR {
        let months = ((secs + MONTH / 2) / MONTH).clamp(1, 11);
        if months == 1 {
            "about 1 month".to_string()
        } else {
            plural(months, "month")
        }
    } else {
        format!("about {}", plural(secs / YEAR, "year"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_formats() {
        assert_eq!(parse_timestamp("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_timestamp("1970-01-01T00:00:01Z"), Some(1_000));
        assert_eq!(parse_timestamp("1970-01-01T01:00:00+01:00"), Some(0));
        assert_eq!(parse_timestamp("1970-01-01T00:00:02.500"), Some(2_500));
        assert_eq!(parse_timestamp("1970-01-01 00:01:00"), Some(60_000));
        assert_eq!(parse_timestamp(" 1970-01-02 "), Some(86_400_000));
    }

    #[test]
    fn rejects_garbage_and_maps_to_epoch() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
        assert_eq!(timestamp_or_epoch("not a date"), 0);
    }

    #[test]
    fn display_date_uses_short_month() {
        assert_eq!(display_date("2024-01-05", chrono_tz::UTC), "Jan 5, 2024");
        assert_eq!(
            display_date("2024-01-05T22:00:00Z", chrono_tz::Asia::Kolkata),
            "Jan 6, 2024"
        );
        assert_eq!(display_date("", chrono_tz::UTC), "");
    }

    #[test]
    fn relative_age_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(relative_age("2024-03-01T11:59:50Z", now), "less than a minute ago");
        assert_eq!(relative_age("2024-03-01T11:55:00Z", now), "5 minutes ago");
        assert_eq!(relative_age("2024-03-01T09:00:00Z", now), "about 3 hours ago");
        assert_eq!(relative_age("2024-02-27T12:00:00Z", now), "3 days ago");
        assert_eq!(relative_age("2023-12-01T12:00:00Z", now), "3 months ago");
        assert_eq!(relative_age("2022-01-01T12:00:00Z", now), "about 2 years ago");
        assert_eq!(relative_age("2024-03-04T12:00:00Z", now), "in 3 days");
        assert_eq!(relative_age("???", now), "");
    }
}
