//! Time and identifier helpers

use chrono::{DateTime, SecondsFormat, Utc};

/// 获取当前 UTC 时间
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Render a timestamp the way records carry it (`2025-01-01T12:00:00.000Z`)
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored or submitted timestamp
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    crate::schema::parse_date(s)
}

/// Generate a record identifier (UUID v4, hyphenated)
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Midnight (UTC) of the current day
pub fn today_utc() -> DateTime<Utc> {
    let now = now_utc();
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_format_and_parse_timestamp() {
        let ts = parse_timestamp("2025-06-01T08:15:30.250Z").unwrap();
        assert_eq!(format_timestamp(&ts), "2025-06-01T08:15:30.250Z");
    }

    #[test]
    fn test_new_record_id_is_uuid() {
        let id = new_record_id();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert_ne!(id, new_record_id());
    }

    #[test]
    fn test_today_is_midnight() {
        let today = today_utc();
        assert_eq!(today.hour(), 0);
        assert_eq!(today.minute(), 0);
        assert_eq!(today.second(), 0);
    }
}
