//! History Date Value Object
//!
//! Start and end dates of experience and education entries. Clients send
//! either a calendar date (`2020-01-31`) or a full RFC 3339 timestamp;
//! only the calendar date is kept.

use chrono::{DateTime, NaiveDate};

/// Parse a client-supplied date
pub fn parse_history_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date() {
        assert_eq!(
            parse_history_date("2019-06-01"),
            NaiveDate::from_ymd_opt(2019, 6, 1)
        );
    }

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(
            parse_history_date("2019-06-01T09:30:00Z"),
            NaiveDate::from_ymd_opt(2019, 6, 1)
        );
        assert_eq!(
            parse_history_date("2019-06-01T23:30:00-02:00"),
            NaiveDate::from_ymd_opt(2019, 6, 1)
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_history_date(""), None);
        assert_eq!(parse_history_date("last summer"), None);
        assert_eq!(parse_history_date("2019-13-01"), None);
    }
}
