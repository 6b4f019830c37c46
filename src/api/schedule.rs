//! Schedule Lookups

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{get_json, ApiError};
use crate::config::endpoints;
use crate::models::ScheduleSlot;

/// Characters escaped in a query-string value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

pub fn schedules_url(date: &str) -> String {
    format!("{}?fecha={}", endpoints::SCHEDULES, utf8_percent_encode(date, QUERY_VALUE))
}

/// `YYYY-MM-DD`, as produced by `<input type="date">`
pub fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

pub async fn list_schedules(date: &str) -> Result<Vec<ScheduleSlot>, ApiError> {
    get_json(&schedules_url(date)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedules_url() {
        assert_eq!(schedules_url("2026-10-14"), "/api/programaciones?fecha=2026-10-14");
        assert_eq!(schedules_url("a b&c"), "/api/programaciones?fecha=a%20b%26c");
    }

    #[test]
    fn test_is_iso_date() {
        assert!(is_iso_date("2026-10-14"));
        assert!(!is_iso_date("2026-1-14"));
        assert!(!is_iso_date("14/10/2026"));
        assert!(!is_iso_date(""));
    }
}
