use crate::domain::model::DateInput;
use crate::utils::error::{AgeError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc, Weekday};

/// 不帶時區的日期時間格式，一律視為 UTC
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// 帶時區但省略秒數，例如 2000-06-15T10:00+09:00
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

pub fn parse_date(input: &DateInput) -> Result<DateTime<Utc>> {
    match input {
        DateInput::Millis(ms) => DateTime::from_timestamp_millis(*ms)
            .ok_or_else(|| AgeError::invalid_date(ms.to_string(), "timestamp out of range")),
        DateInput::Text(text) => parse_date_str(text),
    }
}

pub fn parse_date_str(raw: &str) -> Result<DateTime<Utc>> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(AgeError::invalid_date(raw, "empty date string"));
    }

    let normalized = expand_extended_year(text);
    let text = normalized.as_deref().unwrap_or(text);

    parse_known_formats(text).ok_or_else(|| AgeError::invalid_date(raw, "unrecognized date format"))
}

/// `+YYYYYY` 六位數年份轉回四位數，僅支援 0000-9999
fn expand_extended_year(text: &str) -> Option<String> {
    let digits = text.strip_prefix('+')?.get(..6)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: u32 = digits.parse().ok()?;
    if year > 9999 {
        return None;
    }
    Some(format!("{:04}{}", year, &text[7..]))
}

/// `YYYY` 或 `YYYY-MM`，補成該期間第一天
fn expand_partial_date(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let all_digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);

    match bytes.len() {
        4 if all_digits(0..4) => Some(format!("{}-01-01", text)),
        7 if all_digits(0..4) && bytes[4] == b'-' && all_digits(5..7) => {
            Some(format!("{}-01", text))
        }
        _ => None,
    }
}

fn parse_known_formats(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }

    let with_offset = match text.strip_suffix(['Z', 'z']) {
        Some(local) => format!("{}+00:00", local),
        None => text.to_string(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    let partial = expand_partial_date(text);
    let date_text = partial.as_deref().unwrap_or(text);
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_text, format) {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Some(midnight.and_utc());
            }
        }
    }

    None
}

/// Parse a required request field.
pub fn require_date(field: &str, input: Option<&DateInput>) -> Result<DateTime<Utc>> {
    let input = input.ok_or_else(|| AgeError::MissingField {
        field: field.to_string(),
    })?;
    parse_date(input)
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_plain_date_is_utc_midnight() {
        let dt = parse_date_str("2000-06-15").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2000, 6, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_datetime_variants() {
        let expected = Utc.with_ymd_and_hms(1990, 1, 1, 8, 30, 0).unwrap();
        assert_eq!(parse_date_str("1990-01-01T08:30").unwrap(), expected);
        assert_eq!(parse_date_str("1990-01-01T08:30:00").unwrap(), expected);
        assert_eq!(parse_date_str("1990-01-01 08:30:00").unwrap(), expected);
        assert_eq!(parse_date_str("1990-01-01T08:30:00Z").unwrap(), expected);
        assert_eq!(parse_date_str("  1990-01-01T08:30:00Z ").unwrap(), expected);
        assert_eq!(parse_date_str("1990-01-01T08:30Z").unwrap(), expected);
        assert_eq!(parse_date_str("1990-01-01T17:30+09:00").unwrap(), expected);
        assert_eq!(parse_date_str("1990-01-01T17:30+0900").unwrap(), expected);
        assert_eq!(
            parse_date_str("Mon, 01 Jan 1990 08:30:00 GMT").unwrap(),
            expected
        );
        assert_eq!(
            parse_date_str("+001990-01-01T08:30:00Z").unwrap(),
            expected
        );
    }

    #[test]
    fn test_partial_dates_start_the_period() {
        assert_eq!(
            parse_date_str("2000").unwrap(),
            Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_date_str("2000-06").unwrap(),
            Utc.with_ymd_and_hms(2000, 6, 1, 0, 0, 0).unwrap()
        );
        assert!(parse_date_str("2000-13").is_err());
        assert!(parse_date_str("20000").is_err());
    }

    #[test]
    fn test_extended_year_bounds() {
        let dt = parse_date_str("+002000-06-15T00:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2000, 6, 15, 0, 0, 0).unwrap());
        assert!(parse_date_str("+012000-06-15T00:00:00Z").is_err());
        assert!(parse_date_str("+00x000-06-15").is_err());
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        let dt = parse_date_str("1990-01-01T08:30:00+09:00").unwrap();
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.day(), 31);
        assert_eq!(dt.month(), 12);
    }

    #[test]
    fn test_fractional_seconds() {
        let dt = parse_date_str("2000-06-15T12:00:00.250").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_slash_date() {
        let dt = parse_date(&"2000/06/15".into()).unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2000, 6, 15).unwrap());
    }

    #[test]
    fn test_invalid_strings() {
        for raw in ["not-a-date", "", "   ", "2000-13-01", "2001-02-29"] {
            let err = parse_date_str(raw).unwrap_err();
            assert!(matches!(err, AgeError::InvalidDate { .. }), "{}", raw);
        }
    }

    #[test]
    fn test_millis_input() {
        let dt = parse_date(&DateInput::Millis(0)).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
        assert!(parse_date(&DateInput::Millis(i64::MAX)).is_err());
    }

    #[test]
    fn test_missing_field() {
        let err = require_date("birthDate", None).unwrap_err();
        assert!(matches!(err, AgeError::MissingField { ref field } if field == "birthDate"));
    }

    #[test]
    fn test_weekday_name() {
        let dt = parse_date_str("2000-06-15").unwrap();
        assert_eq!(weekday_name(dt.weekday()), "Thursday");
    }
}
