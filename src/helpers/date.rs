//! Date coercion for front-matter fields
//!
//! Front-matter dates arrive as strings (YAML has no native date type in
//! serde_yaml) or as numbers. Both are coerced into `DateTime<Utc>`:
//! strings through a list of accepted formats, integers as milliseconds
//! since the Unix epoch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Date-time formats without an offset; read as UTC
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Date-only formats; midnight UTC
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    None
}

/// Interpret a number as milliseconds since the Unix epoch
pub fn from_millis(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

struct CoercedDate(DateTime<Utc>);

impl<'de> Deserialize<'de> for CoercedDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DateVisitor;

        impl<'de> Visitor<'de> for DateVisitor {
            type Value = CoercedDate;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a date string or a millisecond timestamp")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_date_string(value)
                    .map(CoercedDate)
                    .ok_or_else(|| E::custom(format!("invalid date: {:?}", value)))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                from_millis(value)
                    .map(CoercedDate)
                    .ok_or_else(|| E::custom(format!("invalid date: timestamp {} out of range", value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let value = i64::try_from(value)
                    .map_err(|_| E::custom(format!("invalid date: timestamp {} out of range", value)))?;
                self.visit_i64(value)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if !value.is_finite() {
                    return Err(E::custom("invalid date: timestamp is not a finite number"));
                }
                self.visit_i64(value.trunc() as i64)
            }
        }

        deserializer.deserialize_any(DateVisitor)
    }
}

/// `deserialize_with` helper for required date fields
pub fn coerce<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    CoercedDate::deserialize(deserializer).map(|d| d.0)
}

/// `deserialize_with` helper for optional date fields; pair with `#[serde(default)]`.
/// An explicit `null` is rejected like any other optional field.
pub fn coerce_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    super::non_null::<D, CoercedDate>(deserializer).map(|d| d.map(|d| d.0))
}

/// Format a date as `YYYY-MM-DD`
pub fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(parse_date_string("2024-01-15"), Some(ymd_hms(2024, 1, 15, 0, 0, 0)));
        assert_eq!(parse_date_string("2024/01/15"), Some(ymd_hms(2024, 1, 15, 0, 0, 0)));
        assert_eq!(
            parse_date_string("January 15, 2024"),
            Some(ymd_hms(2024, 1, 15, 0, 0, 0))
        );
        assert_eq!(parse_date_string("Jan 15, 2024"), Some(ymd_hms(2024, 1, 15, 0, 0, 0)));
        assert_eq!(parse_date_string("Jul 08 2022"), Some(ymd_hms(2022, 7, 8, 0, 0, 0)));
    }

    #[test]
    fn test_parse_datetime() {
        assert_eq!(
            parse_date_string("2024-01-15 10:30:00"),
            Some(ymd_hms(2024, 1, 15, 10, 30, 0))
        );
        assert_eq!(
            parse_date_string("2024-01-15T10:30"),
            Some(ymd_hms(2024, 1, 15, 10, 30, 0))
        );
        assert_eq!(
            parse_date_string("2024-01-15T10:30:00+02:00"),
            Some(ymd_hms(2024, 1, 15, 8, 30, 0))
        );
        assert_eq!(
            parse_date_string("2024-01-15T10:30:00.250Z").map(|d| d.timestamp_subsec_millis()),
            Some(250)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_date_string(""), None);
        assert_eq!(parse_date_string("not a date"), None);
        assert_eq!(parse_date_string("2024-13-01"), None);
        assert_eq!(parse_date_string("2024-02-30"), None);
    }

    #[derive(Debug, Deserialize)]
    struct Dated {
        #[serde(deserialize_with = "coerce")]
        at: DateTime<Utc>,
        #[serde(default, deserialize_with = "coerce_optional")]
        until: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_coerce_from_yaml() {
        let dated: Dated = serde_yaml::from_str("at: 2023-06-01").unwrap();
        assert_eq!(dated.at, ymd_hms(2023, 6, 1, 0, 0, 0));
        assert_eq!(dated.until, None);

        let dated: Dated = serde_yaml::from_str("at: 0\nuntil: '2023-06-02 12:00'").unwrap();
        assert_eq!(dated.at, ymd_hms(1970, 1, 1, 0, 0, 0));
        assert_eq!(dated.until, Some(ymd_hms(2023, 6, 2, 12, 0, 0)));

        let dated: Dated = serde_yaml::from_str("at: 1700000000000").unwrap();
        assert_eq!(dated.at.timestamp(), 1_700_000_000);
        assert_eq!(dated.until, None);

        let err = serde_yaml::from_str::<Dated>("at: 0\nuntil: null").unwrap_err();
        assert!(err.to_string().contains("invalid type: null"));
    }

    #[test]
    fn test_coerce_rejects_garbage() {
        let err = serde_yaml::from_str::<Dated>("at: yesterday").unwrap_err();
        assert!(err.to_string().contains("invalid date"));

        let err = serde_yaml::from_str::<Dated>("at: true").unwrap_err();
        assert!(err.to_string().contains("a date string or a millisecond timestamp"));
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(&ymd_hms(2024, 1, 5, 23, 59, 0)), "2024-01-05");
    }
}
