//! ShotGrid date and timestamp handling.
//!
//! Date fields travel as `YYYY-MM-DD` strings and timestamps as
//! `YYYY-MM-DDTHH:MM:SSZ` in UTC.

use crate::error::{MapperError, MapperResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// `chrono` format of a ShotGrid date, e.g. `2022-02-22`.
pub const SG_DATE_FORMAT: &str = "%Y-%m-%d";

/// `chrono` format of a ShotGrid timestamp, e.g. `2023-08-07T06:29:35Z`.
pub const SG_DT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Like [`SG_DT_FORMAT`] with optional fractional seconds. `%.f` writes
/// nothing for whole seconds, so those keep the plain ShotGrid form.
const SG_DT_FRACTION_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

static SG_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01])$")
        .expect("date pattern is a valid regex")
});

/// Check that `date` is a `YYYY-MM-DD` string.
///
/// Only the shape is checked: `2021-02-30` is accepted.
pub fn validate_sg_date_format(date: &str) -> bool {
    SG_DATE_RE.is_match(date)
}

/// Parse a ShotGrid timestamp, with or without fractional seconds.
/// Returns `None` for empty or malformed input.
pub fn parse_sg_datetime(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(value, SG_DT_FRACTION_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

/// Format a timestamp the way ShotGrid sends it.
///
/// Sub-second precision is kept as a fraction so the value reads back
/// unchanged.
pub fn format_sg_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(SG_DT_FRACTION_FORMAT).to_string()
}

/// A date string that is known to match `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SgDate(String);

impl SgDate {
    /// Validate and wrap a date string.
    pub fn parse(value: impl Into<String>) -> MapperResult<Self> {
        let value = value.into();
        if validate_sg_date_format(&value) {
            Ok(Self(value))
        } else {
            Err(MapperError::InvalidDateFormat { value })
        }
    }

    /// Build from a calendar date.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self(date.format(SG_DATE_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to a calendar date.
    ///
    /// Fails for strings that have the right shape but name a day that does
    /// not exist, such as `2021-02-30`.
    pub fn to_naive_date(&self) -> MapperResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, SG_DATE_FORMAT).map_err(|_| {
            MapperError::InvalidDateFormat {
                value: self.0.clone(),
            }
        })
    }
}

impl TryFrom<String> for SgDate {
    type Error = MapperError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for SgDate {
    type Error = MapperError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SgDate> for String {
    fn from(date: SgDate) -> Self {
        date.0
    }
}

impl std::str::FromStr for SgDate {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SgDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serde adapter for optional ShotGrid timestamps.
///
/// Empty strings and `null` read as `None`.
pub mod sg_datetime {
    use super::{format_sg_datetime, parse_sg_datetime};
    use chrono::{DateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&format_sg_datetime(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => parse_sg_datetime(s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp {s:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_valid_dates() {
        assert!(validate_sg_date_format("2022-02-22"));
        assert!(validate_sg_date_format("1999-12-31"));
        assert!(validate_sg_date_format("2020-01-01"));
    }

    #[test]
    fn test_invalid_dates() {
        assert!(!validate_sg_date_format("22-02-2022"));
        assert!(!validate_sg_date_format("2022-13-01"));
        assert!(!validate_sg_date_format("2022/02/22"));
        assert!(!validate_sg_date_format("2022-00-10"));
        assert!(!validate_sg_date_format("2022-02-32"));
        assert!(!validate_sg_date_format("abcd-ef-gh"));
        assert!(!validate_sg_date_format("2022-02-22 "));
        assert!(!validate_sg_date_format(""));
    }

    #[test]
    fn test_regex_does_not_check_days_per_month() {
        assert!(validate_sg_date_format("2021-02-30"));

        let date = SgDate::parse("2021-02-30").unwrap();
        assert!(date.to_naive_date().unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_sg_date_parse_error() {
        let err = SgDate::parse("2022-2-2").unwrap_err();
        assert!(err.is_invalid_date());
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_sg_date_to_naive_date() {
        let date: SgDate = "2022-02-22".parse().unwrap();
        assert_eq!(
            date.to_naive_date().unwrap(),
            NaiveDate::from_ymd_opt(2022, 2, 22).unwrap()
        );
        assert_eq!(SgDate::from_naive_date(date.to_naive_date().unwrap()), date);
    }

    #[test]
    fn test_sg_date_serde() {
        let date: SgDate = serde_json::from_str("\"2021-08-31\"").unwrap();
        assert_eq!(date.as_str(), "2021-08-31");
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2021-08-31\"");
        assert!(serde_json::from_str::<SgDate>("\"31-08-2021\"").is_err());
    }

    #[test]
    fn test_parse_sg_datetime() {
        let dt = parse_sg_datetime("2023-08-07T06:29:35Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 8, 7, 6, 29, 35).unwrap());
        assert_eq!(format_sg_datetime(&dt), "2023-08-07T06:29:35Z");
        assert!(parse_sg_datetime("").is_none());
        assert!(parse_sg_datetime("2023-08-07 06:29:35").is_none());
    }

    #[test]
    fn test_sg_datetime_keeps_subseconds() {
        let dt = Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap();
        let formatted = format_sg_datetime(&dt);
        assert_eq!(formatted, "2023-11-14T22:13:20.500Z");
        assert_eq!(parse_sg_datetime(&formatted), Some(dt));

        let whole = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        assert_eq!(format_sg_datetime(&whole), "2023-11-14T22:13:20Z");
    }
}
