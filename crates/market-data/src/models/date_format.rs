//! Serde helpers for calendar dates in the fixed `yyyy-MM-dd` format.
//!
//! Dates are plain UTC calendar days; parsing does not depend on locale.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// Calendar date format used by the quote API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` string.
pub fn parse(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

/// `#[serde(with = "date_format::optional")]` for `Option<NaiveDate>` fields.
pub mod optional {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Holder {
        #[serde(default, with = "optional")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(
            parse("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse("29/02/2024").is_err());
    }

    #[test]
    fn test_optional_date_roundtrip_shape() {
        let holder: Holder = serde_json::from_str(r#"{"date": "2023-11-10"}"#).unwrap();
        assert_eq!(holder.date, NaiveDate::from_ymd_opt(2023, 11, 10));
        assert_eq!(
            serde_json::to_string(&holder).unwrap(),
            r#"{"date":"2023-11-10"}"#
        );
    }

    #[test]
    fn test_optional_date_missing_or_null() {
        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.date, None);
        let null: Holder = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert_eq!(null.date, None);
    }

    #[test]
    fn test_optional_date_rejects_other_formats() {
        let result: Result<Holder, _> = serde_json::from_str(r#"{"date": "Nov 10, 2023"}"#);
        assert!(result.is_err());
    }
}
