use time::{format_description::FormatItem, macros::format_description, Date};

use crate::error::ApiError;

pub const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`) from client input.
pub fn parse_date(s: &str) -> Result<Date, ApiError> {
    Date::parse(s, &DATE_FORMAT).map_err(|_| ApiError::Validation("Invalid date format.".into()))
}

/// Serde adapter for `time::Date` fields crossing the JSON boundary.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let s = date
            .format(&DATE_FORMAT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s, &DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_iso_calendar_dates() {
        assert_eq!(parse_date("2024-07-19").unwrap(), date!(2024 - 07 - 19));
    }

    #[test]
    fn rejects_non_dates() {
        for bad in ["", "yesterday", "2024-13-01", "19-07-2024", "2024/07/19"] {
            assert!(parse_date(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn round_trips_through_serde() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Day {
            #[serde(with = "iso_date")]
            date: time::Date,
        }

        let json = serde_json::to_string(&Day {
            date: date!(2024 - 01 - 05),
        })
        .unwrap();
        assert_eq!(json, r#"{"date":"2024-01-05"}"#);
        let back: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date, date!(2024 - 01 - 05));
    }
}
