use serde::{Deserialize, Serialize};

use super::repo::Mood;

#[derive(Debug, Deserialize)]
pub struct SetMoodRequest {
    pub date: String,
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct MoodRangeQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddToCalendarRequest {
    pub date: String,
    pub sticker_id: i64,
}

#[derive(Debug, Serialize)]
pub struct MoodColor {
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct MoodRange {
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    pub moods: Vec<Mood>,
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn range_query_accepts_camel_case_params() {
        let q: MoodRangeQuery =
            serde_json::from_str(r#"{"startDate":"2024-01-01","endDate":"2024-01-31"}"#).unwrap();
        assert_eq!(q.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(q.end_date.as_deref(), Some("2024-01-31"));
    }

    #[test]
    fn mood_range_serializes_dates_and_colors() {
        let json = serde_json::to_string(&MoodRange {
            is_success: true,
            moods: vec![Mood {
                date: date!(2024 - 01 - 05),
                color: "blue".into(),
            }],
        })
        .unwrap();
        assert!(json.contains(r#""date":"2024-01-05""#));
        assert!(json.contains(r#""color":"blue""#));
    }
}
