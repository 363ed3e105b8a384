use serde::{Deserialize, Serialize};

use super::repo::{Diary, DiarySummary};

#[derive(Debug, Deserialize)]
pub struct AddDiaryRequest {
    pub date: String,
    pub title: String,
    pub content: String,
    pub one: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DiaryCreated {
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    pub message: &'static str,
    #[serde(rename = "diaryId")]
    pub diary_id: i64,
}

#[derive(Debug, Serialize)]
pub struct DiaryList {
    pub diaries: Vec<DiarySummary>,
}

#[derive(Debug, Serialize)]
pub struct DiaryDetails {
    pub diary: Diary,
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn created_response_uses_wire_field_names() {
        let json = serde_json::to_string(&DiaryCreated {
            is_success: true,
            message: "Diary added successfully",
            diary_id: 42,
        })
        .unwrap();
        assert!(json.contains(r#""isSuccess":true"#));
        assert!(json.contains(r#""diaryId":42"#));
    }

    #[test]
    fn summary_serializes_calendar_date() {
        let json = serde_json::to_string(&DiaryList {
            diaries: vec![DiarySummary {
                id: 1,
                title: "a day".into(),
                date: date!(2024 - 03 - 09),
            }],
        })
        .unwrap();
        assert!(json.contains(r#""date":"2024-03-09""#));
    }
}
