use serde::{Deserialize, Serialize};

use super::repo::Sticker;

#[derive(Debug, Deserialize)]
pub struct BuyStickerRequest {
    pub sticker_id: i64,
}

#[derive(Debug, Serialize)]
pub struct StickerList {
    pub stickers: Vec<Sticker>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticker_list_serializes_catalog_fields() {
        let json = serde_json::to_string(&StickerList {
            stickers: vec![Sticker {
                sticker_id: 7,
                name: "Sunny".into(),
                image_url: "https://cdn.example.com/sunny.png".into(),
                price: 10,
            }],
        })
        .unwrap();
        assert!(json.contains(r#""sticker_id":7"#));
        assert!(json.contains(r#""image_url":"https://cdn.example.com/sunny.png""#));
        assert!(json.contains(r#""price":10"#));
    }
}
