use serde::Serialize;

/// Plain success envelope shared by the write endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    pub message: &'static str,
}

impl Ack {
    pub fn ok(message: &'static str) -> Self {
        Self {
            is_success: true,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_serializes_with_is_success_flag() {
        let json = serde_json::to_string(&Ack::ok("done")).unwrap();
        assert_eq!(json, r#"{"isSuccess":true,"message":"done"}"#);
    }
}
