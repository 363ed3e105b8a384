use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub user_id: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub user_id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    pub message: &'static str,
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub name: String,
    pub user_id: String,
    pub coin: i32,
}

#[derive(Debug, Serialize)]
pub struct UserInfoResponse {
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_uses_wire_field_names() {
        let json = serde_json::to_string(&LoginResponse {
            is_success: true,
            message: "Login successful",
            token: "t".into(),
            user: PublicUser {
                user_id: "a1".into(),
                name: "A".into(),
            },
        })
        .unwrap();
        assert!(json.contains(r#""isSuccess":true"#));
        assert!(json.contains(r#""token":"t""#));
        assert!(json.contains(r#""user_id":"a1""#));
    }

    #[test]
    fn change_password_request_accepts_camel_case() {
        let req: ChangePasswordRequest =
            serde_json::from_str(r#"{"currentPassword":"old","newPassword":"new"}"#).unwrap();
        assert_eq!(req.current_password, "old");
        assert_eq!(req.new_password, "new");
    }
}
