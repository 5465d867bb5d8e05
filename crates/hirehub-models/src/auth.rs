//! Auth endpoint payloads.
//!
//! Field names follow the backend wire format exactly; `Emailid` and
//! `userType` are the backend's spellings.

use serde::{Deserialize, Serialize};

/// Body for `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "Emailid")]
    pub email: String,

    pub password: String,

    /// Role tab the user logged in from; some backend variants ignore it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Successful `POST /login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,

    pub refresh_token: String,

    /// Echoed account email; absent in one backend variant.
    #[serde(default, rename = "Emailid")]
    pub email: Option<String>,

    #[serde(rename = "userType")]
    pub user_type: String,
}

/// Body for `POST /register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,

    #[serde(rename = "Emailid")]
    pub email: String,

    pub password: String,

    #[serde(rename = "userType")]
    pub user_type: String,
}

/// Body for `POST /refresh`.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// `POST /refresh` response. `access_token` is optional so a malformed
/// 2xx body surfaces as a failed refresh rather than a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// The `{ message }` envelope most endpoints use for errors and acks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_spelling() {
        let req = LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
            role: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["Emailid"], "a@b.com");
        assert!(value.get("role").is_none());
    }

    #[test]
    fn test_login_response_tolerates_missing_email() {
        let body = r#"{"access_token":"T1","refresh_token":"R1","userType":"seeker"}"#;
        let resp: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.access_token, "T1");
        assert!(resp.email.is_none());
    }

    #[test]
    fn test_refresh_response_without_token() {
        let resp: RefreshResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.access_token.is_none());
    }
}
