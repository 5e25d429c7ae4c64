//! Wire contract of the token endpoints.
//!
//! These endpoints live at the unversioned service base and are the only
//! requests sent without an `Authorization` header.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Path of the credential-exchange endpoint, relative to the service base.
pub const PATH: &str = "token";
/// Path of the token-refresh endpoint, relative to the service base.
pub const REFRESH_PATH: &str = "token/refresh";

/// One issued credential, as returned by both token endpoints.
///
/// A token is immutable once issued: the session replaces the whole value
/// when it refreshes, so concurrent readers never observe a half-updated
/// token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// The JWT to present as `Authorization: Bearer <accessToken>`.
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Credential for obtaining a replacement token without re-presenting
    /// the client secret.
    pub refresh_token: String,
    /// Lifetime in minutes from issuance.
    pub expires: u32,
    /// UTC instant after which this token can no longer be refreshed.
    /// Absent if the refresh never expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_expire_date: Option<DateTime<Utc>>,
    /// Status message from the issuing endpoint; `ok` on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl Token {
    /// Whether the refresh window has closed. Once it has, only a full
    /// credential exchange can produce a new token.
    pub fn refresh_expired(&self) -> bool {
        self.refresh_expire_date.map_or(false, |date| date <= Utc::now())
    }
}

/// Body of `POST token`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// Normally the email address used to sign on to the service.
    pub client_id: String,
    /// The generated API secret.
    pub client_secret: String,
}

/// Body of `POST token/refresh`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_token() {
        let token = serde_json::from_str::<Token>(
            r#"{
                "accessToken": "jwt",
                "tokenType": "Bearer",
                "refreshToken": "refresh",
                "expires": 60,
                "msg": "ok"
            }"#,
        )
        .expect("deserialize");
        assert_eq!(token.access_token, "jwt");
        assert_eq!(token.expires, 60);
        assert_eq!(token.refresh_expire_date, None);
        assert!(!token.refresh_expired());
    }

    #[test]
    fn deserialize_token_with_refresh_expiry() {
        let token = serde_json::from_str::<Token>(
            r#"{
                "accessToken": "jwt",
                "tokenType": "Bearer",
                "refreshToken": "refresh",
                "expires": 60,
                "refreshExpireDate": "2001-01-01T00:00:00Z",
                "msg": "ok"
            }"#,
        )
        .expect("deserialize");
        assert!(token.refresh_expired());
    }

    #[test]
    fn serialize_token_request() {
        let request = TokenRequest {
            client_id: String::from("c1"),
            client_secret: String::from("s1"),
        };
        assert_eq!(
            serde_json::to_string(&request).expect("serialize"),
            r#"{"clientId":"c1","clientSecret":"s1"}"#
        );
    }
}
