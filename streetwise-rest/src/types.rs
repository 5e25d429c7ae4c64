use http::header::{HeaderName, HeaderValue, InvalidHeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use serde::Serialize;

/// Credential attached to an outgoing request.
pub enum AuthorizationToken {
    /// Access token presented as `Authorization: Bearer <token>`.
    Bearer(String),
    /// Static key presented as `X-Api-Key: <key>`.
    ApiKey(String),
}

impl AuthorizationToken {
    /// The header this credential is carried in.
    pub fn header(&self) -> Header {
        match self {
            Self::Bearer(_) => Header::Authorization,
            Self::ApiKey(_) => Header::ApiKey,
        }
    }
}

impl TryFrom<AuthorizationToken> for HeaderValue {
    type Error = InvalidHeaderValue;

    fn try_from(token: AuthorizationToken) -> Result<Self, Self::Error> {
        HeaderValue::from_str(&match token {
            AuthorizationToken::Bearer(t) => format!("Bearer {t}"),
            AuthorizationToken::ApiKey(k) => k,
        })
    }
}

/// HTTP headers which can be used in REST requests.
pub enum Header {
    ContentType,
    Accept,
    Authorization,
    ApiKey,
}

impl From<Header> for HeaderName {
    fn from(value: Header) -> Self {
        match value {
            Header::ContentType => CONTENT_TYPE,
            Header::Accept => ACCEPT,
            Header::Authorization => AUTHORIZATION,
            Header::ApiKey => HeaderName::from_static("x-api-key"),
        }
    }
}

/// A request which can be executed with [`RestClient::send_rest()`](crate::RestClient::send_rest).
///
/// `path` is relative to the client's base URI; an empty path addresses the
/// base URI itself.
pub struct RestRequest<P, I>
where
    I: Serialize,
{
    pub method: Method,
    pub path: String,
    pub parameters: Option<P>,
    pub input: Option<I>,
    pub encoding: Option<String>,
}
