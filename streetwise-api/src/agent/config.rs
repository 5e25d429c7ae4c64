//! Configuration for the [`Agent`](super::Agent).
mod file;

pub use self::file::FileStore;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Default public endpoint of the service.
pub const DEFAULT_BASE_ADDRESS: &str = "https://api.streetwise.io/api";

/// Configuration data struct for the [`Agent`](super::Agent).
///
/// Immutable once handed to an agent; running several independently
/// configured agents in one process is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base address of the service. Trailing slashes are trimmed and an
    /// `/api` suffix is appended if missing.
    pub base_address: String,
    /// Business endpoints live under `{base_address}/{api_version}`; the
    /// token endpoints have no version component.
    pub api_version: u32,
    /// Client id for the credential exchange, normally the email address
    /// used to sign on to the service.
    pub client_id: Option<String>,
    /// The generated API secret paired with the client id.
    pub client_secret: Option<String>,
    /// Static API key sent as `X-Api-Key`. Setting this disables the
    /// bearer-token flow entirely.
    pub api_key: Option<String>,
}

impl Config {
    /// Loads the configuration from the provided loader.
    pub async fn load(loader: &impl Loader) -> Result<Self> {
        loader.load().await.map_err(Error::ConfigLoad)
    }
    /// Saves the configuration using the provided saver.
    pub async fn save(&self, saver: &impl Saver) -> Result<()> {
        saver.save(self).await.map_err(Error::ConfigSave)
    }
    /// Copy with the base address and version brought into canonical form.
    pub(crate) fn normalized(mut self) -> Self {
        if self.base_address.trim().is_empty() {
            self.base_address = DEFAULT_BASE_ADDRESS.into();
        }
        self.base_address = self.base_address.trim_end_matches('/').into();
        if !self.base_address.to_lowercase().ends_with("/api") {
            self.base_address.push_str("/api");
        }
        self.api_version = self.api_version.max(1);
        self
    }
    /// Endpoint business requests are sent to.
    pub(crate) fn endpoint(&self) -> String {
        format!("{}/{}", self.base_address, self.api_version)
    }
    /// How requests are authenticated; decided once at construction.
    pub(crate) fn auth_mode(&self) -> AuthMode {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|value| !value.is_empty())
        }
        if let Some(key) = present(&self.api_key) {
            return AuthMode::ApiKey(key.into());
        }
        match (present(&self.client_id), present(&self.client_secret)) {
            (Some(client_id), Some(client_secret)) => AuthMode::Credentials(Credentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
            }),
            _ => AuthMode::None,
        }
    }
}

impl Default for Config {
    /// Creates a new default configuration, pointing at the public service
    /// endpoint with no credentials.
    fn default() -> Self {
        Self {
            base_address: DEFAULT_BASE_ADDRESS.into(),
            api_version: 1,
            client_id: None,
            client_secret: None,
            api_key: None,
        }
    }
}

/// Client-credential pair for the token exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// How outgoing requests are authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AuthMode {
    /// Bearer-token flow driven by a client-credential exchange.
    Credentials(Credentials),
    /// Static `X-Api-Key` header; no token flow.
    ApiKey(String),
    /// Requests are sent unauthenticated.
    None,
}

/// The trait for loading configuration data.
pub trait Loader {
    /// Loads the configuration data.
    fn load(
        &self,
    ) -> impl Future<
        Output = core::result::Result<Config, Box<dyn std::error::Error + Send + Sync + 'static>>,
    > + Send;
}

/// The trait for saving configuration data.
pub trait Saver {
    /// Saves the configuration data.
    fn save(
        &self,
        config: &Config,
    ) -> impl Future<
        Output = core::result::Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>,
    > + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_appends_api_suffix() {
        let config =
            Config { base_address: "https://addr.example.com/".into(), ..Default::default() }
                .normalized();
        assert_eq!(config.base_address, "https://addr.example.com/api");
        assert_eq!(config.endpoint(), "https://addr.example.com/api/1");
    }

    #[test]
    fn normalize_keeps_existing_api_suffix() {
        let config =
            Config { base_address: "https://addr.example.com/API/".into(), ..Default::default() }
                .normalized();
        assert_eq!(config.base_address, "https://addr.example.com/API");
    }

    #[test]
    fn normalize_defaults_empty_base_address() {
        let config = Config { base_address: String::new(), ..Default::default() }.normalized();
        assert_eq!(config.base_address, DEFAULT_BASE_ADDRESS);
    }

    #[test]
    fn normalize_floors_api_version() {
        let config = Config { api_version: 0, ..Default::default() }.normalized();
        assert_eq!(config.api_version, 1);
        assert_eq!(config.endpoint(), format!("{DEFAULT_BASE_ADDRESS}/1"));
    }

    #[test]
    fn api_key_disables_credentials() {
        let config = Config {
            client_id: Some("c1".into()),
            client_secret: Some("s1".into()),
            api_key: Some("key".into()),
            ..Default::default()
        };
        assert_eq!(config.auth_mode(), AuthMode::ApiKey("key".into()));
    }

    #[test]
    fn missing_credentials_disable_the_token_flow() {
        let config = Config { client_id: Some("c1".into()), ..Default::default() };
        assert_eq!(config.auth_mode(), AuthMode::None);
        assert_eq!(Config::default().auth_mode(), AuthMode::None);
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let config = Config {
            client_id: Some("c1".into()),
            client_secret: Some("s1".into()),
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            config.auth_mode(),
            AuthMode::Credentials(Credentials {
                client_id: "c1".into(),
                client_secret: "s1".into()
            })
        );
    }
}
