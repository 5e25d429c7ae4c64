//! Agent which manages the token lifecycle for every outbound request.

pub mod config;
mod inner;
pub mod store;

use self::config::Config;
use self::store::{MemoryTokenStore, TokenStore};
use crate::client::Service;
use crate::token::Token;
use std::sync::Arc;
use streetwise_rest::{RestClient, Result};

/// An agent over the service API.
///
/// Holds the client configuration, obtains and refreshes the access token as
/// needed, and authenticates every request issued through [`api`](Agent::api).
/// A request answered with `401` is retried exactly once after a forced
/// credential exchange; the second response is final.
pub struct Agent<S, T>
where
    S: TokenStore + Send + Sync + 'static,
    T: RestClient + Send + Sync + 'static,
{
    store: Arc<S>,
    inner: Arc<inner::Client<S, T>>,
    pub api: Service<inner::Client<S, T>>,
}

impl<T> Agent<MemoryTokenStore, T>
where
    T: RestClient + Send + Sync + 'static,
{
    /// Create a new agent with the in-memory token store.
    pub fn new(rest: T, config: Config) -> Self {
        Self::with_store(rest, MemoryTokenStore::default(), config)
    }
}

impl<S, T> Agent<S, T>
where
    S: TokenStore + Send + Sync + 'static,
    T: RestClient + Send + Sync + 'static,
{
    /// Create a new agent with a custom token store.
    ///
    /// A token already present in the store is treated as being of unknown
    /// age and refreshed before its first use.
    pub fn with_store(rest: T, store: S, config: Config) -> Self {
        let config = config.normalized();
        let store = Arc::new(store);
        let inner = Arc::new(inner::Client::new(&config, Arc::clone(&store), Arc::new(rest)));
        Self { store, inner: Arc::clone(&inner), api: Service::new(inner) }
    }

    /// Get a token usable for the next request: the cached one while it is
    /// fresh, a refreshed one once the expiry margin has passed, or a newly
    /// exchanged one if none is held. `force` always performs a full
    /// credential exchange.
    ///
    /// Concurrent callers share one in-flight exchange and its outcome.
    pub async fn get_token(&self, force: bool) -> Result<Token> {
        self.inner.session().get(force).await
    }

    /// Exchange the current token for a fresh one, regardless of age.
    pub async fn refresh_token(&self) -> Result<Token> {
        self.inner.session().refresh().await
    }

    /// The token currently held, without touching the network.
    pub async fn current_token(&self) -> Option<Token> {
        self.store.get_token().await
    }

    /// The endpoint business requests are sent to.
    pub fn endpoint(&self) -> String {
        self.inner.base_uri()
    }
}
