use super::config::{AuthMode, Config, Credentials};
use super::store::TokenStore;
use crate::token::{self, RefreshRequest, Token, TokenRequest};
use http::{Method, Request, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use streetwise_rest::{AuthorizationToken, Error, HttpClient, RestClient, RestRequest, Result};
use tokio::sync::{Mutex, Notify, RwLock};
use tokio::time::Instant;

/// Dispatch attempts per logical call: the first attempt plus at most one
/// retry after a forced credential exchange.
const MAX_ATTEMPTS: usize = 2;

/// Safety margin subtracted from the token lifetime so a token is replaced
/// shortly before the server would start rejecting it.
const EXPIRY_MARGIN: Duration = Duration::from_secs(2 * 60);

/// Client for the token endpoints.
///
/// These are addressed at the unversioned service base and never pass
/// through the authenticating wrapper that depends on them.
struct TokenClient<T> {
    base_uri: String,
    inner: Arc<T>,
}

impl<T> TokenClient<T>
where
    T: RestClient + Send + Sync,
{
    async fn exchange_credentials(&self, credentials: &Credentials) -> Result<Token> {
        tracing::debug!("exchanging client credentials for a new token");
        let token = self
            .post(
                token::PATH,
                &TokenRequest {
                    client_id: credentials.client_id.clone(),
                    client_secret: credentials.client_secret.clone(),
                },
            )
            .await?;
        Self::checked(token)
    }

    async fn exchange_refresh_token(&self, current: &Token) -> Result<Token> {
        tracing::debug!("refreshing the access token");
        let token = self
            .post(
                token::REFRESH_PATH,
                &RefreshRequest {
                    access_token: current.access_token.clone(),
                    refresh_token: current.refresh_token.clone(),
                },
            )
            .await?;
        Self::checked(token)
    }

    async fn post<I>(&self, path: &str, input: &I) -> Result<Token>
    where
        I: Serialize + Send + Sync,
    {
        self.send_rest(&RestRequest::<(), _> {
            method: Method::POST,
            path: path.into(),
            parameters: None,
            input: Some(input),
            encoding: Some(String::from("application/json")),
        })
        .await
    }

    /// A `2xx` response carrying a non-ok status message is still a failed
    /// exchange.
    fn checked(token: Token) -> Result<Token> {
        match &token.msg {
            Some(msg) if !msg.eq_ignore_ascii_case("ok") => {
                Err(Error::CredentialExchange(msg.clone()))
            }
            _ => Ok(token),
        }
    }
}

impl<T> HttpClient for TokenClient<T>
where
    T: HttpClient + Send + Sync,
{
    async fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> core::result::Result<Response<Vec<u8>>, Box<dyn std::error::Error + Send + Sync + 'static>>
    {
        self.inner.send_http(request).await
    }
}

impl<T> RestClient for TokenClient<T>
where
    T: RestClient + Send + Sync,
{
    fn base_uri(&self) -> String {
        self.base_uri.clone()
    }
}

struct SessionInner<S, T> {
    store: Arc<S>,
    token_client: TokenClient<T>,
    credentials: Option<Credentials>,
    /// When the stored token was obtained, on this machine's clock.
    refreshed_at: RwLock<Option<Instant>>,
    /// Exchange-flight slot; `true` while a network exchange is running.
    is_exchanging: Mutex<bool>,
    notify: Notify,
    /// Message of the last failed exchange, reported to callers that joined
    /// that flight.
    last_failure: std::sync::Mutex<Option<String>>,
}

/// Single source of truth for the current token.
///
/// At most one credential exchange or refresh is in flight per session;
/// concurrent callers join the in-flight exchange and observe its outcome
/// rather than starting a second one. Exchanges run to completion on a
/// detached task, so a caller that goes away mid-flight still leaves the
/// store updated for everyone else.
pub struct TokenSession<S, T> {
    inner: Arc<SessionInner<S, T>>,
}

impl<S, T> Clone for TokenSession<S, T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<S, T> TokenSession<S, T>
where
    S: TokenStore + Send + Sync + 'static,
    T: RestClient + Send + Sync + 'static,
{
    fn new(config: &Config, store: Arc<S>, rest: Arc<T>) -> Self {
        let credentials = match config.auth_mode() {
            AuthMode::Credentials(credentials) => Some(credentials),
            _ => None,
        };
        Self {
            inner: Arc::new(SessionInner {
                store,
                token_client: TokenClient { base_uri: config.base_address.clone(), inner: rest },
                credentials,
                refreshed_at: RwLock::new(None),
                is_exchanging: Mutex::new(false),
                notify: Notify::new(),
                last_failure: std::sync::Mutex::new(None),
            }),
        }
    }

    /// The token currently held, fresh or not; never touches the network.
    pub(crate) async fn cached(&self) -> Option<Token> {
        self.inner.store.get_token().await
    }

    /// Get a usable token: the cached one while it is fresh, a refreshed one
    /// once the expiry margin has passed, or a newly exchanged one if none is
    /// held or `force` is set.
    pub(crate) async fn get(&self, force: bool) -> Result<Token> {
        if !force {
            if let Some(token) = self.cached().await {
                if self.is_fresh(&token).await {
                    return Ok(token);
                }
            }
        }
        if !self.claim_or_join().await {
            // Joined an exchange that has now finished; report its outcome.
            return match self.cached().await {
                Some(token) => Ok(token),
                None => Err(Error::CredentialExchange(self.failure_message())),
            };
        }
        let session = self.clone();
        let exchange = tokio::spawn(async move {
            let result = session.exchange(force).await;
            session.release_flight().await;
            result
        });
        match exchange.await {
            Ok(result) => result,
            Err(err) => {
                // The task died before it could release the slot.
                self.release_flight().await;
                Err(Error::CredentialExchange(format!("credential exchange task failed: {err}")))
            }
        }
    }

    /// Exchange the current token for a fresh one, regardless of age.
    pub(crate) async fn refresh(&self) -> Result<Token> {
        while !self.claim_or_join().await {}
        let session = self.clone();
        let exchange = tokio::spawn(async move {
            let result = match session.cached().await {
                Some(current) => session.refresh_with(&current).await,
                None => Err(Error::CredentialExchange(String::from("no token has been issued"))),
            };
            session.release_flight().await;
            result
        });
        match exchange.await {
            Ok(result) => result,
            Err(err) => {
                // The task died before it could release the slot.
                self.release_flight().await;
                Err(Error::CredentialExchange(format!("credential exchange task failed: {err}")))
            }
        }
    }

    /// Claim the exchange slot, returning `true`, or wait out the exchange
    /// that holds it and return `false`.
    async fn claim_or_join(&self) -> bool {
        let mut is_exchanging = self.inner.is_exchanging.lock().await;
        if !*is_exchanging {
            *is_exchanging = true;
            return true;
        }
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        // Register interest before releasing the lock, so a wake-up landing
        // in between is not lost.
        notified.as_mut().enable();
        drop(is_exchanging);
        notified.await;
        false
    }

    async fn release_flight(&self) {
        *self.inner.is_exchanging.lock().await = false;
        self.inner.notify.notify_waiters();
    }

    /// The body of an exchange flight. The cache is re-validated first:
    /// state may have changed while this flight waited for the slot.
    async fn exchange(&self, force: bool) -> Result<Token> {
        if !force {
            if let Some(token) = self.cached().await {
                if self.is_fresh(&token).await {
                    return Ok(token);
                }
                if !token.refresh_expired() {
                    return match self.refresh_with(&token).await {
                        Ok(refreshed) => Ok(refreshed),
                        Err(err) => {
                            // A stale token may still be accepted; if it is
                            // not, the 401 path forces a full exchange.
                            tracing::warn!(
                                error = %err,
                                "token refresh failed, returning the current token"
                            );
                            Ok(token)
                        }
                    };
                }
                // The refresh window has closed; only a full credential
                // exchange can help.
            }
        }
        self.acquire().await
    }

    async fn acquire(&self) -> Result<Token> {
        let Some(credentials) = &self.inner.credentials else {
            return Err(Error::CredentialExchange(String::from(
                "no client credentials configured",
            )));
        };
        match self.inner.token_client.exchange_credentials(credentials).await {
            Ok(token) => {
                self.inner.store.set_token(token.clone()).await;
                self.inner.refreshed_at.write().await.replace(Instant::now());
                self.record_failure(None);
                Ok(token)
            }
            Err(err) => {
                // A failed exchange leaves nothing behind; the next call
                // starts over from scratch.
                self.inner.store.clear_token().await;
                self.inner.refreshed_at.write().await.take();
                self.record_failure(Some(err.to_string()));
                Err(err)
            }
        }
    }

    async fn refresh_with(&self, current: &Token) -> Result<Token> {
        let refreshed = self.inner.token_client.exchange_refresh_token(current).await?;
        self.inner.store.set_token(refreshed.clone()).await;
        self.inner.refreshed_at.write().await.replace(Instant::now());
        Ok(refreshed)
    }

    async fn is_fresh(&self, token: &Token) -> bool {
        let Some(refreshed_at) = *self.inner.refreshed_at.read().await else {
            // A token seeded from outside has an unknown age; treat it as
            // due for a refresh.
            return false;
        };
        let lifetime = Duration::from_secs(60 * u64::from(token.expires));
        refreshed_at.elapsed() < lifetime.saturating_sub(EXPIRY_MARGIN)
    }

    fn record_failure(&self, message: Option<String>) {
        *self.inner.last_failure.lock().expect("failure message lock poisoned") = message;
    }

    fn failure_message(&self) -> String {
        self.inner
            .last_failure
            .lock()
            .expect("failure message lock poisoned")
            .clone()
            .unwrap_or_else(|| String::from("credential exchange failed"))
    }
}

/// Attaches the credential to outgoing requests and delegates the transport.
///
/// Header construction never blocks on the network: only the cached token is
/// consulted. [`Client::send_rest`] primes the cache before dispatching.
struct WrapperClient<S, T> {
    session: TokenSession<S, T>,
    auth: AuthMode,
    endpoint: String,
    inner: Arc<T>,
}

impl<S, T> HttpClient for WrapperClient<S, T>
where
    S: TokenStore + Send + Sync + 'static,
    T: RestClient + Send + Sync + 'static,
{
    async fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> core::result::Result<Response<Vec<u8>>, Box<dyn std::error::Error + Send + Sync + 'static>>
    {
        self.inner.send_http(request).await
    }
}

impl<S, T> RestClient for WrapperClient<S, T>
where
    S: TokenStore + Send + Sync + 'static,
    T: RestClient + Send + Sync + 'static,
{
    fn base_uri(&self) -> String {
        self.endpoint.clone()
    }
    async fn authorization_token(&self) -> Option<AuthorizationToken> {
        match &self.auth {
            AuthMode::ApiKey(key) => Some(AuthorizationToken::ApiKey(key.clone())),
            AuthMode::Credentials(_) => self
                .session
                .cached()
                .await
                .map(|token| AuthorizationToken::Bearer(token.access_token)),
            AuthMode::None => None,
        }
    }
}

/// The authenticating client behind an agent's service namespaces.
///
/// Every request carries the current token; a `401` response discards the
/// response, forces one full credential exchange, and dispatches exactly one
/// more attempt. The second response is final, whatever it is.
pub struct Client<S, T> {
    session: TokenSession<S, T>,
    token_flow: bool,
    inner: WrapperClient<S, T>,
}

impl<S, T> Client<S, T>
where
    S: TokenStore + Send + Sync + 'static,
    T: RestClient + Send + Sync + 'static,
{
    pub(crate) fn new(config: &Config, store: Arc<S>, rest: Arc<T>) -> Self {
        let session = TokenSession::new(config, store, Arc::clone(&rest));
        let auth = config.auth_mode();
        let token_flow = matches!(auth, AuthMode::Credentials(_));
        let inner = WrapperClient {
            session: session.clone(),
            auth,
            endpoint: config.endpoint(),
            inner: rest,
        };
        Self { session, token_flow, inner }
    }

    pub(crate) fn session(&self) -> &TokenSession<S, T> {
        &self.session
    }

    fn is_unauthorized<O>(result: &Result<O>) -> bool {
        matches!(result, Err(Error::RestResponse(err)) if err.status == StatusCode::UNAUTHORIZED)
    }
}

impl<S, T> HttpClient for Client<S, T>
where
    S: TokenStore + Send + Sync + 'static,
    T: RestClient + Send + Sync + 'static,
{
    async fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> core::result::Result<Response<Vec<u8>>, Box<dyn std::error::Error + Send + Sync + 'static>>
    {
        self.inner.send_http(request).await
    }
}

impl<S, T> RestClient for Client<S, T>
where
    S: TokenStore + Send + Sync + 'static,
    T: RestClient + Send + Sync + 'static,
{
    fn base_uri(&self) -> String {
        self.inner.base_uri()
    }
    async fn send_rest<P, I, O>(&self, request: &RestRequest<P, I>) -> Result<O>
    where
        P: Serialize + Send + Sync,
        I: Serialize + Send + Sync,
        O: DeserializeOwned + Send + Sync,
    {
        if self.token_flow {
            // Make sure a current token is cached for the wrapper to attach.
            // A failed exchange fails the call that triggered it.
            self.session.get(false).await?;
        }
        let mut result = self.inner.send_rest(request).await;
        let mut attempts = 1;
        while attempts < MAX_ATTEMPTS && self.token_flow && Self::is_unauthorized(&result) {
            // The server rejected the token: exchange credentials once and
            // dispatch the final attempt with the new one.
            self.session.get(true).await?;
            result = self.inner.send_rest(request).await;
            attempts += 1;
        }
        result
    }
}
