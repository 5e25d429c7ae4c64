use super::TokenStore;
use crate::token::Token;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory [`TokenStore`]; the token lives for the process lifetime of the
/// client and is never persisted.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<RwLock<Option<Token>>>,
}

impl TokenStore for MemoryTokenStore {
    async fn get_token(&self) -> Option<Token> {
        self.token.read().await.clone()
    }
    async fn set_token(&self, token: Token) {
        self.token.write().await.replace(token);
    }
    async fn clear_token(&self) {
        self.token.write().await.take();
    }
}
