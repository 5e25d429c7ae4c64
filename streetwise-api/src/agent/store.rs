//! Storage for the issued token.
mod memory;

use crate::token::Token;
use std::future::Future;

pub use self::memory::MemoryTokenStore;

/// Holder of the one token slot owned by a session.
///
/// Implementations replace the stored value wholesale and never mutate a
/// token in place.
#[trait_variant::make(Send)]
pub trait TokenStore {
    #[must_use]
    fn get_token(&self) -> impl Future<Output = Option<Token>>;
    #[must_use]
    fn set_token(&self, token: Token) -> impl Future<Output = ()>;
    #[must_use]
    fn clear_token(&self) -> impl Future<Output = ()>;
}
