#![doc = include_str!("../README.md")]
pub mod error;
mod traits;
pub mod types;

pub use crate::error::{Error, ErrorResponseBody, RestError, Result};
pub use crate::traits::{HttpClient, RestClient};
pub use crate::types::{AuthorizationToken, Header, RestRequest};
pub use http;
