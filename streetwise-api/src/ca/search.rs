//! Search the Canada Post database for matching address records.
use serde::{Deserialize, Serialize};

pub const PATH: &str = "ca/search";

pub type Input = super::AddressRequest;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub response_count: i32,
    /// Server-side execution time in milliseconds.
    pub t_exec_ms: i64,
    pub response_address_list: Option<Vec<super::Address>>,
    /// `N` at least one record found, `X` no records found.
    pub status_flag: Option<String>,
    pub status_messages: Option<String>,
    pub function_messages: Option<Vec<String>>,
}
