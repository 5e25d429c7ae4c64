//! Low-level database query functions.
use crate::types::Options;
use serde::{Deserialize, Serialize};

pub const PATH: &str = "ca/query";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
    /// Query function selector. The service documents the full catalog;
    /// commonly used values include `11`/`13` postal-code search, `16`
    /// postal codes by city and province, `2x` rural and urban address
    /// searches, `3x` code-table dumps and name searches, and `42`-`44`
    /// text and drill-down searches.
    pub query_option: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Maximum records to return; the service defaults to `100`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_returned: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub function_messages: Option<Vec<String>>,
    pub address_list: Option<Vec<super::Address>>,
    pub status_flag: Option<String>,
    pub status_messages: Option<String>,
}
