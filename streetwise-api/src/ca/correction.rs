//! Correct a Canadian address against the Canada Post database.
use serde::{Deserialize, Serialize};

pub const PATH: &str = "ca/correction";

pub type Input = super::AddressRequest;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub recipient: Option<String>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub extra_information: Option<String>,
    pub unidentified_component: Option<String>,
    /// `V` valid, `C` corrected, `N` not correct, `F` foreign.
    pub status_flag: Option<String>,
    pub status_messages: Option<String>,
    /// Server-side execution time in milliseconds.
    pub msecs: Option<i64>,
    pub function_messages: Option<Vec<String>>,
}
