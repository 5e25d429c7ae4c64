//! Search the USPS database for matching address records.
use serde::{Deserialize, Serialize};

pub const PATH: &str = "us/search";

pub type Input = super::AddressRequest;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub response_count: i32,
    pub response_address_list: Option<Vec<super::Address>>,
    /// `S` single response, `D` default response, `I` invalid, `M` multiple
    /// responses.
    pub status_flag: Option<String>,
    pub status_messages: Option<String>,
    pub function_messages: Option<Vec<String>>,
}
