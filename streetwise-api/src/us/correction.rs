//! Correct a US address against the USPS database.
use serde::{Deserialize, Serialize};

pub const PATH: &str = "us/correction";

pub type Input = super::AddressRequest;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub firm_name: Option<String>,
    pub urbanization_name: Option<String>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub status_flag: Option<String>,
    pub status_messages: Option<String>,
    pub function_messages: Option<Vec<String>>,
}
