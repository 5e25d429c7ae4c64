//! Format an address into mailing-label lines.
use crate::types::Options;
use serde::{Deserialize, Serialize};

pub const PATH: &str = "ca/format";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub format_line_one: Option<String>,
    pub format_line_two: Option<String>,
    pub format_line_three: Option<String>,
    pub format_line_four: Option<String>,
    pub format_line_five: Option<String>,
    pub status_flag: Option<String>,
    pub status_messages: Option<String>,
}
