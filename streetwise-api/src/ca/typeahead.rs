//! Interactive address suggestions driven by a partial input line.
use serde::{Deserialize, Serialize};

pub const PATH: &str = "ca/typeahead";
/// Variant returning full data records instead of display lines.
pub const REC_PATH: &str = "ca/typeahead/rec";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    /// The user-entered address search line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    /// Restricts the query to a city, matched as a prefix; dashes are
    /// ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter province code to restrict the query to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// Postal code to restrict the query to, matched as a prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Tokenize the address line so each token is prefix-searched through
    /// the full address.
    pub tokenize_qry: bool,
    /// Maximum results to return; the service defaults to `20`, capped at
    /// `200`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_returned: Option<i32>,
    /// First record to return, for paging; numbering starts at zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_rec: Option<i32>,
}

/// One suggestion: a record id to fetch the full address with, and a
/// formatted line for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Addr {
    pub id: Option<String>,
    pub addr: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    /// Street number parsed from the input line.
    pub addr_num: i32,
    /// Unit number parsed from the input line (`nnn-ssss street`).
    pub unit_num: Option<String>,
    /// Street suffix parsed from the input line.
    pub suffix: Option<String>,
    /// Number of returned addresses.
    pub count: i32,
    pub start_rec: i32,
    /// Total matches for the search; can be greater than `count`.
    pub total_hits: i32,
    /// Display suggestions; absent for the `rec` variant.
    pub address_lines: Option<Vec<Addr>>,
    /// Full data records; absent for the plain variant.
    pub recs: Option<Vec<super::Address>>,
    /// Server-side execution time in milliseconds.
    pub t_exec_ms: i64,
    pub status_flag: Option<String>,
    pub status_messages: Option<String>,
}

/// Fetch the full address behind a typeahead suggestion.
pub mod fetch {
    use crate::types::Options;
    use serde::{Deserialize, Serialize};

    pub const PATH: &str = "ca/typeahead/fetch";

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
    pub struct Input {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub options: Option<Options>,
        /// Id of the record to fetch, as returned by the typeahead.
        pub id: Option<String>,
        /// Run the correction operation on the fetched address, using the
        /// passed options.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub autocorrect: Option<bool>,
        /// Return the discrete components of the fetched address, including
        /// anything changed by an auto-correction.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub return_components: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub street_num: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub street_suffix: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub unit_num: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub postal_code: Option<String>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
    pub struct Output {
        pub address_line: Option<String>,
        pub city: Option<String>,
        pub province: Option<String>,
        pub postal_code: Option<String>,
        /// Populated if autocorrect was enabled.
        pub unidentified_component: Option<String>,
        /// Populated if autocorrect was enabled.
        pub function_messages: Option<Vec<String>>,
        /// Data record representing this address.
        pub addr_rec: Option<crate::ca::Address>,
        /// Discrete components, if `return_components` was set.
        pub components: Option<crate::ca::parse::Output>,
        pub status_flag: Option<String>,
        pub status_messages: Option<String>,
    }
}
