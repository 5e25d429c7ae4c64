//! Parse a Canadian address into its discrete components.
use serde::{Deserialize, Serialize};

pub const PATH: &str = "ca/parse";

pub type Input = super::AddressRequest;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub address_type: Option<String>,
    pub street_number: Option<String>,
    pub street_suffix: Option<String>,
    pub street_name: Option<String>,
    pub street_type: Option<String>,
    pub street_direction: Option<String>,
    pub unit_type: Option<String>,
    pub unit_number: Option<String>,
    pub service_type: Option<String>,
    pub service_number: Option<String>,
    pub service_area_name: Option<String>,
    pub service_area_type: Option<String>,
    pub service_area_qualifier: Option<String>,
    pub extra_information: Option<String>,
    pub unidentified_component: Option<String>,
    /// `P` parsed and valid, `I` parsed and invalid.
    pub status_flag: Option<String>,
    pub status_messages: Option<String>,
    pub function_messages: Option<Vec<String>>,
}
