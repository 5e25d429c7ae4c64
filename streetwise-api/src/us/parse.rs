//! Parse a US address into its discrete components.
use serde::{Deserialize, Serialize};

pub const PATH: &str = "us/parse";

pub type Input = super::AddressRequest;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub address_type: Option<String>,
    pub street_number: Option<String>,
    pub street_pre_direction: Option<String>,
    pub street_name: Option<String>,
    pub street_type: Option<String>,
    pub street_post_direction: Option<String>,
    pub secondary_type: Option<String>,
    pub secondary_number: Option<String>,
    pub service_type: Option<String>,
    pub service_number: Option<String>,
    pub delivery_point_barcode: Option<String>,
    pub congressional_district: Option<String>,
    pub county_name: Option<String>,
    pub county_code: Option<String>,
    pub status_flag: Option<String>,
    pub status_messages: Option<String>,
    pub function_messages: Option<Vec<String>>,
}
