//! US address operations.
pub mod correction;
pub mod parse;
pub mod search;

use crate::types::Options;
use serde::{Deserialize, Serialize};

/// Request body shared by the US correction, parse and search operations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urbanization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// A USPS address data record, as returned by the search operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    /// Record type: `B` building, `F` firm, `G` general delivery, `H`
    /// highrise, `M` military, `P` PO box, `R` rural, `S` urban, `U`
    /// unique, `*` generic.
    pub record_type: Option<String>,
    pub city_name: Option<String>,
    pub state_abbreviation: Option<String>,
    pub zip_code: Option<String>,
    pub plus_four_addon_low: Option<String>,
    pub plus_four_addon_high: Option<String>,
    pub street_number_low: Option<String>,
    pub street_number_high: Option<String>,
    pub street_pre_direction: Option<String>,
    pub street_name: Option<String>,
    pub street_suffix: Option<String>,
    pub street_post_direction: Option<String>,
    pub unit_type: Option<String>,
    pub unit_number_low: Option<String>,
    pub unit_number_high: Option<String>,
    pub private_mail_box_number: Option<String>,
    pub location_name: Option<String>,
    /// Original internal record, present when debugging.
    #[serde(rename = "orig_rec")]
    pub orig_rec: Option<String>,
}
