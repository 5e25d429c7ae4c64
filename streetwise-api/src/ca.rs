//! Canadian address operations.
pub mod correction;
pub mod fetch;
pub mod format;
pub mod parse;
pub mod query;
pub mod search;
pub mod typeahead;
pub mod validate;

use crate::types::Options;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Request body shared by the correction, parse and search operations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// A Canada Post address data record, as returned by the search, query and
/// typeahead operations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub id: Option<String>,
    /// Record type: `1` street address, `2` street served by route, `3` lock
    /// box, `4` route service, `5` general delivery.
    pub rec_typ_cde: i32,
    /// Address type: `1` civic format, `2` delivery installation format.
    pub adr_typ_cde: i32,
    pub prov_cde: Option<String>,
    /// Major community or greater municipality grouping; usually not
    /// displayed.
    pub drctry_area_nme: Option<String>,
    /// Official civic name of the roadway or artery.
    pub st_nme: Option<String>,
    pub st_typ_cde: Option<String>,
    pub st_drctn_cde: Option<String>,
    /// Sequence of the street number range: `1` odd, `2` even, `3` mixed.
    pub st_adr_seq_cde: Option<i32>,
    /// Highest street number in the range.
    pub st_adr_to_nbr: Option<i32>,
    pub st_adr_nbr_sfx_to_cde: Option<String>,
    pub ste_frm_nbr: Option<String>,
    pub ste_to_nbr: Option<String>,
    /// Lowest street number in the range.
    pub st_adr_frm_nbr: Option<i32>,
    pub st_adr_nbr_sfx_frm_cde: Option<String>,
    pub mncplt_nme: Option<String>,
    /// Route service type for type `2` records: `RR`, `SS`, `MR` or `GD`.
    pub route_serv_typ_dsc: Option<String>,
    pub route_serv_nbr: Option<i32>,
    /// Delivery installation area name; populated but usually not displayed.
    pub di_area_nme: Option<String>,
    pub di_typ_dsc: Option<String>,
    pub di_qlfr_nme: Option<String>,
    pub lock_box_bag_to_nbr: Option<i32>,
    pub lock_box_bag_frm_nbr: Option<i32>,
    pub pstl_cde: Option<String>,
    /// Type of record in the TEXT lookup table (`A` building name, `B`/`D`
    /// large volume receiver, `C`/`E` government, `F` general delivery,
    /// `R`/`V` road segment).
    pub text_record_flag: Option<String>,
    pub cntry_cde: Option<String>,
    pub cpc_nrn_segs: Option<HashSet<String>>,
    /// Original internal record, present when debugging.
    pub orig_rec: Option<String>,
}

impl Address {
    /// Human-readable form of [`st_adr_seq_cde`](Address::st_adr_seq_cde).
    pub fn street_sequence(&self) -> Option<&'static str> {
        match self.st_adr_seq_cde {
            Some(1) => Some("Odd"),
            Some(2) => Some("Even"),
            Some(3) => Some("Mixed"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_sequence() {
        let mut address = Address { st_adr_seq_cde: Some(2), ..Default::default() };
        assert_eq!(address.street_sequence(), Some("Even"));
        address.st_adr_seq_cde = None;
        assert_eq!(address.street_sequence(), None);
    }

    #[test]
    fn serialize_address_request() {
        let request = AddressRequest {
            address_line: Some(String::from("123 main st")),
            city: Some(String::from("ottawa")),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&request).expect("serialize"),
            r#"{"address_line":"123 main st","city":"ottawa"}"#
        );
    }
}
