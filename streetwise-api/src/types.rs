//! Types shared across endpoint namespaces.
use serde::{Deserialize, Serialize};

/// Per-request processing options honored by the correction, validation,
/// format and fetch operations. Every field is optional; the service applies
/// its documented defaults for absent ones.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Options {
    /// `I`nput, `E`nglish, `F`rench or `C`PCDB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language_style: Option<String>,
    /// Preferred language for messages and reporting: `E`nglish or `F`rench.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_language: Option<String>,
    /// Controls which message-code prefixes are returned with correction
    /// messages (`Y`/`N`, or the numeric levels `0`-`6`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_message_numbers: Option<String>,
    /// Maximum number of alternate addresses to report when a correction is
    /// not possible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_try_messages: Option<i32>,
    /// Number of address components allowed to vary while still considering
    /// an input a match (`0`-`4`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_tolerance: Option<i32>,
    /// Unit designator keyword, e.g. `SUITE`, `UNIT` or `APT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_unit_designator_keyword: Option<String>,
    /// `K`eyword style (`123 MAIN ST SUITE 5`) or `W`estern style
    /// (`5-123 MAIN ST`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_unit_designator_style: Option<String>,
    /// `N`atural or `S`treet-first formatting, with numeric variants for
    /// case and accent handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format_guide: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_information_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_change_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_error_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_try_messages: Option<bool>,
    /// `D`etail, `S`ummary, `E`rrors only, or `N`o report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception_report_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_optimize_messages: Option<bool>,
    /// `Y` to replace components with Canada Post symbols, `S` to
    /// standardize the whole input line, `N` to leave it alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimize_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_options() {
        let options = Options {
            user_language: Some(String::from("E")),
            maximum_try_messages: Some(5),
            print_change_messages: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&options).expect("serialize"),
            r#"{"UserLanguage":"E","MaximumTryMessages":5,"PrintChangeMessages":false}"#
        );
    }
}
