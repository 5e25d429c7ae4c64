//! Service information, addressed at the versioned base itself.
use serde::{Deserialize, Serialize};

pub const PATH: &str = "";

/// Build, license and database date information for the service instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub info: Option<Vec<String>>,
    pub status_flag: Option<String>,
    pub status_messages: Option<String>,
}
