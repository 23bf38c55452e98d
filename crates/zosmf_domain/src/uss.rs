use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UssFileType {
    #[default]
    File,
    Directory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(deny_unknown_fields)]
#[setters(strip_option)]
pub struct UssCreateOptions {
    #[serde(rename = "type")]
    pub file_type: UssFileType,
    /// Symbolic permissions, e.g. `rwxr-xr--`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub mode: Option<String>,
}

impl UssCreateOptions {
    pub fn directory() -> Self {
        Self { file_type: UssFileType::Directory, mode: None }
    }
}
