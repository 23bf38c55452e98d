use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumString};

use crate::validate::{validate_allocation, validate_permission, MAX_ALLOCATION_QUANTITY};
use crate::{Error, Result};

/// Attributes of a new zFS aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[setters(strip_option)]
pub struct ZfsOptions {
    /// Octal permission digits of the root directory, e.g. `755`. Left out of
    /// the body when unset so z/OSMF applies its own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perms: Option<i64>,
    pub cyls_pri: u64,
    pub cyls_sec: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub storage_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub management_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub data_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<String>>,
    /// Seconds z/OSMF waits for the format to finish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

impl ZfsOptions {
    pub fn new(cyls_pri: u64, cyls_sec: u64) -> Self {
        Self {
            perms: None,
            cyls_pri,
            cyls_sec,
            owner: None,
            group: None,
            storage_class: None,
            management_class: None,
            data_class: None,
            volumes: None,
            timeout: None,
        }
    }

    /// Builds options from a loose JSON object. Unknown keys are rejected.
    pub fn from_map(map: Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(map)).map_err(Error::InvalidOptions)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(perms) = self.perms {
            validate_permission(perms)?;
        }
        validate_allocation(self.cyls_pri, MAX_ALLOCATION_QUANTITY)?;
        validate_allocation(self.cyls_sec, MAX_ALLOCATION_QUANTITY)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MountMode {
    #[default]
    Rdonly,
    Rdwr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(rename_all = "kebab-case")]
pub struct MountOptions {
    #[setters(into)]
    pub fs_type: String,
    pub mode: MountMode,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self { fs_type: "zFS".to_string(), mode: MountMode::default() }
    }
}

/// Query filter for listing mounted filesystems. Both fields empty lists
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
#[setters(strip_option, into)]
pub struct FileSystemFilter {
    pub path: Option<String>,
    pub fsname: Option<String>,
}

impl FileSystemFilter {
    pub fn fsname_only(fsname: impl Into<String>) -> Self {
        Self::default().fsname(fsname)
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(path) = &self.path {
            pairs.push(("path", path.as_str()));
        }
        if let Some(fsname) = &self.fsname {
            pairs.push(("fsname", fsname.as_str()));
        }
        pairs
    }
}
