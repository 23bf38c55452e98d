use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A dataset name as it appears in URLs and request bodies.
///
/// Construction is the only normalization step names go through: surrounding
/// whitespace is trimmed, nothing else is checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(from = "String")]
pub struct DatasetName(String);

impl DatasetName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `DSN(MEMBER)`, the form z/OSMF expects for member resources.
    pub fn with_member(&self, member: &MemberName) -> String {
        format!("{}({})", self.0, member.as_str())
    }
}

impl From<&str> for DatasetName {
    fn from(value: &str) -> Self {
        DatasetName::new(value)
    }
}

impl From<String> for DatasetName {
    fn from(value: String) -> Self {
        DatasetName::new(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(from = "String")]
pub struct MemberName(String);

impl MemberName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberName {
    fn from(value: &str) -> Self {
        MemberName::new(value)
    }
}

impl From<String> for MemberName {
    fn from(value: String) -> Self {
        MemberName::new(value)
    }
}
