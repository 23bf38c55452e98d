use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Serialization mode z/OSMF takes on a dataset while renaming one of its
/// members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum EnqMode {
    /// Exclusive use.
    #[serde(rename = "EXCLU")]
    #[strum(serialize = "EXCLU")]
    Exclu,
    /// Shared with write.
    #[serde(rename = "SHRW")]
    #[strum(serialize = "SHRW")]
    Shrw,
}
