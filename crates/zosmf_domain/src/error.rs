use thiserror::Error;

use crate::validate::{DEFAULT_DATASET_TYPES, MAX_ALLOCATION_QUANTITY};
use crate::Dsorg;

// Every variant here is raised before a request is built. Nothing in this enum
// is ever the result of talking to the server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid zos-files create command 'perms' option: {0}")]
    InvalidPermsOption(i64),

    #[error("Maximum allocation quantity of {max} exceeded")]
    MaxAllocationQuantityExceeded { max: u64 },

    #[error("Invalid value for enq.")]
    InvalidEnq(String),

    #[error(
        "Invalid request. The following default options are available: {}.",
        DEFAULT_DATASET_TYPES.join(", ")
    )]
    UnsupportedDefaultDataSetRequested(String),

    #[error("Missing required option: {0}")]
    MissingOption(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(serde_json::Error),

    #[error("Directory blocks must be {expected} for dsorg {dsorg}, got {dirblk}")]
    InvalidDirectoryBlocks {
        dsorg: Dsorg,
        dirblk: u32,
        expected: &'static str,
    },

    #[error("Invalid connection profile: {0}")]
    InvalidProfile(String),
}

impl Error {
    pub fn max_allocation_exceeded() -> Self {
        Error::MaxAllocationQuantityExceeded { max: MAX_ALLOCATION_QUANTITY }
    }
}

pub type Result<A> = std::result::Result<A, Error>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unsupported_default_message_lists_types_in_order() {
        let fixture = Error::UnsupportedDefaultDataSetRequested("unsupported_type".to_string());
        let actual = fixture.to_string();
        let expected = "Invalid request. The following default options are available: partitioned, sequential, classic, c, binary.";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_max_allocation_message() {
        let actual = Error::max_allocation_exceeded().to_string();
        let expected = "Maximum allocation quantity of 16777215 exceeded";
        assert_eq!(actual, expected);
    }
}
