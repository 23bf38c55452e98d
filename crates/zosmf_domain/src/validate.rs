//! Local checks applied to operation parameters before any request is built.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::{DefaultDatasetType, EnqMode, Error, Result};

/// Largest primary or secondary space quantity z/OSMF accepts.
pub const MAX_ALLOCATION_QUANTITY: u64 = 16_777_215;

pub const DEFAULT_DATASET_TYPES: [&str; 5] = ["partitioned", "sequential", "classic", "c", "binary"];

/// Accepts a permission written as its octal digits, e.g. `755`.
pub fn validate_permission(value: i64) -> Result<u16> {
    let in_range = (0..=777).contains(&value);
    let octal = value.to_string().chars().all(|digit| digit <= '7');
    if in_range && octal {
        Ok(value as u16)
    } else {
        Err(Error::InvalidPermsOption(value))
    }
}

pub fn validate_allocation(value: u64, max: u64) -> Result<u64> {
    if value > max {
        return Err(Error::MaxAllocationQuantityExceeded { max });
    }
    Ok(value)
}

/// `None` and `""` mean "not supplied". Anything else must be exactly
/// `EXCLU` or `SHRW`.
pub fn validate_enq(value: Option<&str>) -> Result<Option<EnqMode>> {
    match value {
        None | Some("") => Ok(None),
        Some(enq) => EnqMode::from_str(enq)
            .map(Some)
            .map_err(|_| Error::InvalidEnq(enq.to_string())),
    }
}

pub fn validate_default_dataset_type(value: &str) -> Result<DefaultDatasetType> {
    DefaultDatasetType::from_str(value)
        .map_err(|_| Error::UnsupportedDefaultDataSetRequested(value.to_string()))
}

/// Fails on the first key of `required` that `options` does not carry.
pub fn require_options(options: &Map<String, Value>, required: &[&str]) -> Result<()> {
    match required
        .iter()
        .find(|key| matches!(options.get(**key), None | Some(Value::Null)))
    {
        Some(missing) => Err(Error::MissingOption(missing.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_permission_accepts_octal_values() {
        for fixture in [0, 100, 644, 755, 775, 777] {
            let actual = validate_permission(fixture).unwrap();
            assert_eq!(actual as i64, fixture);
        }
    }

    #[test]
    fn test_permission_rejects_negative_values() {
        for fixture in [-1, -100, i64::MIN] {
            let actual = validate_permission(fixture).unwrap_err().to_string();
            let expected = format!("Invalid zos-files create command 'perms' option: {fixture}");
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_permission_rejects_out_of_range_and_non_octal() {
        for fixture in [778, 800, 1000, 689, 9] {
            let actual = validate_permission(fixture);
            assert!(matches!(actual, Err(Error::InvalidPermsOption(v)) if v == fixture));
        }
    }

    #[test]
    fn test_allocation_ceiling() {
        assert_eq!(validate_allocation(16_777_215, MAX_ALLOCATION_QUANTITY).unwrap(), 16_777_215);

        let actual = validate_allocation(1_677_755_513, MAX_ALLOCATION_QUANTITY)
            .unwrap_err()
            .to_string();
        let expected = "Maximum allocation quantity of 16777215 exceeded";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_allocation_reports_custom_max() {
        let actual = validate_allocation(11, 10).unwrap_err().to_string();
        let expected = "Maximum allocation quantity of 10 exceeded";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_enq_accepted_values() {
        assert_eq!(validate_enq(Some("EXCLU")).unwrap(), Some(EnqMode::Exclu));
        assert_eq!(validate_enq(Some("SHRW")).unwrap(), Some(EnqMode::Shrw));
        assert_eq!(validate_enq(None).unwrap(), None);
        assert_eq!(validate_enq(Some("")).unwrap(), None);
    }

    #[test]
    fn test_enq_rejects_other_values() {
        for fixture in ["RANDOM", "INVALID", "exclu", "SHR"] {
            let actual = validate_enq(Some(fixture)).unwrap_err().to_string();
            assert_eq!(actual, "Invalid value for enq.");
        }
    }

    #[test]
    fn test_enq_whitespace_is_not_absence() {
        for fixture in ["   ", "\t", " SHRW ", "EXCLU "] {
            let actual = validate_enq(Some(fixture));
            assert!(
                matches!(&actual, Err(Error::InvalidEnq(value)) if value == fixture),
                "expected {fixture:?} to be rejected, got {actual:?}"
            );
        }
    }

    #[test]
    fn test_default_dataset_type() {
        assert_eq!(
            validate_default_dataset_type("partitioned").unwrap(),
            DefaultDatasetType::Partitioned
        );
        assert_eq!(validate_default_dataset_type("c").unwrap(), DefaultDatasetType::C);

        let actual = validate_default_dataset_type("unsupported_type")
            .unwrap_err()
            .to_string();
        let expected = "Invalid request. The following default options are available: partitioned, sequential, classic, c, binary.";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_require_options_reports_first_missing_key() {
        let fixture = json!({"alcunit": "CYL", "dsorg": "PO", "lrecl": null});
        let fixture = fixture.as_object().unwrap();

        assert!(require_options(fixture, &["alcunit", "dsorg"]).is_ok());

        let actual = require_options(fixture, &["alcunit", "lrecl", "primary"]);
        assert!(matches!(actual, Err(Error::MissingOption(key)) if key == "lrecl"));
    }
}
