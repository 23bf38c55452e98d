use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumString};

use crate::validate::{require_options, validate_allocation, MAX_ALLOCATION_QUANTITY};
use crate::{Error, Result};

/// Keys `create_data_set` needs when no `like` model dataset is given.
pub const REQUIRED_DATASET_OPTIONS: [&str; 7] =
    ["alcunit", "dsorg", "primary", "recfm", "blksize", "lrecl", "dirblk"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Dsorg {
    /// Partitioned
    Po,
    /// Physical sequential
    Ps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AllocationUnit {
    Cyl,
    Trk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordFormat {
    F,
    Fb,
    V,
    Vb,
    U,
}

/// Allocation attributes of a new dataset, sent verbatim as the create body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Setters)]
#[serde(deny_unknown_fields)]
#[setters(strip_option)]
pub struct DatasetOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub volser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dsorg: Option<Dsorg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcunit: Option<AllocationUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dirblk: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avgblk: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recfm: Option<RecordFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blksize: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lrecl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub storclass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub mgntclass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub dataclass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub dsntype: Option<String>,
    /// Model dataset whose attributes are copied. When set, none of the
    /// required keys have to be present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into)]
    pub like: Option<String>,
}

impl DatasetOptions {
    /// Builds options from a loose JSON object. Unknown keys are rejected.
    pub fn from_map(map: Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(map)).map_err(Error::InvalidOptions)
    }

    pub fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self).map_err(Error::InvalidOptions)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    /// Checks the options and fills in `secondary` when only `primary` was
    /// given.
    pub fn validate(mut self) -> Result<Self> {
        if self.like.is_none() {
            require_options(&self.to_map()?, &REQUIRED_DATASET_OPTIONS)?;
        }

        if let Some(primary) = self.primary {
            validate_allocation(primary, MAX_ALLOCATION_QUANTITY)?;
            if self.secondary.is_none() {
                self.secondary = Some(primary / 10);
            }
        }
        if let Some(secondary) = self.secondary {
            validate_allocation(secondary, MAX_ALLOCATION_QUANTITY)?;
        }

        match (self.dsorg, self.dirblk) {
            (Some(Dsorg::Ps), Some(dirblk)) if dirblk != 0 => Err(Error::InvalidDirectoryBlocks {
                dsorg: Dsorg::Ps,
                dirblk,
                expected: "0",
            }),
            (Some(Dsorg::Po), Some(0)) => Err(Error::InvalidDirectoryBlocks {
                dsorg: Dsorg::Po,
                dirblk: 0,
                expected: "greater than 0",
            }),
            _ => Ok(self),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DefaultDatasetType {
    Partitioned,
    Sequential,
    Classic,
    C,
    Binary,
}

impl DefaultDatasetType {
    /// The preset allocation used by `create_default_data_set`.
    pub fn template(&self) -> DatasetOptions {
        let base = DatasetOptions::default().alcunit(AllocationUnit::Cyl);
        match self {
            DefaultDatasetType::Partitioned => base
                .dsorg(Dsorg::Po)
                .primary(1)
                .dirblk(5)
                .recfm(RecordFormat::Fb)
                .blksize(6160)
                .lrecl(80),
            DefaultDatasetType::Sequential => base
                .dsorg(Dsorg::Ps)
                .primary(1)
                .dirblk(0)
                .recfm(RecordFormat::Fb)
                .blksize(6160)
                .lrecl(80),
            DefaultDatasetType::Classic => base
                .dsorg(Dsorg::Po)
                .primary(1)
                .dirblk(25)
                .recfm(RecordFormat::Fb)
                .blksize(6160)
                .lrecl(80),
            DefaultDatasetType::C => base
                .dsorg(Dsorg::Po)
                .primary(1)
                .dirblk(25)
                .recfm(RecordFormat::Vb)
                .blksize(32760)
                .lrecl(260),
            DefaultDatasetType::Binary => base
                .dsorg(Dsorg::Po)
                .primary(10)
                .dirblk(25)
                .recfm(RecordFormat::U)
                .blksize(27998)
                .lrecl(27998),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn fixture_map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_from_map_rejects_unknown_keys() {
        let fixture = fixture_map(json!({"dsorg": "PO", "colour": "blue"}));
        let actual = DatasetOptions::from_map(fixture);
        assert!(matches!(actual, Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_from_map_rejects_bad_enum_values() {
        let fixture = fixture_map(json!({"dsorg": "DA"}));
        let actual = DatasetOptions::from_map(fixture);
        assert!(matches!(actual, Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_validate_without_primary_and_lrecl_fails() {
        let fixture = DatasetOptions::from_map(fixture_map(json!({
            "alcunit": "CYL",
            "dsorg": "PO",
            "recfm": "FB",
            "blksize": 6160,
            "dirblk": 25
        })))
        .unwrap();

        let actual = fixture.validate();
        assert!(matches!(actual, Err(Error::MissingOption(key)) if key == "primary"));
    }

    #[test]
    fn test_validate_each_required_key() {
        let complete = DefaultDatasetType::Classic.template();
        for key in REQUIRED_DATASET_OPTIONS {
            let mut map = complete.to_map().unwrap();
            map.remove(key);
            let fixture = DatasetOptions::from_map(map).unwrap();
            let actual = fixture.validate();
            assert!(
                matches!(&actual, Err(Error::MissingOption(missing)) if missing == key),
                "expected missing {key}, got {actual:?}"
            );
        }
    }

    #[test]
    fn test_validate_like_skips_required_keys() {
        let fixture = DatasetOptions::default().like("MODEL.DSN");
        let actual = fixture.clone().validate().unwrap();
        assert_eq!(actual, fixture);
    }

    #[test]
    fn test_validate_defaults_secondary() {
        let fixture = DefaultDatasetType::Binary.template();
        let actual = fixture.validate().unwrap().secondary;
        assert_eq!(actual, Some(1));
    }

    #[test]
    fn test_validate_allocation_ceiling() {
        let fixture = DefaultDatasetType::Classic.template().primary(16_777_216);
        let actual = fixture.validate().unwrap_err().to_string();
        assert_eq!(actual, "Maximum allocation quantity of 16777215 exceeded");

        let fixture = DefaultDatasetType::Classic
            .template()
            .secondary(20_000_000);
        let actual = fixture.validate().unwrap_err().to_string();
        assert_eq!(actual, "Maximum allocation quantity of 16777215 exceeded");
    }

    #[test]
    fn test_validate_directory_blocks_match_dsorg() {
        let fixture = DefaultDatasetType::Sequential.template().dirblk(5);
        assert!(matches!(
            fixture.validate(),
            Err(Error::InvalidDirectoryBlocks { dsorg: Dsorg::Ps, dirblk: 5, .. })
        ));

        let fixture = DefaultDatasetType::Partitioned.template().dirblk(0);
        assert!(matches!(
            fixture.validate(),
            Err(Error::InvalidDirectoryBlocks { dsorg: Dsorg::Po, dirblk: 0, .. })
        ));
    }

    #[test]
    fn test_partitioned_template_body() {
        let actual = serde_json::to_value(DefaultDatasetType::Partitioned.template()).unwrap();
        let expected = json!({
            "alcunit": "CYL",
            "dsorg": "PO",
            "primary": 1,
            "dirblk": 5,
            "recfm": "FB",
            "blksize": 6160,
            "lrecl": 80
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_every_template_is_valid() {
        for fixture in [
            DefaultDatasetType::Partitioned,
            DefaultDatasetType::Sequential,
            DefaultDatasetType::Classic,
            DefaultDatasetType::C,
            DefaultDatasetType::Binary,
        ] {
            assert!(fixture.template().validate().is_ok(), "{fixture} template");
        }
    }
}
