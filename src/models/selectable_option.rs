use serde::{Deserialize, Serialize};

use super::{Region, SubRegion};

/// UI-facing projection of a region or sub-region.
///
/// `value` drives selection and equality, `label` is what gets shown and
/// `key` is a stable identity for list renderers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectableOption {
    pub value: String,
    pub key: String,
    pub label: String,
}

impl SelectableOption {
    /// Option whose value, key and label are all `text`.
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            key: text.clone(),
            label: text,
        }
    }
}

impl From<&Region> for SelectableOption {
    fn from(region: &Region) -> Self {
        Self::uniform(region.code.clone())
    }
}

impl From<&SubRegion> for SelectableOption {
    fn from(sub_region: &SubRegion) -> Self {
        Self::uniform(sub_region.name.clone())
    }
}
