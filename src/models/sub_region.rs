use serde::{Deserialize, Serialize};

/// A sub-region scoped to exactly one region (e.g. a city).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SubRegion {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
}

impl SubRegion {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
