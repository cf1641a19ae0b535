use serde::{Deserialize, Serialize};

/// A top-level region as listed by the directory (e.g. a state code).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Region {
    #[serde(rename = "sigla", alias = "code")]
    pub code: String,
}

impl Region {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
