use serde::{Deserialize, Serialize};

/// Mutable pair of choices held by the region selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_region: String,
    pub selected_sub_region: String,
}

/// What `proceed` hands to the next screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub region: String,
    #[serde(rename = "subRegion")]
    pub sub_region: String,
}

impl From<&SelectionState> for Selection {
    fn from(state: &SelectionState) -> Self {
        Self {
            region: state.selected_region.clone(),
            sub_region: state.selected_sub_region.clone(),
        }
    }
}
