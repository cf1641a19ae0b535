pub mod region;
pub mod sub_region;
pub mod selectable_option;
pub mod selection_state;

pub use region::Region;
pub use sub_region::SubRegion;
pub use selectable_option::SelectableOption;
pub use selection_state::{Selection, SelectionState};
