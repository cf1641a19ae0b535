// Directory API modules
pub mod client;
pub mod regions;
pub mod sub_regions;
pub mod directory;

// Re-export commonly used functions
pub use client::{build_url, get_json, set_silent};
pub use regions::load_regions;
pub use sub_regions::load_sub_regions;
pub use directory::{HttpDirectory, RegionDirectory};
