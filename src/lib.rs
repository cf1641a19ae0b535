//! Cascading region selection and single-file image staging.
//!
//! [`RegionSelector`] drives a region / sub-region pair of dependent
//! choices backed by a [`RegionDirectory`]. [`FileStagingArea`] holds one
//! picked file with a revocable preview handle. The two are independent.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod selector;
pub mod staging;

pub use api::{HttpDirectory, RegionDirectory};
pub use error::{DirectoryError, StagingError};
pub use models::{Region, SelectableOption, Selection, SelectionState, SubRegion};
pub use selector::{Navigator, RegionSelector, PLACEHOLDER_VALUE};
pub use staging::{Blob, FileStagingArea, PreviewRef, PreviewRegistry, Uploader};
