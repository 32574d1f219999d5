//! Dataset input: CSV loading and source checksums.

pub mod checksum;
pub mod loader;


pub use loader::{load_dataset, parse_dataset, DatasetLoadError};
