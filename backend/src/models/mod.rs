//! Domain models: launch records, the loaded dataset and the selection state.

pub mod dataset;
pub mod launch;
pub mod selection;

pub use dataset::{LaunchDataset, SharedDataset};
pub use launch::{LaunchRecord, OutcomeClass};
pub use selection::{
    EventChannel, PayloadRange, SelectionEvent, SelectionState, SiteSelection, ALL_SITES,
};
