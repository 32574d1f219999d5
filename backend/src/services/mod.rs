//! Service layer: the aggregation engine and the reactive plumbing around it.
//!
//! The engine (`pie`, `scatter`) is a set of pure functions over the shared
//! dataset. The `binder` wires selection events to those functions and to a
//! `renderer`; `sessions` gives every client its own binder.

pub mod binder;

pub mod controls;

pub mod pie;

pub mod renderer;

pub mod scatter;

pub mod sessions;


#[cfg(test)]
#[path = "scatter_tests.rs"]
mod scatter_tests;

pub use binder::{BinderPhase, ReactiveBinder};
pub use controls::build_controls;
pub use pie::compute_pie_view;
pub use renderer::{PanelBoard, PanelId, ViewModel, ViewRenderer};
pub use scatter::compute_scatter_view;
pub use sessions::{SessionLimits, SessionRegistry};
