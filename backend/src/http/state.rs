//! Application state for the HTTP server.

use crate::models::SharedDataset;
use crate::services::{SessionLimits, SessionRegistry};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable launch dataset, loaded once at startup
    pub dataset: SharedDataset,
    /// Per-client selection state and rendered panels
    pub sessions: SessionRegistry,
}

impl AppState {
    /// Create a new application state around the loaded dataset.
    pub fn new(dataset: SharedDataset) -> Self {
        Self::with_session_limits(dataset, SessionLimits::default())
    }

    /// Create state whose session registry uses the given bounds.
    pub fn with_session_limits(dataset: SharedDataset, limits: SessionLimits) -> Self {
        let sessions = SessionRegistry::with_limits(dataset.clone(), limits);
        Self { dataset, sessions }
    }
}
