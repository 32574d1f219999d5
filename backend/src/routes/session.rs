use serde::{Deserialize, Serialize};

use super::pie::PieViewModel;
use super::scatter::ScatterViewModel;
use crate::api::SessionId;
use crate::models::SelectionState;

// =========================================================
// Dashboard session types + routes
// =========================================================

/// Current state of one dashboard session: its selection and both panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub selection: SelectionState,
    pub pie: Option<PieViewModel>,
    pub scatter: Option<ScatterViewModel>,
    /// Number of panel renders since the session was created.
    pub renders: u64,
}

/// Result of dispatching one selection event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventOutcome {
    /// Panels that were recomputed, in dispatch order.
    pub updated_panels: Vec<String>,
    pub session: SessionSnapshot,
}

/// Route function name constant for session creation
pub const CREATE_SESSION: &str = "create_session";

/// Route function name constant for event dispatch
pub const DISPATCH_EVENT: &str = "dispatch_event";
