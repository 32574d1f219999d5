//! HTTP handlers for the dashboard API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer. Engine calls are cheap and synchronous, so nothing is offloaded.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};

use super::dto::{
    DashboardControls, EventOutcome, HealthResponse, PieQuery, PieViewModel, RangeChangeRequest,
    ScatterQuery, ScatterViewModel, SessionSnapshot, SiteChangeRequest,
};
use super::error::AppError;
use super::page::DASHBOARD_PAGE;
use super::state::AppState;
use crate::api::SessionId;
use crate::models::{PayloadRange, SelectionEvent, SiteSelection};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_session_id(raw: &str) -> Result<SessionId, AppError> {
    raw.parse()
        .map_err(|e| AppError::BadRequest(format!("Invalid session id '{}': {}", raw, e)))
}

fn session_not_found(id: SessionId) -> AppError {
    AppError::NotFound(format!("Session {} not found", id))
}

fn parse_site(site: Option<String>) -> SiteSelection {
    site.map(SiteSelection::from).unwrap_or_default()
}

// =============================================================================
// Page + Health Check
// =============================================================================

/// GET /
///
/// The dashboard page. It creates a session and drives it through the API.
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
        sites: state.dataset.sites().len(),
        dataset_checksum: state.dataset.checksum().map(str::to_string),
        sessions: state.sessions.len(),
    }))
}

// =============================================================================
// Controls + Stateless Views
// =============================================================================

/// GET /v1/controls
///
/// Site dropdown and payload slider definitions.
pub async fn get_controls(State(state): State<AppState>) -> HandlerResult<DashboardControls> {
    Ok(Json(services::build_controls(&state.dataset)))
}

/// GET /v1/views/pie?site=
pub async fn get_pie_view(
    State(state): State<AppState>,
    Query(query): Query<PieQuery>,
) -> HandlerResult<PieViewModel> {
    let site = parse_site(query.site);
    Ok(Json(services::compute_pie_view(&state.dataset, &site)))
}

/// GET /v1/views/scatter?site=&low=&high=
///
/// Missing bounds default to the dataset's payload extent.
pub async fn get_scatter_view(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> HandlerResult<ScatterViewModel> {
    let site = parse_site(query.site);
    let defaults = PayloadRange::for_dataset(&state.dataset);
    let range = PayloadRange::new(
        query.low.unwrap_or(defaults.low),
        query.high.unwrap_or(defaults.high),
    );
    Ok(Json(services::compute_scatter_view(&state.dataset, &site, range)))
}

// =============================================================================
// Sessions
// =============================================================================

/// POST /v1/sessions
///
/// Open a session with the default selection and both panels rendered.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let snapshot = state.sessions.create();
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /v1/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<SessionSnapshot> {
    let id = parse_session_id(&session_id)?;
    state
        .sessions
        .get(id)
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// POST /v1/sessions/{session_id}/site
///
/// Site dropdown changed: both panels are recomputed.
pub async fn change_site(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<SiteChangeRequest>,
) -> HandlerResult<EventOutcome> {
    let id = parse_session_id(&session_id)?;
    let event = SelectionEvent::SiteChanged {
        site: SiteSelection::from(request.site),
    };
    state
        .sessions
        .dispatch(id, event)
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// POST /v1/sessions/{session_id}/payload-range
///
/// Payload slider changed: only the scatter panel is recomputed. An inverted
/// range is accepted and yields an empty scatter.
pub async fn change_payload_range(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<RangeChangeRequest>,
) -> HandlerResult<EventOutcome> {
    let id = parse_session_id(&session_id)?;
    if !request.low.is_finite() || !request.high.is_finite() {
        return Err(AppError::BadRequest(
            "Payload bounds must be finite numbers".to_string(),
        ));
    }
    let event = SelectionEvent::RangeChanged {
        range: PayloadRange::new(request.low, request.high),
    };
    state
        .sessions
        .dispatch(id, event)
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// DELETE /v1/sessions/{session_id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_session_id(&session_id)?;
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}
