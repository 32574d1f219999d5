//! Per-client dashboard sessions.
//!
//! Every session owns an independent selection and binder; the dataset stays
//! shared. Events for one session are processed one at a time under that
//! session's lock.
//!
//! Sessions that sit idle past the configured timeout are dropped, and the
//! registry never holds more than `max_sessions`: opening one more evicts the
//! least recently used.

use chrono::{DateTime, Duration, Utc};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

use super::binder::ReactiveBinder;
use super::renderer::PanelBoard;
use crate::api::{EventOutcome, SessionId, SessionSnapshot};
use crate::models::{SelectionEvent, SharedDataset};

pub const DEFAULT_MAX_SESSIONS: usize = 256;
pub const DEFAULT_IDLE_TIMEOUT_SECS: i64 = 30 * 60;

/// Bounds on how many sessions the registry keeps and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_sessions: usize,
    pub idle_timeout: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            idle_timeout: Duration::seconds(DEFAULT_IDLE_TIMEOUT_SECS),
        }
    }
}

struct Session {
    id: SessionId,
    created_at: DateTime<Utc>,
    last_used: DateTime<Utc>,
    binder: ReactiveBinder<PanelBoard>,
}

impl Session {
    fn snapshot(&self) -> SessionSnapshot {
        let board = self.binder.renderer();
        SessionSnapshot {
            session_id: self.id,
            created_at: self.created_at,
            selection: self.binder.state().clone(),
            pie: board.pie().cloned(),
            scatter: board.scatter().cloned(),
            renders: board.renders(),
        }
    }
}

/// In-memory session registry.
#[derive(Clone)]
pub struct SessionRegistry {
    dataset: SharedDataset,
    limits: SessionLimits,
    sessions: Arc<RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>>,
}

impl SessionRegistry {
    pub fn new(dataset: SharedDataset) -> Self {
        Self::with_limits(dataset, SessionLimits::default())
    }

    pub fn with_limits(dataset: SharedDataset, limits: SessionLimits) -> Self {
        Self {
            dataset,
            limits: SessionLimits {
                max_sessions: limits.max_sessions.max(1),
                ..limits
            },
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn limits(&self) -> SessionLimits {
        self.limits
    }

    /// Open a session with the default selection and both panels rendered.
    pub fn create(&self) -> SessionSnapshot {
        self.create_at(Utc::now())
    }

    fn create_at(&self, now: DateTime<Utc>) -> SessionSnapshot {
        let id = SessionId::new();
        let mut binder = ReactiveBinder::new(Arc::clone(&self.dataset), PanelBoard::new());
        binder.render_all();

        let session = Session {
            id,
            created_at: now,
            last_used: now,
            binder,
        };
        let snapshot = session.snapshot();

        {
            let mut sessions = self.sessions.write();
            Self::evict_locked(&mut sessions, &self.limits, now);
            while sessions.len() >= self.limits.max_sessions {
                match Self::least_recently_used(&sessions) {
                    Some(oldest) => {
                        sessions.remove(&oldest);
                        log::info!("Evicted dashboard session {} (registry full)", oldest);
                    }
                    None => break,
                }
            }
            sessions.insert(id, Arc::new(Mutex::new(session)));
        }

        log::info!("Created dashboard session {}", id);
        snapshot
    }

    pub fn get(&self, id: SessionId) -> Option<SessionSnapshot> {
        let session = self.sessions.read().get(&id).cloned()?;
        let mut session = session.lock();
        session.last_used = Utc::now();
        Some(session.snapshot())
    }

    /// Apply one event to a session. `None` if the session does not exist.
    pub fn dispatch(&self, id: SessionId, event: SelectionEvent) -> Option<EventOutcome> {
        let session = self.sessions.read().get(&id).cloned()?;
        let mut session = session.lock();
        session.last_used = Utc::now();

        let updated = session.binder.handle(event);
        Some(EventOutcome {
            updated_panels: updated.iter().map(|p| p.as_str().to_string()).collect(),
            session: session.snapshot(),
        })
    }

    pub fn remove(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().remove(&id).is_some();
        if removed {
            log::info!("Closed dashboard session {}", id);
        }
        removed
    }

    /// Drop every session idle for longer than the timeout as of `now`.
    /// Returns how many were removed.
    pub fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        Self::evict_locked(&mut self.sessions.write(), &self.limits, now)
    }

    fn evict_locked(
        sessions: &mut HashMap<SessionId, Arc<Mutex<Session>>>,
        limits: &SessionLimits,
        now: DateTime<Utc>,
    ) -> usize {
        let before = sessions.len();
        // A session whose lock is held is mid-event, so it is in use.
        sessions.retain(|id, session| match session.try_lock() {
            Some(session) if now - session.last_used > limits.idle_timeout => {
                log::info!("Expired idle dashboard session {}", id);
                false
            }
            _ => true,
        });
        before - sessions.len()
    }

    fn least_recently_used(
        sessions: &HashMap<SessionId, Arc<Mutex<Session>>>,
    ) -> Option<SessionId> {
        sessions
            .iter()
            .filter_map(|(id, session)| session.try_lock().map(|s| (*id, s.last_used)))
            .min_by_key(|(_, last_used)| *last_used)
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
