//! In-memory session store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::SessionRecord;

use super::SessionStore;

/// A [`SessionStore`] held in process memory.
///
/// Clones share the same sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `sessions`.
    pub fn with_sessions(sessions: impl IntoIterator<Item = SessionRecord>) -> Self {
        let sessions = sessions
            .into_iter()
            .map(|session| (session.id.clone(), session))
            .collect();
        Self {
            sessions: Arc::new(RwLock::new(sessions)),
        }
    }
}

fn poisoned() -> EngineError {
    EngineError::StoreUnavailable {
        message: "session store lock poisoned".to_string(),
    }
}

impl SessionStore for InMemorySessionStore {
    fn load_all(&self) -> EngineResult<Vec<SessionRecord>> {
        let sessions = self.sessions.read().map_err(|_| poisoned())?;
        let mut all: Vec<SessionRecord> = sessions.values().cloned().collect();
        // Newest first; id keeps same-day order stable.
        all.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    fn upsert(&self, session: SessionRecord) -> EngineResult<()> {
        let mut sessions = self.sessions.write().map_err(|_| poisoned())?;
        debug!(session_id = %session.id, "Upserting session");
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    fn delete(&self, id: &str) -> EngineResult<()> {
        let mut sessions = self.sessions.write().map_err(|_| poisoned())?;
        match sessions.remove(id) {
            Some(_) => {
                debug!(session_id = %id, "Deleted session");
                Ok(())
            }
            None => Err(EngineError::SessionNotFound { id: id.to_string() }),
        }
    }
}
