//! Storage and identity ports.
//!
//! The hosted database and the authentication provider live outside this
//! crate. Handlers talk to them through [`SessionStore`] and
//! [`IdentityProvider`]; [`InMemorySessionStore`] and [`StaticIdentity`]
//! are the local implementations used by the server binary and in tests.

mod identity;
mod memory;

pub use identity::StaticIdentity;
pub use memory::InMemorySessionStore;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::SessionRecord;

/// Persistent storage for session records.
pub trait SessionStore: Send + Sync {
    /// Returns every session, newest first.
    fn load_all(&self) -> EngineResult<Vec<SessionRecord>>;

    /// Inserts a session, replacing any session with the same id.
    fn upsert(&self, session: SessionRecord) -> EngineResult<()>;

    /// Deletes a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` when no session has the given id.
    fn delete(&self, id: &str) -> EngineResult<()>;
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User identifier.
    pub id: String,
    /// Whether the user may delete sessions and see every therapist's data.
    pub is_admin: bool,
}

impl CurrentUser {
    /// Fails with `Unauthorized` unless the user is an admin.
    pub fn require_admin(&self, action: &str) -> EngineResult<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(EngineError::Unauthorized {
                user_id: self.id.clone(),
                action: action.to_string(),
            })
        }
    }
}

/// Resolves the user making the current request.
pub trait IdentityProvider: Send + Sync {
    /// Returns the signed-in user.
    fn current_user(&self) -> EngineResult<CurrentUser>;
}
