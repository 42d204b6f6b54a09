//! Fixed identity provider.

use crate::error::EngineResult;

use super::{CurrentUser, IdentityProvider};

/// An [`IdentityProvider`] that always returns the same user.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    user: CurrentUser,
}

impl StaticIdentity {
    /// Creates a provider for the given user.
    pub fn new(id: impl Into<String>, is_admin: bool) -> Self {
        Self {
            user: CurrentUser {
                id: id.into(),
                is_admin,
            },
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> EngineResult<CurrentUser> {
        Ok(self.user.clone())
    }
}
