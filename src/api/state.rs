//! Application state for the payroll engine API.

use std::sync::Arc;

use crate::config::PricingConfig;
use crate::store::{IdentityProvider, SessionStore};

/// Shared application state.
///
/// Holds the pricing configuration, the session store and the identity
/// provider shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pricing: Arc<PricingConfig>,
    store: Arc<dyn SessionStore>,
    identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        pricing: PricingConfig,
        store: impl SessionStore + 'static,
        identity: impl IdentityProvider + 'static,
    ) -> Self {
        Self {
            pricing: Arc::new(pricing),
            store: Arc::new(store),
            identity: Arc::new(identity),
        }
    }

    /// Returns the pricing configuration.
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Returns the session store.
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// Returns the identity provider.
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemorySessionStore, StaticIdentity};

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_accessors() {
        let state = AppState::new(
            PricingConfig::halo_default(),
            InMemorySessionStore::new(),
            StaticIdentity::new("owner", true),
        );
        let clone = state.clone();

        assert!(clone.store().delete("missing").is_err());
        assert!(state.store().load_all().unwrap().is_empty());
        assert_eq!(clone.pricing(), state.pricing());
        assert!(clone.identity().current_user().unwrap().is_admin);
    }
}
