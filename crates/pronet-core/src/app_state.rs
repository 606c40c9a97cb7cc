// ── Process-wide flow flags ──
//
// Two persisted booleans and the top-level flow derived from them. The
// flow is never stored; it is recomputed on every read.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::Display;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::store::{FlagStore, keys};
use crate::stream::StateStream;

/// The three mutually exclusive top-level modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Onboarding,
    Auth,
    Main,
}

impl Flow {
    /// Onboarding gates everything; then authentication gates main.
    pub fn derive(has_completed_onboarding: bool, is_authenticated: bool) -> Self {
        if !has_completed_onboarding {
            Self::Onboarding
        } else if !is_authenticated {
            Self::Auth
        } else {
            Self::Main
        }
    }
}

/// Flow flags with write-through persistence.
pub struct AppState {
    store: Arc<dyn FlagStore>,
    has_completed_onboarding: bool,
    is_authenticated: bool,
    flow: watch::Sender<Flow>,
}

impl AppState {
    /// Load both flags from `store`. Missing keys read as `false`.
    pub fn new(store: Arc<dyn FlagStore>) -> Self {
        let has_completed_onboarding = store.get_bool(keys::HAS_COMPLETED_ONBOARDING);
        let is_authenticated = store.get_bool(keys::IS_AUTHENTICATED);
        let (flow, _) = watch::channel(Flow::derive(has_completed_onboarding, is_authenticated));

        debug!(has_completed_onboarding, is_authenticated, "app state loaded");
        Self {
            store,
            has_completed_onboarding,
            is_authenticated,
            flow,
        }
    }

    pub fn has_completed_onboarding(&self) -> bool {
        self.has_completed_onboarding
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn current_flow(&self) -> Flow {
        Flow::derive(self.has_completed_onboarding, self.is_authenticated)
    }

    /// Subscribe to flow changes.
    pub fn subscribe(&self) -> StateStream<Flow> {
        StateStream::new(self.flow.subscribe())
    }

    // ── Mutators ─────────────────────────────────────────────────────

    pub fn complete_onboarding(&mut self) {
        self.set_has_completed_onboarding(true);
    }

    pub fn login_succeeded(&mut self) {
        self.set_is_authenticated(true);
    }

    /// Sign out. Onboarding stays complete, so the user lands in `Auth`.
    pub fn logout(&mut self) {
        self.set_is_authenticated(false);
    }

    fn set_has_completed_onboarding(&mut self, value: bool) {
        self.has_completed_onboarding = value;
        self.persist(keys::HAS_COMPLETED_ONBOARDING, value);
    }

    fn set_is_authenticated(&mut self, value: bool) {
        self.is_authenticated = value;
        self.persist(keys::IS_AUTHENTICATED, value);
    }

    fn persist(&self, key: &str, value: bool) {
        if let Err(err) = self.store.set_bool(key, value) {
            warn!(key, value, %err, "flag not persisted; keeping in-memory value");
        }
        let flow = self.current_flow();
        debug!(key, value, %flow, "flag updated");
        self.flow.send_if_modified(|current| {
            let changed = *current != flow;
            *current = flow;
            changed
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::store::MemoryFlagStore;

    fn fresh() -> AppState {
        AppState::new(Arc::new(MemoryFlagStore::new()))
    }

    #[test]
    fn flow_truth_table() {
        assert_eq!(Flow::derive(false, false), Flow::Onboarding);
        assert_eq!(Flow::derive(false, true), Flow::Onboarding);
        assert_eq!(Flow::derive(true, false), Flow::Auth);
        assert_eq!(Flow::derive(true, true), Flow::Main);
    }

    #[test]
    fn display_matches_serialized_name() {
        for flow in [Flow::Onboarding, Flow::Auth, Flow::Main] {
            let json = serde_json::to_string(&flow).unwrap();
            assert_eq!(json, format!("\"{flow}\""));
        }
        assert_eq!(Flow::Auth.to_string(), "auth");
    }

    #[test]
    fn mutators_walk_the_flows() {
        let mut state = fresh();
        assert_eq!(state.current_flow(), Flow::Onboarding);
        state.complete_onboarding();
        assert_eq!(state.current_flow(), Flow::Auth);
        state.login_succeeded();
        assert_eq!(state.current_flow(), Flow::Main);
        state.logout();
        assert_eq!(state.current_flow(), Flow::Auth);
        assert!(state.has_completed_onboarding());
    }

    #[test]
    fn writes_through_to_store() {
        let store = Arc::new(MemoryFlagStore::new());
        let mut state = AppState::new(store.clone());
        state.complete_onboarding();
        state.login_succeeded();
        assert!(store.get_bool(keys::HAS_COMPLETED_ONBOARDING));
        assert!(store.get_bool(keys::IS_AUTHENTICATED));

        let reloaded = AppState::new(store);
        assert_eq!(reloaded.current_flow(), Flow::Main);
    }

    #[test]
    fn authenticated_without_onboarding_stays_in_onboarding() {
        let store = MemoryFlagStore::new().with(keys::IS_AUTHENTICATED, true);
        let state = AppState::new(Arc::new(store));
        assert_eq!(state.current_flow(), Flow::Onboarding);
    }

    struct FailingStore;

    impl FlagStore for FailingStore {
        fn get_bool(&self, _key: &str) -> bool {
            false
        }

        fn set_bool(&self, key: &str, _value: bool) -> Result<(), CoreError> {
            Err(CoreError::Persistence {
                key: key.into(),
                reason: "read-only".into(),
            })
        }
    }

    #[test]
    fn persistence_failure_keeps_memory_value() {
        let mut state = AppState::new(Arc::new(FailingStore));
        state.complete_onboarding();
        assert_eq!(state.current_flow(), Flow::Auth);
    }

    #[tokio::test]
    async fn subscribers_see_flow_changes_only() {
        let mut state = fresh();
        let mut stream = state.subscribe();
        state.complete_onboarding();
        assert_eq!(stream.changed().await.unwrap(), Flow::Auth);

        // Logging out while already in auth publishes nothing new.
        state.logout();
        assert!(!stream.has_changed());
    }
}
