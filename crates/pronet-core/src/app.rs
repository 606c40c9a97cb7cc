// ── Composition root ──
//
// Owns the injected app state and deck controller, and mounts one
// navigation container per flow. A flow change always replaces the
// container, so every flow starts with an empty stack.

use std::sync::Arc;

use tracing::debug;

use crate::app_state::{AppState, Flow};
use crate::config::CoreConfig;
use crate::discovery::DiscoveryViewModel;
use crate::model::TabItem;
use crate::routing::{NavigationContainer, Route, Screen};
use crate::store::FlagStore;

pub struct AppRoot {
    app_state: AppState,
    flow: Flow,
    container: NavigationContainer,
    discovery: DiscoveryViewModel,
    selected_tab: TabItem,
}

impl AppRoot {
    pub fn new(app_state: AppState, discovery: DiscoveryViewModel) -> Self {
        let flow = app_state.current_flow();
        Self {
            app_state,
            flow,
            container: NavigationContainer::new(Self::root_screen(flow)),
            discovery,
            selected_tab: TabItem::default(),
        }
    }

    /// Build from a flag store and the sample deck configured by `config`.
    pub fn from_config(store: Arc<dyn FlagStore>, config: &CoreConfig) -> Self {
        Self::new(
            AppState::new(store),
            DiscoveryViewModel::with_sample_cards(config.deck),
        )
    }

    /// Root screen mounted for each flow.
    pub fn root_screen(flow: Flow) -> Screen {
        match flow {
            Flow::Onboarding => Screen::Onboarding,
            Flow::Auth => Screen::Welcome,
            Flow::Main => Screen::Home,
        }
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Mutate the app state, then remount if the flow changed.
    /// Returns whether a remount happened.
    pub fn update_app_state(&mut self, f: impl FnOnce(&mut AppState)) -> bool {
        f(&mut self.app_state);
        self.sync()
    }

    pub fn complete_onboarding(&mut self) -> bool {
        self.update_app_state(AppState::complete_onboarding)
    }

    pub fn login_succeeded(&mut self) -> bool {
        self.update_app_state(AppState::login_succeeded)
    }

    pub fn logout(&mut self) -> bool {
        self.update_app_state(AppState::logout)
    }

    /// Re-read the flow and mount a fresh container if it differs.
    pub fn sync(&mut self) -> bool {
        let flow = self.app_state.current_flow();
        if flow == self.flow {
            return false;
        }
        debug!(from = %self.flow, to = %flow, "flow changed; remounting");
        self.flow = flow;
        self.container = NavigationContainer::new(Self::root_screen(flow));
        self.selected_tab = TabItem::default();
        true
    }

    pub fn container(&self) -> &NavigationContainer {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut NavigationContainer {
        &mut self.container
    }

    pub fn navigate(&mut self, route: Route) {
        self.container.router_mut().push(route);
    }

    pub fn back(&mut self) {
        self.container.router_mut().pop();
    }

    pub fn visible_screen(&self) -> Screen {
        self.container.visible_screen()
    }

    pub fn discovery(&self) -> &DiscoveryViewModel {
        &self.discovery
    }

    pub fn discovery_mut(&mut self) -> &mut DiscoveryViewModel {
        &mut self.discovery
    }

    pub fn selected_tab(&self) -> TabItem {
        self.selected_tab
    }

    pub fn select_tab(&mut self, tab: TabItem) {
        self.selected_tab = tab;
    }
}
