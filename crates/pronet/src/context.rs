//! Per-invocation state: the composition root plus the mock collaborators
//! built from the loaded configuration.

use pronet_core::services::{
    MockAuthProvider, MockChatThreadSource, MockConversationSource, MockNotificationSource,
    MockOnboardingService, MockProfileSource, OnboardingOutcome,
};
use pronet_core::{AppRoot, CoreConfig, DeckConfig, Flow};

use crate::cli::GlobalOpts;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub struct Context {
    pub app: AppRoot,
    pub core: CoreConfig,
    pub color: bool,
}

impl Context {
    pub fn build(global: &GlobalOpts, cfg: &Config) -> Result<Self, CliError> {
        let store = config::open_store(global, cfg)?;
        let core = cfg.to_core_config();
        Ok(Self {
            app: AppRoot::from_config(store, &core),
            core,
            color: output::should_color(&global.color_mode()),
        })
    }

    pub fn flow(&self) -> Flow {
        self.app.flow()
    }

    /// Fail with a pointer to the next step unless the app is in `expected`.
    pub fn require_flow(&self, command: &str, expected: Flow) -> Result<(), CliError> {
        let flow = self.flow();
        if flow == expected {
            return Ok(());
        }
        let next_step = match flow {
            Flow::Onboarding => "onboarding complete",
            Flow::Auth => "auth verify <code>",
            Flow::Main => "auth logout",
        };
        Err(CliError::WrongFlow {
            command: command.into(),
            flow: flow.to_string(),
            next_step: next_step.into(),
        })
    }

    pub fn deck_config(&self) -> DeckConfig {
        self.core.deck
    }

    // ── Collaborators ────────────────────────────────────────────────

    pub fn auth_provider(&self) -> MockAuthProvider {
        MockAuthProvider::new(self.core.latency)
    }

    pub fn onboarding_service(&self, outcome: OnboardingOutcome) -> MockOnboardingService {
        MockOnboardingService::new(self.core.latency, outcome)
    }

    pub fn conversations(&self) -> MockConversationSource {
        MockConversationSource::new(self.core.latency)
    }

    pub fn chat_threads(&self) -> MockChatThreadSource {
        MockChatThreadSource::new(self.core.latency)
    }

    pub fn notifications(&self) -> MockNotificationSource {
        MockNotificationSource::new(self.core.latency)
    }

    pub fn profiles(&self) -> MockProfileSource {
        MockProfileSource::new(self.core.latency)
    }
}
