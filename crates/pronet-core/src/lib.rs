// pronet-core: Headless client core between the collaborators and a presentation layer.

pub mod app;
pub mod app_state;
pub mod config;
pub mod discovery;
pub mod error;
pub mod model;
pub mod routing;
pub mod services;
pub mod store;
pub mod stream;
pub mod validation;
pub mod viewmodels;

// ── Primary re-exports ──────────────────────────────────────────────
pub use app::AppRoot;
pub use app_state::{AppState, Flow};
pub use config::{ConsumptionPolicy, CoreConfig, DailyLimit, DeckConfig, MockLatency};
pub use discovery::{DeckSnapshot, DeckStatus, DiscoveryViewModel, SwipeOutcome};
pub use error::CoreError;
pub use routing::{NavigationContainer, NavigationPath, Route, Router, Screen};
pub use store::{FileFlagStore, FlagStore, MemoryFlagStore};
pub use stream::StateStream;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Discovery
    Card, SwipeAction,
    // Messaging
    AppNotification, ChatMessage, Conversation, NotificationFilter, NotificationKind,
    // Accounts
    AuthMethod, AuthenticationState, CountryCode, Friend, UserProfile,
    // Supporting types
    OnboardingSlide, RecordId, TabItem,
};
