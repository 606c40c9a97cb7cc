// ── Domain model ──
//
// Plain records shared by the deck controller, the mock collaborators
// and the view-models. All are serde-serialisable so hosts can render
// them as JSON/YAML.

pub mod auth;
pub mod card;
pub mod chat;
pub mod notification;
pub mod onboarding;
pub mod profile;
pub mod record_id;
pub mod tab;

pub use auth::{AuthMethod, AuthenticationState, CountryCode};
pub use card::{Card, SwipeAction};
pub use chat::{ChatMessage, Conversation};
pub use notification::{AppNotification, NotificationFilter, NotificationKind};
pub use onboarding::OnboardingSlide;
pub use profile::{Friend, UserProfile};
pub use record_id::RecordId;
pub use tab::TabItem;
