// ── Collaborator contracts ──
//
// The surrounding app talks to these through traits so a real backend
// can replace the in-memory mocks. Every mock waits a fixed
// `MockLatency` and then returns canned data; none of them feed back
// into the deck controller, the router or the app state.

mod auth;
mod chats;
mod notifications;
mod onboarding;
mod profile;

use std::future::Future;

pub use auth::MockAuthProvider;
pub use chats::{MockChatThreadSource, MockConversationSource};
pub use notifications::MockNotificationSource;
pub use onboarding::{MockOnboardingService, OnboardingOutcome};
pub use profile::{MockProfileSource, sample_profiles};

use crate::error::CoreError;
use crate::model::{AppNotification, ChatMessage, Conversation, UserProfile};

/// Phone/OTP and OAuth sign-in.
pub trait AuthProvider: Send + Sync {
    fn send_otp(&self, phone: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn verify_otp(&self, code: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn sign_in_with_oauth(
        &self,
        provider: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Filterable list of conversation summaries.
pub trait ConversationSource: Send + Sync {
    fn fetch_conversations(
        &self,
        query: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Conversation>, CoreError>> + Send;
}

/// Messages exchanged with one partner.
pub trait ChatThreadSource: Send + Sync {
    fn load_thread(
        &self,
        partner: &str,
    ) -> impl Future<Output = Result<Vec<ChatMessage>, CoreError>> + Send;

    fn send(
        &self,
        text: &str,
        partner: &str,
    ) -> impl Future<Output = Result<ChatMessage, CoreError>> + Send;
}

/// Flat list of notification records.
pub trait NotificationSource: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<AppNotification>, CoreError>> + Send;
}

/// The signed-in user's profile and other users' public profiles.
pub trait ProfileSource: Send + Sync {
    fn fetch_profile(&self) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn save_profile(
        &self,
        profile: &UserProfile,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn load_other_profile(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}

/// Server-side acknowledgement that onboarding finished.
pub trait OnboardingService: Send + Sync {
    fn perform_onboarding(&self) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
