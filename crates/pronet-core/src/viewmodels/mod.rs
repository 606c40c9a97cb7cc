// ── Screen view-models ──
//
// Each view-model owns the transient state of one screen (loading flag,
// inline error message, form input) and talks to its collaborator
// through the traits in `services`. Collaborator errors are reduced to a
// display string; nothing here touches the app flow directly.

mod auth;
mod chat_thread;
mod chats;
mod notifications;
mod onboarding;
mod otp;
mod profile;

pub use auth::AuthenticationViewModel;
pub use chat_thread::ChatThreadViewModel;
pub use chats::ChatsListViewModel;
pub use notifications::NotificationsViewModel;
pub use onboarding::{OnboardingPager, OnboardingViewModel, PagerStep};
pub use otp::{OTP_LENGTH, OtpEntry, ResendCountdown};
pub use profile::ProfileViewModel;
