// ── Navigable destinations ──

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::RecordId;

/// Every screen that can be pushed onto a navigation stack.
///
/// Each variant carries only what its destination needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    // Auth
    Welcome,
    PhoneLogin,
    #[serde(rename = "oauth_login")]
    OAuthLogin,
    OtpVerification { phone: String },

    // Main
    Dashboard,
    UserDetail { card: RecordId },
    ChatThread { partner: String },
    ProfileEdit,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome => f.write_str("welcome"),
            Self::PhoneLogin => f.write_str("phone-login"),
            Self::OAuthLogin => f.write_str("oauth-login"),
            Self::OtpVerification { phone } => write!(f, "otp-verification({phone})"),
            Self::Dashboard => f.write_str("dashboard"),
            Self::UserDetail { card } => write!(f, "user-detail({})", card.short()),
            Self::ChatThread { partner } => write!(f, "chat-thread({partner})"),
            Self::ProfileEdit => f.write_str("profile-edit"),
        }
    }
}
