// ── Navigation container ──
//
// Pairs a root screen with a fresh `Router`, and is the single place that
// knows which screen each `Route` resolves to.

use std::fmt;

use serde::Serialize;

use super::{Route, Router};
use crate::model::RecordId;

/// Concrete screens a presentation layer can draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Onboarding,
    Welcome,
    PhoneLogin,
    #[serde(rename = "oauth_login")]
    OAuthLogin,
    OtpVerification { phone_display: String },
    Home,
    UserDetail { card: RecordId },
    ChatThread { partner: String },
    ProfileEdit,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Onboarding => f.write_str("Onboarding"),
            Self::Welcome => f.write_str("Welcome"),
            Self::PhoneLogin => f.write_str("Phone Verification"),
            Self::OAuthLogin => f.write_str("Sign In"),
            Self::OtpVerification { phone_display } => write!(f, "Verify {phone_display}"),
            Self::Home => f.write_str("Find Match"),
            Self::UserDetail { card } => write!(f, "Profile {}", card.short()),
            Self::ChatThread { partner } => write!(f, "Chat with {partner}"),
            Self::ProfileEdit => f.write_str("Edit Profile"),
        }
    }
}

/// Root screen plus the navigation stack layered on top of it.
pub struct NavigationContainer {
    root: Screen,
    router: Router,
}

impl NavigationContainer {
    pub fn new(root: Screen) -> Self {
        Self {
            root,
            router: Router::new(),
        }
    }

    pub fn root(&self) -> &Screen {
        &self.root
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    /// Map a route to the screen that renders it.
    pub fn destination(route: &Route) -> Screen {
        match route {
            Route::Welcome => Screen::Welcome,
            Route::Dashboard => Screen::Home,
            Route::PhoneLogin => Screen::PhoneLogin,
            Route::OAuthLogin => Screen::OAuthLogin,
            Route::OtpVerification { phone } => Screen::OtpVerification {
                phone_display: phone.clone(),
            },
            Route::UserDetail { card } => Screen::UserDetail { card: card.clone() },
            Route::ChatThread { partner } => Screen::ChatThread {
                partner: partner.clone(),
            },
            Route::ProfileEdit => Screen::ProfileEdit,
        }
    }

    /// The screen currently on top: the last pushed destination, or the root.
    pub fn visible_screen(&self) -> Screen {
        self.router
            .top()
            .map_or_else(|| self.root.clone(), Self::destination)
    }
}
