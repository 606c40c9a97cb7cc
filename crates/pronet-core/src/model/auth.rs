// ── Authentication records ──

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    Phone,
    #[strum(serialize = "oauth")]
    OAuth,
}

/// Login progress for one authentication attempt.
///
/// The OTP code is kept as a secret so it never shows up in `Debug`
/// output or trace events.
#[derive(Debug, Clone, Default)]
pub struct AuthenticationState {
    pub is_authenticated: bool,
    pub otp_code_sent: bool,
    pub phone_number: String,
    pub otp_code: Option<SecretString>,
    pub auth_method: Option<AuthMethod>,
}

impl AuthenticationState {
    pub fn otp_code_str(&self) -> &str {
        self.otp_code.as_ref().map_or("", ExposeSecret::expose_secret)
    }

    pub fn set_otp_code(&mut self, code: &str) {
        self.otp_code = (!code.is_empty()).then(|| SecretString::from(code.to_owned()));
    }
}

/// Country dial codes offered by the phone login screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CountryCode {
    #[default]
    Us,
    Gb,
    Bd,
    In,
}

impl CountryCode {
    pub fn dial(self) -> &'static str {
        match self {
            Self::Us => "+1",
            Self::Gb => "+44",
            Self::Bd => "+880",
            Self::In => "+91",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Us => "United States",
            Self::Gb => "United Kingdom",
            Self::Bd => "Bangladesh",
            Self::In => "India",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::Us => "🇺🇸",
            Self::Gb => "🇬🇧",
            Self::Bd => "🇧🇩",
            Self::In => "🇮🇳",
        }
    }
}
