use tracing::debug;

use crate::model::{AuthMethod, AuthenticationState, CountryCode};
use crate::services::AuthProvider;
use crate::validation::{sanitize_digits, validate_phone};

/// Drives the phone/OTP and OAuth login screens.
pub struct AuthenticationViewModel<A: AuthProvider> {
    provider: A,
    state: AuthenticationState,
    is_loading: bool,
    error_message: Option<String>,
}

impl<A: AuthProvider> AuthenticationViewModel<A> {
    pub fn new(provider: A) -> Self {
        Self {
            provider,
            state: AuthenticationState::default(),
            is_loading: false,
            error_message: None,
        }
    }

    pub fn state(&self) -> &AuthenticationState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Store the dialled number for `country` from free-form input.
    /// Returns whether the local part is a plausible phone number.
    pub fn set_phone(&mut self, country: CountryCode, raw: &str) -> bool {
        let digits = sanitize_digits(raw);
        let valid = validate_phone(&digits);
        self.state.phone_number = format!("{}{digits}", country.dial());
        self.state.auth_method = Some(AuthMethod::Phone);
        valid
    }

    pub async fn send_otp(&mut self) -> bool {
        self.error_message = None;
        self.is_loading = true;
        let result = self.provider.send_otp(&self.state.phone_number).await;
        self.is_loading = false;

        match result {
            Ok(sent) => {
                self.state.otp_code_sent = sent;
                sent
            }
            Err(err) => {
                self.error_message = Some(err.display_message());
                false
            }
        }
    }

    /// Verify `code`. Any non-empty code the provider accepts signs in.
    pub async fn verify_otp(&mut self, code: &str) -> bool {
        self.state.set_otp_code(code);
        self.error_message = None;
        self.is_loading = true;
        let result = self.provider.verify_otp(self.state.otp_code_str()).await;
        self.is_loading = false;

        match result {
            Ok(ok) => {
                self.state.is_authenticated = ok && !self.state.otp_code_str().is_empty();
                debug!(authenticated = self.state.is_authenticated, "otp verified");
                self.state.is_authenticated
            }
            Err(err) => {
                self.error_message = Some(err.display_message());
                false
            }
        }
    }

    pub async fn sign_in_with_oauth(&mut self, provider: &str) -> bool {
        self.error_message = None;
        self.is_loading = true;
        self.state.auth_method = Some(AuthMethod::OAuth);
        let result = self.provider.sign_in_with_oauth(provider).await;
        self.is_loading = false;

        match result {
            Ok(ok) => {
                self.state.is_authenticated = ok;
                ok
            }
            Err(err) => {
                self.error_message = Some(err.display_message());
                false
            }
        }
    }

    pub fn sign_out(&mut self) {
        self.state = AuthenticationState::default();
    }
}
