// ── OTP entry helpers ──

use crate::validation::sanitize_digits;

/// Number of digits in a one-time code.
pub const OTP_LENGTH: usize = 6;

/// Digits-only code input capped at [`OTP_LENGTH`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpEntry {
    code: String,
}

impl OtpEntry {
    /// Replace the input, dropping non-digits and anything past six digits.
    pub fn set(&mut self, raw: &str) {
        self.code = sanitize_digits(raw).chars().take(OTP_LENGTH).collect();
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Character shown in box `index`, if filled.
    pub fn digit_at(&self, index: usize) -> Option<char> {
        self.code.chars().nth(index)
    }

    /// The verify button is enabled only for a full code.
    pub fn is_complete(&self) -> bool {
        self.code.len() == OTP_LENGTH
    }
}

/// "Resend code in mm:ss" countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendCountdown {
    seconds: u32,
}

impl Default for ResendCountdown {
    fn default() -> Self {
        Self { seconds: 59 }
    }
}

impl ResendCountdown {
    pub fn new(seconds: u32) -> Self {
        Self { seconds }
    }

    /// One-second tick; stops at zero.
    pub fn tick(&mut self) {
        self.seconds = self.seconds.saturating_sub(1);
    }

    pub fn can_resend(self) -> bool {
        self.seconds == 0
    }

    pub fn label(self) -> String {
        format!("{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}
