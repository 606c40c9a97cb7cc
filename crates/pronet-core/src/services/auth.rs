use tracing::debug;

use super::AuthProvider;
use crate::config::MockLatency;
use crate::error::CoreError;

/// Accepts every phone number and any non-empty code.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAuthProvider {
    latency: MockLatency,
}

impl MockAuthProvider {
    pub fn new(latency: MockLatency) -> Self {
        Self { latency }
    }
}

impl AuthProvider for MockAuthProvider {
    async fn send_otp(&self, phone: &str) -> Result<bool, CoreError> {
        self.latency.wait().await;
        debug!(phone, "otp sent");
        Ok(true)
    }

    async fn verify_otp(&self, code: &str) -> Result<bool, CoreError> {
        self.latency.wait().await;
        Ok(!code.is_empty())
    }

    async fn sign_in_with_oauth(&self, provider: &str) -> Result<bool, CoreError> {
        self.latency.wait().await;
        debug!(provider, "oauth sign-in");
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn resolves_after_latency() {
        let auth = MockAuthProvider::new(MockLatency::from_millis(200));
        let start = tokio::time::Instant::now();
        assert!(auth.send_otp("+15551234567").await.unwrap());
        assert!(start.elapsed() >= std::time::Duration::from_millis(200));
    }

    #[tokio::test]
    async fn empty_code_fails_verification() {
        let auth = MockAuthProvider::new(MockLatency::NONE);
        assert!(!auth.verify_otp("").await.unwrap());
        assert!(auth.verify_otp("123456").await.unwrap());
    }
}
