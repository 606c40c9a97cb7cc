use super::OnboardingService;
use crate::config::MockLatency;
use crate::error::CoreError;

/// How the mock onboarding call resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingOutcome {
    #[default]
    Succeed,
    Fail,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockOnboardingService {
    latency: MockLatency,
    outcome: OnboardingOutcome,
}

impl MockOnboardingService {
    pub fn new(latency: MockLatency, outcome: OnboardingOutcome) -> Self {
        Self { latency, outcome }
    }
}

impl OnboardingService for MockOnboardingService {
    async fn perform_onboarding(&self) -> Result<bool, CoreError> {
        self.latency.wait().await;
        match self.outcome {
            OnboardingOutcome::Succeed => Ok(true),
            OnboardingOutcome::Fail => Err(CoreError::BadServerResponse),
        }
    }
}
