// ── Onboarding pager ──

use tracing::debug;

use crate::app_state::AppState;
use crate::model::OnboardingSlide;
use crate::services::OnboardingService;

/// Horizontal drag distance, in points, that turns a swipe into a page change.
const SWIPE_THRESHOLD: f32 = 50.0;

/// Result of moving the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerStep {
    /// Now showing the slide at this index.
    Moved(usize),
    /// Already at the boundary; nothing changed.
    Stayed,
    /// Advanced past the last slide; onboarding is complete.
    Completed,
}

/// Slide index over the introduction carousel.
#[derive(Debug, Clone)]
pub struct OnboardingPager {
    slides: Vec<OnboardingSlide>,
    index: usize,
}

impl Default for OnboardingPager {
    fn default() -> Self {
        Self::new(OnboardingSlide::compact())
    }
}

impl OnboardingPager {
    pub fn new(slides: Vec<OnboardingSlide>) -> Self {
        Self { slides, index: 0 }
    }

    pub fn slides(&self) -> &[OnboardingSlide] {
        &self.slides
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&OnboardingSlide> {
        self.slides.get(self.index)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.slides.len()
    }

    /// Advance one slide. On the last slide this marks onboarding complete.
    pub fn next(&mut self, app_state: &mut AppState) -> PagerStep {
        if self.is_last() {
            debug!("onboarding finished from last slide");
            app_state.complete_onboarding();
            return PagerStep::Completed;
        }
        self.index += 1;
        PagerStep::Moved(self.index)
    }

    pub fn previous(&mut self) -> PagerStep {
        if self.index == 0 {
            return PagerStep::Stayed;
        }
        self.index -= 1;
        PagerStep::Moved(self.index)
    }

    /// Interpret a finished drag of `dx` points. A left drag past the
    /// threshold advances without completing; a right drag goes back.
    pub fn swipe(&mut self, dx: f32) -> PagerStep {
        if dx < -SWIPE_THRESHOLD && !self.is_last() {
            self.index += 1;
            PagerStep::Moved(self.index)
        } else if dx > SWIPE_THRESHOLD {
            self.previous()
        } else {
            PagerStep::Stayed
        }
    }
}

/// Wraps the server-side onboarding acknowledgement.
pub struct OnboardingViewModel<S: OnboardingService> {
    service: S,
    is_onboarded: bool,
    is_loading: bool,
    error_message: Option<String>,
}

impl<S: OnboardingService> OnboardingViewModel<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            is_onboarded: false,
            is_loading: false,
            error_message: None,
        }
    }

    pub fn is_onboarded(&self) -> bool {
        self.is_onboarded
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub async fn complete_onboarding(&mut self) -> bool {
        self.error_message = None;
        self.is_loading = true;
        let result = self.service.perform_onboarding().await;
        self.is_loading = false;

        match result {
            Ok(done) => self.is_onboarded = done,
            Err(err) => self.error_message = Some(err.display_message()),
        }
        self.is_onboarded
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::app_state::Flow;
    use crate::config::MockLatency;
    use crate::services::{MockOnboardingService, OnboardingOutcome};
    use crate::store::MemoryFlagStore;

    #[test]
    fn next_on_last_slide_completes_onboarding() {
        let mut state = AppState::new(Arc::new(MemoryFlagStore::new()));
        let mut pager = OnboardingPager::default();

        assert_eq!(pager.next(&mut state), PagerStep::Moved(1));
        assert_eq!(pager.next(&mut state), PagerStep::Moved(2));
        assert!(pager.is_last());
        assert_eq!(state.current_flow(), Flow::Onboarding);

        assert_eq!(pager.next(&mut state), PagerStep::Completed);
        assert_eq!(state.current_flow(), Flow::Auth);
    }

    #[test]
    fn swipe_respects_threshold() {
        let mut pager = OnboardingPager::default();
        assert_eq!(pager.swipe(-30.0), PagerStep::Stayed);
        assert_eq!(pager.swipe(-80.0), PagerStep::Moved(1));
        assert_eq!(pager.swipe(-80.0), PagerStep::Moved(2));
        // Swiping past the end never completes.
        assert_eq!(pager.swipe(-80.0), PagerStep::Stayed);
        assert_eq!(pager.swipe(51.0), PagerStep::Moved(1));
        assert_eq!(pager.previous(), PagerStep::Moved(0));
        assert_eq!(pager.previous(), PagerStep::Stayed);
    }

    #[tokio::test]
    async fn onboarding_service_outcomes() {
        let mut ok = OnboardingViewModel::new(MockOnboardingService::new(
            MockLatency::NONE,
            OnboardingOutcome::Succeed,
        ));
        assert!(ok.complete_onboarding().await);
        assert!(ok.error_message().is_none());

        let mut failing = OnboardingViewModel::new(MockOnboardingService::new(
            MockLatency::NONE,
            OnboardingOutcome::Fail,
        ));
        assert!(!failing.complete_onboarding().await);
        assert!(failing.error_message().is_some());
        assert!(!failing.is_loading());
    }
}
