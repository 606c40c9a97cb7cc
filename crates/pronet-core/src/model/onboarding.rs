// ── Onboarding slides ──

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingSlide {
    /// Name of the animation asset played above the heading.
    pub animation: String,
    pub heading: String,
    pub text: String,
}

impl OnboardingSlide {
    fn new(animation: &str, heading: &str, text: &str) -> Self {
        Self {
            animation: animation.into(),
            heading: heading.into(),
            text: text.into(),
        }
    }

    /// The three-slide introduction shown on first launch.
    pub fn compact() -> Vec<Self> {
        vec![
            Self::new(
                "career_growth_animation",
                "Grow Your Career",
                "Access opportunities, mentorship, and resources tailored to your professional journey.",
            ),
            Self::new(
                "smart_matching_simple",
                "Smart Matching",
                "Find compatible professionals based on location, industry, and career goals.",
            ),
            Self::new(
                "secure_chat_animation",
                "Private Messaging",
                "Chat securely and share documents with your professional matches.",
            ),
        ]
    }
}
