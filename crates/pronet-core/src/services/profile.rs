use tracing::debug;
use url::Url;

use super::ProfileSource;
use crate::config::MockLatency;
use crate::error::CoreError;
use crate::model::{Friend, RecordId, UserProfile};

fn profile(name: &str, headline: &str, city: &str, avatar: &str) -> UserProfile {
    UserProfile {
        id: RecordId::from(name.to_lowercase().replace(' ', "-")),
        full_name: name.into(),
        headline: headline.into(),
        city: Some(city.into()),
        image_url: Url::parse(avatar).ok(),
        ..UserProfile::default()
    }
}

/// Public profiles other users can be shown.
pub fn sample_profiles() -> Vec<UserProfile> {
    let mut lead = profile(
        "Ethan Carter",
        "Product Lead at Northwind",
        "Seattle",
        "https://images.unsplash.com/photo-1552053831-71594a27632d?w=400&q=60",
    );
    lead.age = Some(31);
    lead.country = Some("USA".into());
    lead.bio = "Building teams that ship. Happy to talk roadmaps and hiring.".into();
    lead.is_verified = true;
    lead.interests = vec!["Product".into(), "Mentoring".into(), "Cycling".into()];
    lead.looking_for = vec!["Co-founder".into(), "Mentee".into()];

    vec![
        lead,
        profile(
            "Ava Johnson",
            "Talent Partner",
            "Austin",
            "https://images.unsplash.com/photo-1544723795-3fb6469f5b39?w=400&q=60",
        ),
        profile(
            "Liam Nguyen",
            "Data Engineer",
            "San Francisco",
            "https://images.unsplash.com/photo-1527980965255-d3b416303d12?w=400&q=60",
        ),
        profile(
            "Priya Mehta",
            "Growth Marketer",
            "New York",
            "https://images.unsplash.com/photo-1531123414780-f742e8c2d21a?w=400&q=60",
        ),
    ]
}

/// Serves a fixed "Sample" own-profile and the sample public profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProfileSource {
    latency: MockLatency,
}

impl MockProfileSource {
    pub fn new(latency: MockLatency) -> Self {
        Self { latency }
    }
}

impl ProfileSource for MockProfileSource {
    async fn fetch_profile(&self) -> Result<UserProfile, CoreError> {
        self.latency.wait().await;
        Ok(UserProfile::named("Sample"))
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<bool, CoreError> {
        self.latency.wait().await;
        debug!(id = %profile.id, "profile saved");
        Ok(true)
    }

    /// Look up by id or name; unknown ids get the first sample. Friends
    /// are filled from the next three samples.
    async fn load_other_profile(&self, user_id: &str) -> Result<UserProfile, CoreError> {
        self.latency.wait().await;
        let samples = sample_profiles();
        let mut found = samples
            .iter()
            .find(|p| p.id.to_string() == user_id || p.full_name.eq_ignore_ascii_case(user_id))
            .or_else(|| samples.first())
            .cloned()
            .unwrap_or_default();

        found.friends = samples
            .iter()
            .filter(|p| p.id != found.id)
            .take(3)
            .map(|p| Friend {
                id: p.id.clone(),
                name: p.full_name.clone(),
                avatar_url: p.image_url.clone(),
            })
            .collect();
        Ok(found)
    }
}
