// ── User profiles ──

use serde::{Deserialize, Serialize};
use url::Url;

use super::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: RecordId,

    // Core
    pub full_name: String,
    pub age: Option<u32>,
    pub headline: String,
    pub bio: String,
    pub image_url: Option<Url>,
    pub is_verified: bool,

    // Location
    pub city: Option<String>,
    pub country: Option<String>,

    // Basics
    pub height_cm: Option<u32>,
    pub weight_kg: Option<u32>,
    pub relationship_status: Option<String>,
    pub ethnicity: Option<String>,

    pub friends: Vec<Friend>,
    pub interests: Vec<String>,
    pub looking_for: Vec<String>,
}

impl UserProfile {
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }

    /// "City, Country" with whichever halves are present.
    pub fn location(&self) -> Option<String> {
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: RecordId,
    pub name: String,
    pub avatar_url: Option<Url>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_joins_present_parts() {
        let mut p = UserProfile::named("Sample");
        assert_eq!(p.location(), None);
        p.city = Some("Dhaka".into());
        assert_eq!(p.location().as_deref(), Some("Dhaka"));
        p.country = Some("Bangladesh".into());
        assert_eq!(p.location().as_deref(), Some("Dhaka, Bangladesh"));
    }
}
