// ── Discovery cards ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use url::Url;

use super::RecordId;

/// A candidate shown in the discovery deck. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    pub location: String,
    /// Headline tag or industry shown on the card face.
    pub tag: String,
    pub image_url: Option<Url>,
    #[serde(default)]
    pub photos: Vec<Url>,

    // Detail fields
    pub bio: String,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<u32>,
    pub relationship_status: Option<String>,
    pub ethnicity: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub looking_for: Vec<String>,
    #[serde(default)]
    pub friends: Vec<Url>,
}

impl Card {
    /// "Name, age" as printed on the card face.
    pub fn title(&self) -> String {
        format!("{}, {}", self.name, self.age)
    }
}

/// The user's verdict on the top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Pass,
}
