// ── Canned discovery deck ──

use url::Url;

use crate::model::{Card, RecordId};

fn url(raw: &str) -> Option<Url> {
    Url::parse(raw).ok()
}

fn urls(raw: &[&str]) -> Vec<Url> {
    raw.iter().filter_map(|r| url(r)).collect()
}

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_owned()).collect()
}

const FRIEND_1: &str = "https://images.unsplash.com/photo-1552053831-71594a27632d?w=200&q=60";
const FRIEND_2: &str = "https://images.unsplash.com/photo-1544723795-3fb6469f5b39?w=200&q=60";
const FRIEND_3: &str = "https://images.unsplash.com/photo-1527980965255-d3b416303d12?w=200&q=60";
const FRIEND_4: &str = "https://images.unsplash.com/photo-1531123414780-f742e8c2d21a?w=200&q=60";

/// The three sample candidates every fresh deck starts from.
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card {
            id: RecordId::new(),
            name: "Herman West".into(),
            age: 20,
            location: "Seattle, USA".into(),
            tag: "Versatile".into(),
            image_url: url("https://images.unsplash.com/photo-1503342217505-b0a15cf70489?w=1200&q=80"),
            photos: Vec::new(),
            bio: "My name is Herman and I enjoy meeting new people and finding ways to help them \
                  have an uplifting experience. I enjoy reading, and the knowledge…"
                .into(),
            height_cm: Some(172),
            weight_kg: Some(75),
            relationship_status: Some("Single".into()),
            ethnicity: Some("Asian".into()),
            interests: strings(&["Guitar", "Music", "Fishing", "Swimming", "Book", "Dancing"]),
            looking_for: strings(&["Friend", "Soul Mate", "Marriage"]),
            friends: urls(&[FRIEND_1, FRIEND_2, FRIEND_3, FRIEND_4]),
        },
        Card {
            id: RecordId::new(),
            name: "Julia Park".into(),
            age: 24,
            location: "San Francisco, USA".into(),
            tag: "Designer".into(),
            image_url: url("https://images.unsplash.com/photo-1508214751196-bcfd4ca60f91?w=1200&q=80"),
            photos: Vec::new(),
            bio: "Product designer who loves hiking and cooking.".into(),
            height_cm: Some(165),
            weight_kg: Some(56),
            relationship_status: Some("Single".into()),
            ethnicity: Some("Korean".into()),
            interests: strings(&["Hiking", "Coffee", "Art", "Photography"]),
            looking_for: strings(&["Friend", "Dating"]),
            friends: urls(&[FRIEND_2, FRIEND_3]),
        },
        Card {
            id: RecordId::new(),
            name: "John Carter".into(),
            age: 22,
            location: "Austin, USA".into(),
            tag: "Athletic".into(),
            image_url: url("https://images.unsplash.com/photo-1519340247619-8e3f06eb8f91?w=1200&q=80"),
            photos: Vec::new(),
            bio: "Runner and weekend traveler. Building an indie app on the side.".into(),
            height_cm: Some(180),
            weight_kg: Some(78),
            relationship_status: Some("Single".into()),
            ethnicity: Some("Caucasian".into()),
            interests: strings(&["Running", "Travel", "Tech"]),
            looking_for: strings(&["Dating"]),
            friends: urls(&[FRIEND_1, FRIEND_4]),
        },
    ]
}
