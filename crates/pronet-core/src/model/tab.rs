// ── Main-flow tabs ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tabs of the main shell, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabItem {
    #[default]
    Home,
    Messages,
    Notifications,
    Profile,
}

impl TabItem {
    pub const ALL: [TabItem; 4] = [Self::Home, Self::Messages, Self::Notifications, Self::Profile];

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Messages => "Messages",
            Self::Notifications => "Notifications",
            Self::Profile => "Profiles",
        }
    }

    /// Next tab (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for TabItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps() {
        assert_eq!(TabItem::Home.next(), TabItem::Messages);
        assert_eq!(TabItem::Profile.next(), TabItem::Home);
    }

    #[test]
    fn profile_tab_title_is_plural() {
        assert_eq!(TabItem::Profile.to_string(), "Profiles");
    }
}
