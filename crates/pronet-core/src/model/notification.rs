// ── Notifications ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Message,
    Match,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppNotification {
    pub id: RecordId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub unread: bool,
}

impl AppNotification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        time: impl Into<String>,
        unread: bool,
    ) -> Self {
        Self {
            id: RecordId::new(),
            kind,
            title: title.into(),
            message: message.into(),
            time: time.into(),
            unread,
        }
    }
}

/// Segmented filter on the notifications screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFilter {
    #[default]
    All,
    Messages,
    Matches,
    System,
}

impl NotificationFilter {
    pub fn admits(self, notification: &AppNotification) -> bool {
        match self {
            Self::All => true,
            Self::Messages => notification.kind == NotificationKind::Message,
            Self::Matches => notification.kind == NotificationKind::Match,
            Self::System => notification.kind == NotificationKind::System,
        }
    }
}
