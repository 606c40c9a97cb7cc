use super::NotificationSource;
use crate::config::MockLatency;
use crate::error::CoreError;
use crate::model::{AppNotification, NotificationKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct MockNotificationSource {
    latency: MockLatency,
}

impl MockNotificationSource {
    pub fn new(latency: MockLatency) -> Self {
        Self { latency }
    }
}

impl NotificationSource for MockNotificationSource {
    async fn fetch_all(&self) -> Result<Vec<AppNotification>, CoreError> {
        self.latency.wait().await;
        Ok(vec![
            AppNotification::new(
                NotificationKind::Message,
                "New message",
                "Ethan: Can we meet tomorrow at 11 AM?",
                "2m ago",
                true,
            ),
            AppNotification::new(
                NotificationKind::Match,
                "New match",
                "You matched with Ava Johnson. Say hello and share your profile.",
                "1h ago",
                true,
            ),
            AppNotification::new(
                NotificationKind::System,
                "Profile verified",
                "Your identity was verified. You now have a verified badge.",
                "Yesterday",
                false,
            ),
        ])
    }
}
