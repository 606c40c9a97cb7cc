use crate::model::{AppNotification, NotificationFilter};
use crate::services::NotificationSource;

pub struct NotificationsViewModel<S: NotificationSource> {
    source: S,
    items: Vec<AppNotification>,
    filter: NotificationFilter,
    is_loading: bool,
    error_message: Option<String>,
}

impl<S: NotificationSource> NotificationsViewModel<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            items: Vec::new(),
            filter: NotificationFilter::All,
            is_loading: false,
            error_message: None,
        }
    }

    pub fn items(&self) -> &[AppNotification] {
        &self.items
    }

    pub fn filter(&self) -> NotificationFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: NotificationFilter) {
        self.filter = filter;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub async fn load(&mut self) {
        self.error_message = None;
        self.is_loading = true;
        let result = self.source.fetch_all().await;
        self.is_loading = false;

        match result {
            Ok(items) => self.items = items,
            Err(err) => self.error_message = Some(err.display_message()),
        }
    }

    /// Items admitted by the current filter, in source order.
    pub fn filtered(&self) -> impl Iterator<Item = &AppNotification> {
        let filter = self.filter;
        self.items.iter().filter(move |n| filter.admits(n))
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| n.unread).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockLatency;
    use crate::model::NotificationKind;
    use crate::services::MockNotificationSource;

    #[tokio::test]
    async fn filter_by_kind() {
        let mut vm = NotificationsViewModel::new(MockNotificationSource::new(MockLatency::NONE));
        vm.load().await;
        assert_eq!(vm.filtered().count(), 3);

        vm.set_filter(NotificationFilter::Matches);
        let kinds: Vec<_> = vm.filtered().map(|n| n.kind).collect();
        assert_eq!(kinds, [NotificationKind::Match]);
        assert!(vm.unread_count() > 0);
    }
}
