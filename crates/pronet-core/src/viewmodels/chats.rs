use crate::model::Conversation;
use crate::services::ConversationSource;

/// Conversation list with a search box.
pub struct ChatsListViewModel<S: ConversationSource> {
    source: S,
    search_text: String,
    conversations: Vec<Conversation>,
    is_loading: bool,
    error_message: Option<String>,
}

impl<S: ConversationSource> ChatsListViewModel<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            search_text: String::new(),
            conversations: Vec::new(),
            is_loading: false,
            error_message: None,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Fetch conversations, filtered by the search text when it is not blank.
    pub async fn load(&mut self) {
        self.error_message = None;
        self.is_loading = true;
        let query = self.search_text.trim();
        let query = (!query.is_empty()).then_some(query);
        let result = self.source.fetch_conversations(query).await;
        self.is_loading = false;

        match result {
            Ok(list) => self.conversations = list,
            Err(err) => self.error_message = Some(err.display_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockLatency;
    use crate::services::MockConversationSource;

    #[tokio::test]
    async fn blank_search_loads_everything() {
        let mut vm = ChatsListViewModel::new(MockConversationSource::new(MockLatency::NONE));
        vm.set_search_text("   ");
        vm.load().await;
        assert_eq!(vm.conversations().len(), 4);
    }

    #[tokio::test]
    async fn search_narrows_results() {
        let mut vm = ChatsListViewModel::new(MockConversationSource::new(MockLatency::NONE));
        vm.set_search_text("priya");
        vm.load().await;
        let names: Vec<_> = vm.conversations().iter().map(|c| c.partner_name.as_str()).collect();
        assert_eq!(names, ["Priya Mehta"]);
    }
}
