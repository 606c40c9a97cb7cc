use tracing::debug;

use super::{ChatThreadSource, ConversationSource};
use crate::config::MockLatency;
use crate::error::CoreError;
use crate::model::{ChatMessage, Conversation};

fn sample_conversations() -> Vec<Conversation> {
    vec![
        Conversation::new("Ethan Carter", "Let's finalize the deck by tomorrow.", "9:12 AM", 2),
        Conversation::new("Ava Johnson", "Thanks for the referral.", "Yesterday", 0),
        Conversation::new("Liam Nguyen", "Shared the profile PDF.", "Mon", 1),
        Conversation::new("Priya Mehta", "Call at 6 PM works.", "Sun", 0),
    ]
}

/// Four canned conversations, filtered on name or last message.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockConversationSource {
    latency: MockLatency,
}

impl MockConversationSource {
    pub fn new(latency: MockLatency) -> Self {
        Self { latency }
    }
}

impl ConversationSource for MockConversationSource {
    async fn fetch_conversations(&self, query: Option<&str>) -> Result<Vec<Conversation>, CoreError> {
        self.latency.wait().await;
        let base = sample_conversations();
        Ok(match query {
            Some(q) if !q.is_empty() => base.into_iter().filter(|c| c.matches(q)).collect(),
            _ => base,
        })
    }
}

/// Same three-message thread for every partner; sends echo back as "Now".
#[derive(Debug, Clone, Copy, Default)]
pub struct MockChatThreadSource {
    latency: MockLatency,
}

impl MockChatThreadSource {
    pub fn new(latency: MockLatency) -> Self {
        Self { latency }
    }
}

impl ChatThreadSource for MockChatThreadSource {
    async fn load_thread(&self, partner: &str) -> Result<Vec<ChatMessage>, CoreError> {
        self.latency.wait().await;
        debug!(partner, "thread loaded");
        Ok(vec![
            ChatMessage::new("Hi, thanks for connecting!", "10:02 AM", false),
            ChatMessage::new(
                "Likewise. Are you available for a quick call tomorrow?",
                "10:05 AM",
                true,
            ),
            ChatMessage::new("Yes, after 4 PM works well.", "10:06 AM", false),
        ])
    }

    async fn send(&self, text: &str, partner: &str) -> Result<ChatMessage, CoreError> {
        self.latency.wait().await;
        debug!(partner, len = text.len(), "message sent");
        Ok(ChatMessage::new(text, "Now", true))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_query_returns_everything() {
        let src = MockConversationSource::new(MockLatency::NONE);
        assert_eq!(src.fetch_conversations(None).await.unwrap().len(), 4);
        assert_eq!(src.fetch_conversations(Some("")).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn query_filters_name_and_message() {
        let src = MockConversationSource::new(MockLatency::NONE);
        let hits = src.fetch_conversations(Some("pdf")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].partner_name, "Liam Nguyen");

        let hits = src.fetch_conversations(Some("PRIYA")).await.unwrap();
        assert_eq!(hits[0].partner_name, "Priya Mehta");
    }

    #[tokio::test]
    async fn send_echoes_as_now() {
        let src = MockChatThreadSource::new(MockLatency::NONE);
        let msg = src.send("hello", "Ava").await.unwrap();
        assert_eq!(msg.time, "Now");
        assert!(msg.is_me);
    }
}
