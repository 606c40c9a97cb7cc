// ── Conversations and messages ──

use serde::{Deserialize, Serialize};

use super::RecordId;

/// One row of the conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: RecordId,
    pub partner_name: String,
    pub last_message: String,
    /// Pre-formatted display time ("9:12 AM", "Yesterday").
    pub time: String,
    pub unread_count: u32,
}

impl Conversation {
    pub fn new(
        partner_name: impl Into<String>,
        last_message: impl Into<String>,
        time: impl Into<String>,
        unread_count: u32,
    ) -> Self {
        Self {
            id: RecordId::new(),
            partner_name: partner_name.into(),
            last_message: last_message.into(),
            time: time.into(),
            unread_count,
        }
    }

    /// Case-insensitive match on partner name or last message.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.partner_name.to_lowercase().contains(&q)
            || self.last_message.to_lowercase().contains(&q)
    }
}

/// A single bubble in a chat thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: RecordId,
    pub text: String,
    pub time: String,
    /// Sent by the local user.
    pub is_me: bool,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, time: impl Into<String>, is_me: bool) -> Self {
        Self {
            id: RecordId::new(),
            text: text.into(),
            time: time.into(),
            is_me,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_matches_name_or_message() {
        let c = Conversation::new("Ava Johnson", "Thanks for the referral.", "Yesterday", 0);
        assert!(c.matches("ava"));
        assert!(c.matches("REFERRAL"));
        assert!(!c.matches("priya"));
    }
}
