use tracing::debug;

use crate::model::ChatMessage;
use crate::services::ChatThreadSource;

/// One open conversation plus the compose field.
pub struct ChatThreadViewModel<S: ChatThreadSource> {
    source: S,
    partner: String,
    messages: Vec<ChatMessage>,
    input_text: String,
    is_loading: bool,
    is_sending: bool,
    error_message: Option<String>,
}

impl<S: ChatThreadSource> ChatThreadViewModel<S> {
    pub fn new(source: S, partner: impl Into<String>) -> Self {
        Self {
            source,
            partner: partner.into(),
            messages: Vec::new(),
            input_text: String::new(),
            is_loading: false,
            is_sending: false,
            error_message: None,
        }
    }

    pub fn partner(&self) -> &str {
        &self.partner
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_sending(&self) -> bool {
        self.is_sending
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub async fn load(&mut self) {
        self.error_message = None;
        self.is_loading = true;
        let result = self.source.load_thread(&self.partner).await;
        self.is_loading = false;

        match result {
            Ok(messages) => self.messages = messages,
            Err(err) => self.error_message = Some(err.display_message()),
        }
    }

    /// Send the trimmed input. Blank input is ignored; on success the
    /// message is appended and the input cleared.
    pub async fn send(&mut self) -> Option<&ChatMessage> {
        let text = self.input_text.trim().to_owned();
        if text.is_empty() {
            return None;
        }

        self.error_message = None;
        self.is_sending = true;
        let result = self.source.send(&text, &self.partner).await;
        self.is_sending = false;

        match result {
            Ok(message) => {
                debug!(partner = %self.partner, "message sent");
                self.messages.push(message);
                self.input_text.clear();
                self.messages.last()
            }
            Err(err) => {
                self.error_message = Some(err.display_message());
                None
            }
        }
    }
}
