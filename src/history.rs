use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::HistoryConfig;
use crate::domains::ChatMessage;

/// Ordered transcript of a chat, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatHistory {
    #[serde(default)]
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    max_messages: Option<usize>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `max_messages`, dropping the oldest first. Zero means unbounded.
    pub fn with_limit(max_messages: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_messages: (max_messages > 0).then_some(max_messages),
        }
    }

    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::with_limit(config.max_messages.unwrap_or(0))
    }

    pub fn set_limit(&mut self, max_messages: usize) {
        self.max_messages = (max_messages > 0).then_some(max_messages);
        self.enforce_limit();
    }

    pub fn limit(&self) -> Option<usize> {
        self.max_messages
    }

    pub fn push(&mut self, message: ChatMessage) {
        debug!(
            role = message.role().unwrap_or_default(),
            timestamp = message.timestamp(),
            "appending chat message"
        );
        self.messages.push(message);
        self.enforce_limit();
    }

    pub fn record(&mut self, role: Option<&str>, content: Option<&str>) -> &ChatMessage {
        self.push(ChatMessage::new(role, content));
        self.messages
            .last()
            .expect("push leaves at least one message")
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn clear(&mut self) {
        debug!(dropped = self.messages.len(), "clearing chat history");
        self.messages.clear();
    }

    /// The last `limit` messages in order. A limit of zero returns everything.
    pub fn recent(&self, limit: usize) -> &[ChatMessage] {
        if limit == 0 || limit >= self.messages.len() {
            return &self.messages;
        }
        &self.messages[self.messages.len() - limit..]
    }

    pub fn by_role<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a ChatMessage> + 'a {
        self.messages.iter().filter(move |message| message.has_role(role))
    }

    pub fn transcript(&self, limit: usize) -> Vec<String> {
        self.recent(limit)
            .iter()
            .map(|message| {
                format!(
                    "{}: {}",
                    message.role().unwrap_or_default(),
                    message.content().unwrap_or_default()
                )
            })
            .collect()
    }

    fn enforce_limit(&mut self) {
        let Some(max) = self.max_messages else {
            return;
        };
        if self.messages.len() > max {
            let excess = self.messages.len() - max;
            self.messages.drain(..excess);
            debug!(dropped = excess, max, "trimmed chat history to retention limit");
        }
    }
}

impl FromIterator<ChatMessage> for ChatHistory {
    fn from_iter<I: IntoIterator<Item = ChatMessage>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
            max_messages: None,
        }
    }
}
