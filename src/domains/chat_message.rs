use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One message in a chat exchange.
///
/// Every field is stored verbatim. Role and content are free text and may be
/// absent; the timestamp is milliseconds since the Unix epoch and may be any
/// value, including zero or negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    timestamp: i64,
}

impl ChatMessage {
    /// A blank message. Unlike [`ChatMessage::new`] this does not read the
    /// clock: the timestamp stays `0` until set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a message stamped with the current wall-clock time.
    pub fn new(role: Option<&str>, content: Option<&str>) -> Self {
        Self::with_timestamp(role, content, current_millis())
    }

    pub fn with_timestamp(role: Option<&str>, content: Option<&str>, timestamp: i64) -> Self {
        Self {
            role: role.map(str::to_string),
            content: content.map(str::to_string),
            timestamp,
        }
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn set_role(&mut self, role: Option<&str>) {
        self.role = role.map(str::to_string);
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: Option<&str>) {
        self.content = content.map(str::to_string);
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = timestamp;
    }

    /// Case-sensitive; a message without a role matches nothing.
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }
}

pub fn current_millis() -> i64 {
    Utc::now().timestamp_millis()
}
