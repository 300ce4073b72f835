//! Chat messages as displayed in the conversation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata key holding the send time (seconds since the Unix epoch).
pub const TIMESTAMP_KEY: &str = "timestamp";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::System => "System",
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

/// One message in a conversation. `content` may be absent (e.g. tool-call only replies).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: Option<String>,
    #[serde(default)]
    pub additional_metadata: Map<String, Value>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: Some(content.into()),
            additional_metadata: Map::new(),
        }
    }

    /// A message stamped with the current time.
    pub fn sent_now(role: Role, content: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis() as f64 / 1000.0;
        Self::new(role, content).with_timestamp(now)
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.additional_metadata
            .insert(TIMESTAMP_KEY.to_string(), Value::from(timestamp));
        self
    }

    /// Content, or "" when absent.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Send time from metadata; 0 when missing or not a number.
    pub fn timestamp(&self) -> f64 {
        self.additional_metadata
            .get(TIMESTAMP_KEY)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}
