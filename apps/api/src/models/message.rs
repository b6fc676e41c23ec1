use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Builds a message with a fresh time-ordered id (UUID v7).
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Body of `POST /api/chat`.
///
/// History entries stay untyped: only the final entry's `content` is read, so
/// earlier entries may carry any role or id shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Value>,
}

impl ChatRequest {
    /// `Some("")` for an empty history, `None` when the final entry has no
    /// string `content`.
    pub fn latest_content(&self) -> Option<&str> {
        match self.messages.last() {
            None => Some(""),
            Some(entry) => entry.get("content").and_then(Value::as_str),
        }
    }
}
