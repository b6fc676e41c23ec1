//! Transport between the conversation view and the chat endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::Message;

const CHAT_PATH: &str = "/api/chat";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Chat endpoint returned status {0}")]
    Status(u16),
}

/// Body of a successful chat response. Both fields are optional so that a
/// 200 carrying `{ error }` still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Sends the full history and returns exactly one reply.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, history: &[Message]) -> Result<ChatReply, TransportError>;
}

#[derive(Serialize)]
struct ChatRequestRef<'a> {
    messages: &'a [Message],
}

/// reqwest-backed transport posting to `{base_url}/api/chat`.
#[derive(Clone)]
pub struct HttpChatTransport {
    client: Client,
    endpoint: String,
}

impl HttpChatTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{CHAT_PATH}", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, history: &[Message]) -> Result<ChatReply, TransportError> {
        debug!(endpoint = %self.endpoint, messages = history.len(), "Posting chat history");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequestRef { messages: history })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(response.json::<ChatReply>().await?)
    }
}
