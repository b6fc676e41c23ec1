//! Client-side conversation state.
//!
//! `ConversationView` owns the message list for one session and is only
//! changed through its submit operations. Each operation borrows the view
//! mutably across the request, so a view never has two requests in flight
//! and replies are appended in the order they were sent.

use tracing::warn;

use crate::models::Message;

pub mod prompts;
pub mod transport;

pub use prompts::{QuickPrompt, CONNECTION_APOLOGY, EMPTY_REPLY_APOLOGY, RESUME_PREFIX};
pub use transport::{ChatReply, ChatTransport, HttpChatTransport, TransportError};

/// What a submit call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing was appended or sent.
    Ignored,
    /// The server replied and its content was appended.
    Replied,
    /// The transport failed and a local apology was appended.
    Failed,
}

pub struct ConversationView<T> {
    transport: T,
    messages: Vec<Message>,
}

impl<T: ChatTransport> ConversationView<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Appends `text` (trimmed) as a user message, sends the full history and
    /// appends exactly one assistant message: the reply, or an apology.
    ///
    /// The view stays mutably borrowed until the reply is appended, so only
    /// one request per view is ever in flight.
    pub async fn submit_user_text(&mut self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.messages.push(Message::user(text));

        let (content, outcome) = match self.transport.send(&self.messages).await {
            Ok(reply) => (reply_content(reply), SubmitOutcome::Replied),
            Err(e) => {
                warn!("Chat request failed: {e}");
                (CONNECTION_APOLOGY.to_string(), SubmitOutcome::Failed)
            }
        };

        self.messages.push(Message::assistant(content));
        outcome
    }

    /// Wraps pasted resume text with `RESUME_PREFIX` and submits it.
    pub async fn submit_resume_text(&mut self, text: &str) -> SubmitOutcome {
        match prompts::wrap_resume(text) {
            Some(wrapped) => self.submit_user_text(&wrapped).await,
            None => SubmitOutcome::Ignored,
        }
    }

    pub async fn invoke_quick_prompt(&mut self, prompt: QuickPrompt) -> SubmitOutcome {
        self.submit_user_text(prompt.text()).await
    }
}

/// Prefers `content`, then `error`, then a fixed apology. Empty strings count as absent.
fn reply_content(reply: ChatReply) -> String {
    reply
        .content
        .filter(|c| !c.is_empty())
        .or(reply.error.filter(|e| !e.is_empty()))
        .unwrap_or_else(|| EMPTY_REPLY_APOLOGY.to_string())
}
