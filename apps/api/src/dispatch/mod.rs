//! Response dispatch: maps the latest message of a conversation to one canned reply.
//!
//! Stateless. Only the final message's content is consulted; earlier history is
//! accepted but ignored. `AppState` holds an `Arc<dyn Responder>` so handlers
//! never depend on the rule table directly.

use tracing::debug;

use crate::models::Message;

pub mod handlers;
pub mod rules;
pub mod templates;

pub use rules::{DispatchRule, Matcher, DISPATCH_RULES, FALLBACK_TEMPLATE};
pub use templates::TemplateKind;

/// Content of the last message, or `""` for an empty history.
pub fn latest_content(history: &[Message]) -> &str {
    history.last().map(|m| m.content.as_str()).unwrap_or_default()
}

/// Picks the template for `content` using case-insensitive substring rules.
pub fn select_template(content: &str) -> TemplateKind {
    let lowered = content.to_lowercase();
    match rules::first_match(&lowered) {
        Some(rule) => {
            debug!(rule = rule.name, "Dispatch rule matched");
            rule.template
        }
        None => {
            debug!("No dispatch rule matched, using fallback");
            FALLBACK_TEMPLATE
        }
    }
}

/// Produces the assistant reply for a conversation.
pub trait Responder: Send + Sync {
    /// Reply to the content of the latest message.
    fn reply(&self, latest_content: &str) -> Message;

    fn respond(&self, history: &[Message]) -> Message {
        self.reply(latest_content(history))
    }
}

/// Default responder backed by `DISPATCH_RULES`.
pub struct KeywordResponder;

impl Responder for KeywordResponder {
    fn reply(&self, latest_content: &str) -> Message {
        Message::assistant(select_template(latest_content).text())
    }
}
