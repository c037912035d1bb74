#[cfg(test)]
#[path = "chat_session_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::ChatReply;
use crate::domain::models::ChatRequest;
use crate::domain::models::ClientError;
use crate::domain::models::ConversationContext;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Role;

pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "Who are our top scorers?",
    "What's our record?",
    "Tell me about our next game",
    "How are our goalkeepers doing?",
    "Compare this season to last year",
];

pub const CONNECTION_ERROR: &str =
    "Error connecting to the backend. Make sure it is running and try again.";

/// The chat transcript and the context blob replayed to the backend.
#[derive(Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    context: ConversationContext,
    waiting: bool,
}

impl ChatSession {
    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn context(&self) -> &ConversationContext {
        return &self.context;
    }

    pub fn is_waiting(&self) -> bool {
        return self.waiting;
    }

    /// Starter prompts, offered only until the first message.
    pub fn suggestions(&self) -> &'static [&'static str] {
        if !self.messages.is_empty() {
            return &[];
        }

        return &SUGGESTED_QUESTIONS;
    }

    /// Appends the user message and sends it with the current context.
    /// Returns false without doing anything for blank text or while a reply is
    /// outstanding.
    pub fn send(
        &mut self,
        text: &str,
        coach_mode: bool,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        let text = text.trim();
        if text.is_empty() || self.waiting {
            return Ok(false);
        }

        self.messages.push(Message::new(Role::User, text));
        self.waiting = true;
        tx.send(Action::ChatRequest(ChatRequest {
            message: text.to_string(),
            context: self.context.clone(),
            coach_mode,
        }))?;

        return Ok(true);
    }

    /// Appends the reply. A failure leaves the context untouched so the next
    /// message reuses the last good one.
    pub fn complete(&mut self, result: Result<ChatReply, ClientError>) -> bool {
        if !self.waiting {
            return false;
        }
        self.waiting = false;

        match result {
            Ok(reply) => {
                self.messages
                    .push(Message::new(Role::Assistant, &reply.response));
                self.context = reply.context;
            }
            Err(err) => {
                tracing::error!(error = %err, "chat request failed");
                self.messages.push(Message::new_with_type(
                    Role::Assistant,
                    MessageType::Error,
                    CONNECTION_ERROR,
                ));
            }
        }

        return true;
    }
}
