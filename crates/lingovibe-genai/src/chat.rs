use std::sync::Arc;

use async_trait::async_trait;
use lingovibe_types::{ChatMessage, Language};

use crate::GenAiError;

pub const GREETING: &str = "Hey! Got any questions about this word?";
pub const EMPTY_REPLY: &str = "Sorry, I couldn't quite get that.";
pub const CONNECTION_FAILURE: &str = "Oops, something went wrong with the connection.";

/// Model side of a multi-turn conversation
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Reply to the last message in `history`
    async fn reply(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
    ) -> Result<String, GenAiError>;
}

/// Follow-up conversation about one term
pub struct ChatSession {
    backend: Arc<dyn ChatBackend>,
    term: String,
    system_instruction: String,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        term: &str,
        source: Language,
        target: Language,
    ) -> Self {
        let system_instruction = format!(
            "You are a helpful language assistant. The user is asking about the word \"{term}\". \
             The user speaks {source} and is learning {target}. \
             Keep answers concise, helpful, and friendly."
        );

        Self {
            backend,
            term: term.to_string(),
            system_instruction,
            history: Vec::new(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Send one user turn. Never fails: problems become an apologetic reply
    /// and the turn is left out of the history.
    pub async fn send_message(&mut self, text: &str) -> String {
        let mut turn = self.history.clone();
        turn.push(ChatMessage::user(text));

        match self.backend.reply(&self.system_instruction, &turn).await {
            Ok(reply) => {
                let reply = if reply.trim().is_empty() {
                    EMPTY_REPLY.to_string()
                } else {
                    reply
                };
                turn.push(ChatMessage::model(reply.clone()));
                self.history = turn;
                reply
            }
            Err(e) => {
                tracing::error!("Chat about '{}' failed: {}", self.term, e);
                CONNECTION_FAILURE.to_string()
            }
        }
    }
}
