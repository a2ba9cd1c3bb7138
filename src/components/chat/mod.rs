mod client;
pub mod models;

pub use client::BotClient;
pub use models::{BotReply, ChatMessage, Sender, FALLBACK_REPLY};

use crate::error::{AppResult, Error};
use std::collections::HashMap;
use tracing::warn;
use uuid::Uuid;

/// Opening line of every chat session
pub const GREETING: &str = "Hello! I'm Meety, your meeting assistant. How can I help you today?";

/// Reply shown when the bot refuses the request for lack of credentials
pub const SIGN_IN_PROMPT: &str =
    "You need to sign in to use the chatbot. Please sign in from the Admin view.";

/// State of one chat conversation: the append-only transcript, the session
/// id the bot correlates on, and the attribute map it threads through
/// replies. Failures never end the session; they land in the transcript as
/// bot messages.
pub struct ChatSession {
    session_id: String,
    session_attributes: HashMap<String, String>,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session_attributes = HashMap::new();
        session_attributes.insert("source".to_string(), "web-chat".to_string());

        Self {
            session_id: format!("user-{}", Uuid::new_v4()),
            session_attributes,
            transcript: vec![ChatMessage::bot(GREETING)],
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn session_attributes(&self) -> &HashMap<String, String> {
        &self.session_attributes
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Send one utterance through the given client and record the outcome
    pub async fn send(&mut self, client: &BotClient, utterance: &str) {
        self.transcript.push(ChatMessage::user(utterance));
        let outcome = client
            .send(utterance, &self.session_id, &self.session_attributes)
            .await;
        self.record_outcome(outcome);
    }

    /// Fold a bot call outcome into the transcript.
    ///
    /// Authorization failures become the sign-in prompt; anything else
    /// becomes a generic error reply. Both keep the session alive.
    pub fn record_outcome(&mut self, outcome: AppResult<BotReply>) {
        match outcome {
            Ok(reply) => {
                self.session_attributes = reply.session_attributes;
                self.transcript.push(ChatMessage::bot(reply.text));
            }
            Err(Error::ConversationDenied) => {
                self.transcript.push(ChatMessage::bot(SIGN_IN_PROMPT));
            }
            Err(err) => {
                warn!("Bot call failed: {}", err);
                self.transcript.push(ChatMessage::bot(format!(
                    "Sorry, there was an error processing your request: {}",
                    err
                )));
            }
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
