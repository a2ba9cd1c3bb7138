use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback reply shown when the bot returns no usable utterance
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't process your request.";

/// Who said a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One line of the chat transcript; held only in memory, never persisted
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// The bot's answer to one utterance
#[derive(Debug, Clone)]
pub struct BotReply {
    pub text: String,
    pub session_attributes: HashMap<String, String>,
}

/// Request body the bot runtime expects
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeTextRequest<'a> {
    pub bot_id: &'a str,
    pub bot_alias_id: &'a str,
    pub locale_id: &'a str,
    pub session_id: &'a str,
    pub text: &'a str,
    pub session_state: SessionStateRequest<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateRequest<'a> {
    pub session_attributes: &'a HashMap<String, String>,
}

/// Response body the bot runtime returns
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeTextResponse {
    #[serde(default)]
    pub messages: Vec<BotUtterance>,
    pub session_state: Option<SessionStateResponse>,
}

#[derive(Debug, Deserialize)]
pub struct BotUtterance {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateResponse {
    #[serde(default)]
    pub session_attributes: HashMap<String, String>,
}

impl RecognizeTextResponse {
    /// Collapse the provider response into a reply, supplying the fixed
    /// fallback when the provider returned no utterance
    pub fn into_reply(self) -> BotReply {
        let text = self
            .messages
            .into_iter()
            .next()
            .and_then(|message| message.content)
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());

        let session_attributes = self
            .session_state
            .map(|state| state.session_attributes)
            .unwrap_or_default();

        BotReply {
            text,
            session_attributes,
        }
    }
}
