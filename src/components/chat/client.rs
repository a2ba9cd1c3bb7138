use super::models::{BotReply, RecognizeTextRequest, RecognizeTextResponse, SessionStateRequest};
use crate::components::session::CredentialSource;
use crate::error::{conversation_error, AppResult, Error};
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Client for the managed conversational bot runtime.
///
/// Credentials are best-effort: an available session is attached as a
/// bearer token, otherwise the request goes out anonymously and the
/// provider decides whether to answer.
pub struct BotClient {
    endpoint: String,
    bot_id: String,
    bot_alias_id: String,
    locale_id: String,
    client: Client,
    credentials: Arc<dyn CredentialSource>,
}

impl BotClient {
    pub fn new(
        endpoint: String,
        bot_id: String,
        bot_alias_id: String,
        locale_id: String,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        Self {
            endpoint,
            bot_id,
            bot_alias_id,
            locale_id,
            client: Client::new(),
            credentials,
        }
    }

    /// Send one utterance and return the reply plus updated attributes
    pub async fn send(
        &self,
        utterance: &str,
        session_id: &str,
        session_attributes: &HashMap<String, String>,
    ) -> AppResult<BotReply> {
        let request = RecognizeTextRequest {
            bot_id: &self.bot_id,
            bot_alias_id: &self.bot_alias_id,
            locale_id: &self.locale_id,
            session_id,
            text: utterance,
            session_state: SessionStateRequest { session_attributes },
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Ok(Some(token)) = self.credentials.bearer_token().await {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        debug!("Sending utterance to bot session {}", session_id);

        let response = builder
            .send()
            .await
            .map_err(|e| conversation_error(&format!("Bot request failed: {}", e)))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::ConversationDenied),
            status if !status.is_success() => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Could not read error response".to_string());
                Err(conversation_error(&format!("HTTP {} - {}", status, body)))
            }
            _ => {
                let parsed: RecognizeTextResponse = response
                    .json()
                    .await
                    .map_err(|e| conversation_error(&format!("Failed to parse bot response: {}", e)))?;
                Ok(parsed.into_reply())
            }
        }
    }
}
