use crate::error::{auth_error, AppResult, Error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

const AUTH_FLOW: &str = "USER_PASSWORD_AUTH";
const NEW_PASSWORD_CHALLENGE: &str = "NEW_PASSWORD_REQUIRED";
const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
const CHALLENGE_TARGET: &str = "AWSCognitoIdentityProviderService.RespondToAuthChallenge";
const PROVIDER_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Client for the managed identity endpoint (username/password in,
/// bearer token triple out)
#[derive(Debug, Clone)]
pub struct IdentityClient {
    endpoint: String,
    client_id: String,
    client: Client,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthRequest<'a> {
    auth_flow: &'static str,
    client_id: &'a str,
    auth_parameters: HashMap<&'static str, &'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RespondToChallengeRequest<'a> {
    challenge_name: &'static str,
    client_id: &'a str,
    session: &'a str,
    challenge_responses: HashMap<&'static str, &'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthResponse {
    authentication_result: Option<TokenSet>,
    challenge_name: Option<String>,
    session: Option<String>,
}

/// Tokens issued by the provider on a successful authentication
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenSet {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(rename = "__type")]
    kind: Option<String>,
    message: Option<String>,
}

impl IdentityClient {
    pub fn new(endpoint: String, client_id: String) -> Self {
        Self {
            endpoint,
            client_id,
            client: Client::new(),
        }
    }

    /// Authenticate with username and password.
    ///
    /// A `NEW_PASSWORD_REQUIRED` challenge is answered by resubmitting the
    /// same password as the new one. This mirrors the provisioning flow the
    /// backend relies on and needs security sign-off before it changes.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<TokenSet> {
        let mut auth_parameters = HashMap::new();
        auth_parameters.insert("USERNAME", username);
        auth_parameters.insert("PASSWORD", password);

        let request = InitiateAuthRequest {
            auth_flow: AUTH_FLOW,
            client_id: &self.client_id,
            auth_parameters,
        };

        let response: AuthResponse = self.post(INITIATE_AUTH_TARGET, &request).await?;

        if response.challenge_name.as_deref() == Some(NEW_PASSWORD_CHALLENGE) {
            warn!("Identity provider issued a new-password challenge; resubmitting the current password");
            let session = response
                .session
                .ok_or_else(|| auth_error("Challenge response missing session"))?;
            return self
                .respond_to_new_password_challenge(username, password, &session)
                .await;
        }

        response
            .authentication_result
            .ok_or_else(|| auth_error("Authentication result is missing from response"))
    }

    async fn respond_to_new_password_challenge(
        &self,
        username: &str,
        password: &str,
        session: &str,
    ) -> AppResult<TokenSet> {
        let mut challenge_responses = HashMap::new();
        challenge_responses.insert("USERNAME", username);
        challenge_responses.insert("NEW_PASSWORD", password);

        let request = RespondToChallengeRequest {
            challenge_name: NEW_PASSWORD_CHALLENGE,
            client_id: &self.client_id,
            session,
            challenge_responses,
        };

        let response: AuthResponse = self.post(CHALLENGE_TARGET, &request).await?;

        response
            .authentication_result
            .ok_or_else(|| auth_error("Authentication result missing after challenge"))
    }

    async fn post<T: Serialize>(&self, target: &str, request: &T) -> AppResult<AuthResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", PROVIDER_CONTENT_TYPE)
            .header("X-Amz-Target", target)
            .json(request)
            .send()
            .await
            .map_err(|e| auth_error(&format!("Identity request failed: {}", e)))?;

        if !response.status().is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(rejection_from_body(&body));
        }

        response
            .json()
            .await
            .map_err(|e| auth_error(&format!("Failed to parse identity response: {}", e)))
    }
}

/// Map a provider error body to our taxonomy: credential rejections become
/// `InvalidCredentials`, everything else stays an auth error
fn rejection_from_body(body: &str) -> Error {
    if let Ok(provider_error) = serde_json::from_str::<ProviderError>(body) {
        if let Some(kind) = provider_error.kind.as_deref() {
            if kind.ends_with("NotAuthorizedException") || kind.ends_with("UserNotFoundException") {
                return Error::InvalidCredentials;
            }
        }
        if let Some(message) = provider_error.message {
            return auth_error(&message);
        }
    }
    auth_error(body)
}
