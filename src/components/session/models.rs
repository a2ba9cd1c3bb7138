use serde::{Deserialize, Serialize};

/// Bearer credential triple handed out by the identity provider.
///
/// Serialized camelCase so the persisted blob matches the shape earlier
/// deployments stored under their fixed storage key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub username: String,
    pub access_token: String,
    pub id_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// View over a stored credential blob exposing the tokens requests need
#[derive(Debug, Clone)]
pub struct Session {
    auth: AuthResult,
}

impl Session {
    pub fn new(auth: AuthResult) -> Self {
        Self { auth }
    }

    /// Token attached as the Authorization bearer on API requests
    pub fn id_token(&self) -> &str {
        &self.auth.id_token
    }

    pub fn access_token(&self) -> &str {
        &self.auth.access_token
    }

    pub fn username(&self) -> &str {
        &self.auth.username
    }
}
