mod identity;
pub mod models;
mod store;

pub use identity::IdentityClient;
pub use models::{AuthResult, Session};
pub use store::SessionStore;

use crate::error::{AppResult, Error};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Something that can produce a bearer token for outgoing requests.
///
/// `None` means no session is available and the caller may proceed
/// anonymously where that is allowed.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn bearer_token(&self) -> AppResult<Option<String>>;
}

/// Adapter over the persisted credential blob and the identity endpoint.
///
/// One instance is constructed at startup and consulted for every
/// Authorization header in the application.
pub struct SessionAdapter {
    store: SessionStore,
    identity: IdentityClient,
}

impl SessionAdapter {
    pub fn new(session_file: PathBuf, identity: IdentityClient) -> Self {
        Self {
            store: SessionStore::new(session_file),
            identity,
        }
    }

    /// The currently signed-in user, or `NoSession`
    pub fn current_user(&self) -> AppResult<AuthResult> {
        self.store.load()
    }

    /// The current session, or `NoSession` when no valid blob is stored
    pub fn current_session(&self) -> AppResult<Session> {
        self.store.load().map(Session::new)
    }

    /// Sign in against the identity endpoint and persist the result
    pub async fn sign_in(&self, username: &str, password: &str) -> AppResult<AuthResult> {
        let tokens = self.identity.authenticate(username, password).await?;

        let auth = AuthResult {
            username: username.to_string(),
            access_token: tokens.access_token,
            id_token: tokens.id_token,
            refresh_token: tokens.refresh_token,
        };

        self.store.save(&auth)?;
        info!("Signed in as {}", auth.username);
        Ok(auth)
    }

    /// Clear the stored session. Idempotent; succeeds when nothing is stored.
    pub fn sign_out(&self) -> AppResult<()> {
        self.store.clear()?;
        info!("Signed out");
        Ok(())
    }
}

#[async_trait]
impl CredentialSource for SessionAdapter {
    async fn bearer_token(&self) -> AppResult<Option<String>> {
        match self.current_session() {
            Ok(session) => Ok(Some(session.id_token().to_string())),
            Err(Error::NoSession) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
