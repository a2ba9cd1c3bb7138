use super::models::AuthResult;
use crate::error::{AppResult, Error};
use std::fs;
use std::path::PathBuf;

/// File-backed store for the single persisted credential blob.
///
/// One fixed path, last write wins: sign-in overwrites, sign-out removes.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the stored credential blob.
    ///
    /// A missing or malformed blob is `NoSession`; callers treat both the
    /// same way and prompt for a fresh sign-in.
    pub fn load(&self) -> AppResult<AuthResult> {
        let content = fs::read_to_string(&self.path).map_err(|_| Error::NoSession)?;
        serde_json::from_str(&content).map_err(|_| Error::NoSession)
    }

    /// Persist the credential blob, overwriting any previous one
    pub fn save(&self, auth: &AuthResult) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string(auth)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Remove the stored blob unconditionally; absent blobs are fine
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
