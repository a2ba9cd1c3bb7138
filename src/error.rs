use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Authentication error: {0}")]
    #[diagnostic(code(meety::auth))]
    Auth(String),

    #[error("Invalid username or password")]
    #[diagnostic(code(meety::invalid_credentials))]
    InvalidCredentials,

    #[error("No current session")]
    #[diagnostic(code(meety::no_session))]
    NoSession,

    #[error("Meetings API error: HTTP {status} - {body}")]
    #[diagnostic(code(meety::remote_request))]
    RemoteRequest { status: u16, body: String },

    #[error("Bot authorization denied")]
    #[diagnostic(code(meety::conversation_denied))]
    ConversationDenied,

    #[error("Bot error: {0}")]
    #[diagnostic(code(meety::conversation))]
    Conversation(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(meety::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(meety::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(meety::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(meety::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(meety::other))]
    Other(String),
}

// Implement From for JSON serialization errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create authentication errors
pub fn auth_error(message: &str) -> Error {
    Error::Auth(message.to_string())
}

/// Helper to create bot conversation errors
pub fn conversation_error(message: &str) -> Error {
    Error::Conversation(message.to_string())
}

/// Helper to create configuration errors
#[allow(dead_code)]
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create other errors
#[allow(dead_code)]
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
