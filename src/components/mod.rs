// Export components
pub mod calendar;
pub mod chat;
pub mod meetings;
pub mod session;

// Re-export the client-facing types
pub use chat::{BotClient, ChatSession};
pub use meetings::MeetingsClient;
pub use session::{CredentialSource, SessionAdapter};
