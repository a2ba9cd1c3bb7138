use crate::error::{env_error, AppResult};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default locale sent with every bot request
pub const DEFAULT_BOT_LOCALE: &str = "en_US";

/// Default path for the persisted session blob
pub const DEFAULT_SESSION_FILE: &str = ".meety/session.json";

/// Default horizon (in days) for the meetings list fetch
pub const DEFAULT_MEETINGS_HORIZON_DAYS: i64 = 30;

/// Main configuration structure for the client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the meetings API
    pub meetings_endpoint: String,
    /// URL of the identity provider endpoint
    pub identity_endpoint: String,
    /// App client id registered with the identity provider
    pub identity_client_id: String,
    /// URL of the conversational bot runtime endpoint
    pub bot_endpoint: String,
    /// Bot id
    pub bot_id: String,
    /// Bot alias id
    pub bot_alias_id: String,
    /// Locale sent with every utterance
    pub bot_locale_id: String,
    /// Path of the persisted session blob
    pub session_file: PathBuf,
    /// How many days of meetings to fetch for the meeting table
    pub meetings_horizon_days: i64,
}

/// Optional values read from config/meety.toml; the environment wins
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    meetings_endpoint: Option<String>,
    identity_endpoint: Option<String>,
    identity_client_id: Option<String>,
    bot_endpoint: Option<String>,
    bot_id: Option<String>,
    bot_alias_id: Option<String>,
    bot_locale_id: Option<String>,
    session_file: Option<String>,
    meetings_horizon_days: Option<i64>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Values from config/meety.toml fill in what the environment omits
        let file = fs::read_to_string("config/meety.toml")
            .ok()
            .and_then(|content| toml::from_str::<FileConfig>(&content).ok())
            .unwrap_or_default();

        let lookup = |key: &str, fallback: &Option<String>| -> Option<String> {
            env::var(key).ok().or_else(|| fallback.clone())
        };

        let meetings_endpoint = lookup("MEETY_API_ENDPOINT", &file.meetings_endpoint)
            .ok_or_else(|| env_error("MEETY_API_ENDPOINT"))?;
        let identity_endpoint = lookup("IDENTITY_ENDPOINT", &file.identity_endpoint)
            .ok_or_else(|| env_error("IDENTITY_ENDPOINT"))?;
        let identity_client_id = lookup("IDENTITY_CLIENT_ID", &file.identity_client_id)
            .ok_or_else(|| env_error("IDENTITY_CLIENT_ID"))?;
        let bot_endpoint =
            lookup("BOT_ENDPOINT", &file.bot_endpoint).ok_or_else(|| env_error("BOT_ENDPOINT"))?;
        let bot_id = lookup("BOT_ID", &file.bot_id).ok_or_else(|| env_error("BOT_ID"))?;
        let bot_alias_id =
            lookup("BOT_ALIAS_ID", &file.bot_alias_id).ok_or_else(|| env_error("BOT_ALIAS_ID"))?;

        let bot_locale_id = lookup("BOT_LOCALE_ID", &file.bot_locale_id)
            .unwrap_or_else(|| String::from(DEFAULT_BOT_LOCALE));

        let session_file = lookup("SESSION_FILE", &file.session_file)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        let meetings_horizon_days = match env::var("MEETINGS_HORIZON_DAYS") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|_| env_error("Invalid MEETINGS_HORIZON_DAYS format"))?,
            Err(_) => file
                .meetings_horizon_days
                .unwrap_or(DEFAULT_MEETINGS_HORIZON_DAYS),
        };

        Ok(Config {
            meetings_endpoint,
            identity_endpoint,
            identity_client_id,
            bot_endpoint,
            bot_id,
            bot_alias_id,
            bot_locale_id,
            session_file,
            meetings_horizon_days,
        })
    }
}
