use meety::app::render;
use meety::app::App;
use meety::components::calendar::project;
use meety::components::chat::{ChatMessage, Sender};
use meety::components::meetings::{Meeting, MeetingStatus};
use meety::config::{Config, DEFAULT_BOT_LOCALE, DEFAULT_MEETINGS_HORIZON_DAYS};
use std::path::PathBuf;

fn test_config() -> Config {
    Config {
        meetings_endpoint: "http://localhost:9001".to_string(),
        identity_endpoint: "http://localhost:9002".to_string(),
        identity_client_id: "test-client".to_string(),
        bot_endpoint: "http://localhost:9003".to_string(),
        bot_id: "test-bot".to_string(),
        bot_alias_id: "test-alias".to_string(),
        bot_locale_id: DEFAULT_BOT_LOCALE.to_string(),
        session_file: PathBuf::from("/tmp/meety-smoke-session.json"),
        meetings_horizon_days: DEFAULT_MEETINGS_HORIZON_DAYS,
    }
}

/// Smoke test to verify the config shape and defaults
#[test]
fn test_config_defaults() {
    let config = test_config();
    assert_eq!(config.bot_locale_id, "en_US");
    assert_eq!(config.meetings_horizon_days, 30);
}

/// The app constructs all clients up front without touching the network
#[tokio::test]
async fn test_app_constructs_with_greeting() {
    let app = App::new(test_config());
    let transcript = app.chat().transcript();
    assert_eq!(transcript.len(), 1);
    assert!(transcript[0].text.contains("meeting assistant"));
}

/// Rendering helpers are pure string builders
#[test]
fn test_render_helpers() {
    let meeting = Meeting {
        meeting_id: "m1".to_string(),
        date: "2025-05-15".to_string(),
        start_time: Some("10:00".to_string()),
        end_time: Some("11:00".to_string()),
        attendee_name: Some("Alice".to_string()),
        email: Some("alice@example.com".to_string()),
        status: MeetingStatus::Pending,
        notes: None,
    };

    let table = render::meeting_table(std::slice::from_ref(&meeting));
    assert!(table.contains("Attendee Name"));
    assert!(table.contains("2025-05-15"));
    assert!(table.contains("10:00 - 11:00"));
    assert!(table.contains("pending"));

    let grid = project(std::slice::from_ref(&meeting), 2025, 5);
    let rendered = render::calendar_grid(&grid, 2025, 5);
    assert!(rendered.starts_with("May 2025"));
    assert!(rendered.contains(" 15* "));
    assert!(rendered.contains("Alice"));

    let line = render::chat_line(&ChatMessage {
        text: "hi".to_string(),
        sender: Sender::User,
    });
    assert_eq!(line, "You: hi");
}
