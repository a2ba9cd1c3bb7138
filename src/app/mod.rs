pub mod render;

use crate::components::calendar;
use crate::components::chat::{BotClient, ChatSession};
use crate::components::meetings::{DateRange, Meeting, MeetingStatus, MeetingsClient};
use crate::components::session::{CredentialSource, IdentityClient, SessionAdapter};
use crate::config::Config;
use crate::error::AppResult;
use chrono::{Datelike, Utc};
use inquire::{Password, Select, Text};
use std::sync::Arc;
use tracing::warn;

/// The interactive client: one session adapter consulted for every
/// Authorization header, explicitly constructed clients, and the two views
/// (chat and admin).
///
/// Every component failure is rendered inline and the loop continues;
/// nothing here is fatal to the process.
pub struct App {
    config: Config,
    session: Arc<SessionAdapter>,
    meetings: MeetingsClient,
    bot: BotClient,
    chat: ChatSession,
}

impl App {
    /// Construct all clients up front, before the first render
    pub fn new(config: Config) -> Self {
        let identity = IdentityClient::new(
            config.identity_endpoint.clone(),
            config.identity_client_id.clone(),
        );
        let session = Arc::new(SessionAdapter::new(config.session_file.clone(), identity));
        let credentials: Arc<dyn CredentialSource> = session.clone();

        let meetings = MeetingsClient::new(config.meetings_endpoint.clone(), credentials.clone());
        let bot = BotClient::new(
            config.bot_endpoint.clone(),
            config.bot_id.clone(),
            config.bot_alias_id.clone(),
            config.bot_locale_id.clone(),
            credentials,
        );

        Self {
            config,
            session,
            meetings,
            bot,
            chat: ChatSession::new(),
        }
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    /// Main view loop
    pub async fn run(&mut self) -> AppResult<()> {
        loop {
            let choice = Select::new("Meety", vec!["Chatbot", "Admin", "Quit"]).prompt();
            match choice {
                Ok("Chatbot") => self.run_chat().await,
                Ok("Admin") => self.run_admin().await,
                _ => break,
            }
        }
        Ok(())
    }

    /// Chat view: print the transcript, then prompt until the user leaves
    async fn run_chat(&mut self) {
        for message in self.chat.transcript() {
            println!("{}", render::chat_line(message));
        }

        loop {
            let input = match Text::new("You:").prompt() {
                Ok(text) => text,
                Err(_) => break,
            };
            let utterance = input.trim();
            if utterance.is_empty() || utterance == "/back" {
                break;
            }

            self.chat.send(&self.bot, utterance).await;

            if let Some(reply) = self.chat.transcript().last() {
                println!("{}", render::chat_line(reply));
            }
        }
    }

    /// Admin view: sign-in form when unauthenticated, dashboard otherwise
    async fn run_admin(&mut self) {
        loop {
            match self.session.current_user() {
                Ok(user) => {
                    if !self.admin_dashboard(&user.username).await {
                        break;
                    }
                }
                Err(_) => {
                    if !self.sign_in_form().await {
                        break;
                    }
                }
            }
        }
    }

    /// Username/password form; returns false when the user backs out
    async fn sign_in_form(&self) -> bool {
        println!("Admin Login");

        let username = match Text::new("Username:").prompt() {
            Ok(value) => value,
            Err(_) => return false,
        };
        let password = match Password::new("Password:").without_confirmation().prompt() {
            Ok(value) => value,
            Err(_) => return false,
        };

        if username.is_empty() || password.is_empty() {
            println!("Username and password are required");
            return true;
        }

        match self.session.sign_in(&username, &password).await {
            Ok(auth) => {
                println!("Welcome, {}", auth.username);
                true
            }
            Err(err) => {
                println!("Error: {}", err);
                true
            }
        }
    }

    /// Dashboard menu; returns false when the user leaves the admin view
    async fn admin_dashboard(&self, username: &str) -> bool {
        println!("Meety Admin Dashboard - signed in as {}", username);

        let choice = Select::new(
            "Dashboard",
            vec![
                "Pending Meetings",
                "Meeting Calendar",
                "Calendar View",
                "Sign Out",
                "Back",
            ],
        )
        .prompt();

        match choice {
            Ok("Pending Meetings") => {
                self.meeting_list_view(None).await;
                true
            }
            Ok("Meeting Calendar") => {
                let today = Utc::now().date_naive();
                let range = DateRange::next_days(today, self.config.meetings_horizon_days);
                self.meeting_list_view(Some(range)).await;
                true
            }
            Ok("Calendar View") => {
                self.calendar_view().await;
                true
            }
            Ok("Sign Out") => {
                if let Err(err) = self.session.sign_out() {
                    println!("Error: {}", err);
                }
                false
            }
            _ => false,
        }
    }

    /// Table view shared by the pending list and the meeting calendar.
    ///
    /// The list is re-fetched after every successful status change; a failed
    /// change leaves the last fetched list standing.
    async fn meeting_list_view(&self, range: Option<DateRange>) {
        let mut meetings = match self.fetch_list(range.as_ref()).await {
            Ok(meetings) => meetings,
            Err(err) => {
                println!("Error: {}", err);
                return;
            }
        };

        loop {
            if meetings.is_empty() {
                match range {
                    Some(_) => println!("No meetings scheduled"),
                    None => println!("No pending meetings"),
                }
                return;
            }

            println!("{}", render::meeting_table(&meetings));

            let actionable: Vec<String> = meetings
                .iter()
                .filter(|meeting| !meeting.status.is_terminal())
                .map(|meeting| meeting.meeting_id.clone())
                .collect();
            if actionable.is_empty() {
                return;
            }

            let mut options = actionable;
            options.push("Back".to_string());
            let selected = match Select::new("Select a meeting", options).prompt() {
                Ok(choice) if choice != "Back" => choice,
                _ => return,
            };

            let Some(meeting) = meetings.iter().find(|m| m.meeting_id == selected) else {
                return;
            };

            match self.prompt_transition(meeting).await {
                Ok(true) => match self.fetch_list(range.as_ref()).await {
                    Ok(refreshed) => meetings = refreshed,
                    // Keep showing the last successfully fetched list
                    Err(err) => println!("Error: {}", err),
                },
                Ok(false) => {}
                Err(err) => {
                    // No optimistic update; the table stays as last fetched
                    println!("Error: {}", err);
                }
            }
        }
    }

    /// Offer the allowed transitions for one meeting; Ok(true) means a
    /// mutation went through and the caller must re-fetch
    async fn prompt_transition(&self, meeting: &Meeting) -> AppResult<bool> {
        let mut options: Vec<&str> = meeting
            .status
            .allowed_transitions()
            .iter()
            .map(MeetingStatus::as_str)
            .collect();
        options.push("Back");

        let action = match Select::new("Action", options).prompt() {
            Ok(choice) if choice != "Back" => choice,
            _ => return Ok(false),
        };

        let target = match action {
            "approved" => MeetingStatus::Approved,
            "cancelled" => MeetingStatus::Cancelled,
            _ => return Ok(false),
        };

        self.meetings.set_status(&meeting.meeting_id, target).await?;
        println!("Meeting {} {}", meeting.meeting_id, target);
        Ok(true)
    }

    /// Month grid with prev/next navigation
    async fn calendar_view(&self) {
        let today = Utc::now().date_naive();
        let mut year = today.year();
        let mut month = today.month();

        loop {
            let meetings = match self.fetch_month(year, month).await {
                Ok(meetings) => meetings,
                Err(err) => {
                    println!("Error: {}", err);
                    return;
                }
            };

            let grid = calendar::project(&meetings, year, month);
            println!("{}", render::calendar_grid(&grid, year, month));

            let choice = Select::new("Calendar", vec!["Previous month", "Next month", "Back"])
                .prompt();
            match choice {
                Ok("Previous month") => (year, month) = calendar::prev_month(year, month),
                Ok("Next month") => (year, month) = calendar::next_month(year, month),
                _ => return,
            }
        }
    }

    async fn fetch_list(&self, range: Option<&DateRange>) -> AppResult<Vec<Meeting>> {
        match range {
            Some(range) => self.meetings.list_meetings(Some(range)).await,
            None => self.meetings.list_pending().await,
        }
    }

    async fn fetch_month(&self, year: i32, month: u32) -> AppResult<Vec<Meeting>> {
        let first = chrono::NaiveDate::from_ymd_opt(year, month, 1)
            .unwrap_or_else(|| Utc::now().date_naive());
        let range = DateRange {
            start: first,
            end: first + chrono::Duration::days(calendar::days_in_month(year, month) as i64 - 1),
        };
        self.meetings.list_meetings(Some(&range)).await.map_err(|err| {
            warn!("Calendar fetch failed: {}", err);
            err
        })
    }
}
