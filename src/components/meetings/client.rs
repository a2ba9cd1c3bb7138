use super::models::{DateRange, Meeting};
use super::normalize::meetings_from_response;
use super::workflow::MeetingStatus;
use crate::components::session::CredentialSource;
use crate::error::{AppResult, Error};
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Client for the meetings API.
///
/// Every request carries a bearer token read through the one credential
/// source; there is no caching and no retrying, callers re-fetch after
/// mutations.
pub struct MeetingsClient {
    endpoint: String,
    client: Client,
    credentials: Arc<dyn CredentialSource>,
}

impl MeetingsClient {
    pub fn new(endpoint: String, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            endpoint,
            client: Client::new(),
            credentials,
        }
    }

    /// List meetings, optionally bounded to a date range
    pub async fn list_meetings(&self, range: Option<&DateRange>) -> AppResult<Vec<Meeting>> {
        let mut url = self.url("/meetings")?;
        if let Some(range) = range {
            url.query_pairs_mut()
                .append_pair("startDate", &range.start_param())
                .append_pair("endDate", &range.end_param());
        }
        self.fetch_meetings(url).await
    }

    /// List meetings still awaiting an approve/cancel decision
    pub async fn list_pending(&self) -> AppResult<Vec<Meeting>> {
        let url = self.url("/pending")?;
        self.fetch_meetings(url).await
    }

    /// Move a meeting to a new status.
    ///
    /// Earlier clients disagreed on the body field name for the target
    /// status, so both are sent until the backend contract is confirmed.
    pub async fn set_status(&self, meeting_id: &str, new_status: MeetingStatus) -> AppResult<()> {
        let token = self.bearer().await?;
        let url = self.url("/status")?;
        let body = json!({
            "meetingId": meeting_id,
            "newStatus": new_status,
            "status": new_status,
        });

        debug!("Updating meeting {} to {}", meeting_id, new_status);

        let response = self
            .client
            .put(url)
            .header("Authorization", format!("Bearer {}", token))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Other(format!("Status update request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(remote_error(response).await);
        }

        Ok(())
    }

    async fn fetch_meetings(&self, url: Url) -> AppResult<Vec<Meeting>> {
        let token = self.bearer().await?;

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| Error::Other(format!("Meetings request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(remote_error(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Other(format!("Failed to read meetings response: {}", e)))?;

        // Non-JSON bodies arrive wrapped the same way the API gateway layer
        // wraps them, so the normalizer sees a consistent shape
        let value: Value =
            serde_json::from_str(&body).unwrap_or_else(|_| json!({ "message": body }));

        meetings_from_response(value)
    }

    async fn bearer(&self) -> AppResult<String> {
        self.credentials
            .bearer_token()
            .await?
            .ok_or(Error::NoSession)
    }

    fn url(&self, path: &str) -> AppResult<Url> {
        Url::parse(&format!("{}{}", self.endpoint, path))
            .map_err(|e| Error::Config(format!("Invalid meetings endpoint: {}", e)))
    }
}

async fn remote_error(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response".to_string());
    Error::RemoteRequest { status, body }
}
