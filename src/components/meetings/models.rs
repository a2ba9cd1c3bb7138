use super::workflow::MeetingStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A meeting record as the meetings API returns it.
///
/// Field names vary between backend deployments; the aliases accept the
/// variants that have been observed (`subject`/`attendeeName`,
/// `attendees`/`email`, `time`/`startTime`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub meeting_id: String,
    /// Calendar date, stored as an ISO date or datetime string
    pub date: String,
    #[serde(alias = "time", default)]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(alias = "subject", default)]
    pub attendee_name: Option<String>,
    #[serde(alias = "attendees", default)]
    pub email: Option<String>,
    pub status: MeetingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Meeting {
    /// The date's own calendar fields, ignoring any time or offset suffix.
    ///
    /// Day matching works on these fields directly rather than converting
    /// through the local timezone.
    pub fn date_ymd(&self) -> Option<NaiveDate> {
        let date_part = self.date.get(..10)?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    /// Time column text for the meeting tables
    pub fn time_span(&self) -> String {
        match (&self.start_time, &self.end_time) {
            (Some(start), Some(end)) => format!("{} - {}", start, end),
            (Some(start), None) => start.clone(),
            (None, _) => String::from("-"),
        }
    }
}

/// Inclusive date bounds for the meetings list query
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The range the meeting table shows: today through `days` from now
    pub fn next_days(from: NaiveDate, days: i64) -> Self {
        Self {
            start: from,
            end: from + chrono::Duration::days(days),
        }
    }

    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
