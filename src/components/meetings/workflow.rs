use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-meeting status state machine.
///
/// `pending` is the only non-terminal state; approval and cancellation are
/// both user-triggered and final. Older backend rows may carry `confirmed`,
/// which reads back as `Approved` and is never written out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Pending,
    #[serde(alias = "confirmed")]
    Approved,
    Cancelled,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Pending => "pending",
            MeetingStatus::Approved => "approved",
            MeetingStatus::Cancelled => "cancelled",
        }
    }

    /// Whether no further transitions are exposed from this state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MeetingStatus::Pending)
    }

    /// States this one may move to; drives which actions the UI offers
    pub fn allowed_transitions(&self) -> &'static [MeetingStatus] {
        match self {
            MeetingStatus::Pending => &[MeetingStatus::Approved, MeetingStatus::Cancelled],
            _ => &[],
        }
    }

    pub fn can_transition_to(&self, target: MeetingStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
