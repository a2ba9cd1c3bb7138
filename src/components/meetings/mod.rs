mod client;
pub mod models;
pub mod normalize;
pub mod workflow;

pub use client::MeetingsClient;
pub use models::{DateRange, Meeting};
pub use workflow::MeetingStatus;
