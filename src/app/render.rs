use crate::components::calendar::{month_name, CalendarDay, DAY_NAMES};
use crate::components::chat::{ChatMessage, Sender};
use crate::components::meetings::Meeting;

/// One transcript line, prefixed by who said it
pub fn chat_line(message: &ChatMessage) -> String {
    match message.sender {
        Sender::User => format!("You: {}", message.text),
        Sender::Bot => format!("Meety: {}", message.text),
    }
}

/// The meeting table both admin list views share
pub fn meeting_table(meetings: &[Meeting]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:<15} {:<20} {:<26} {:<10}\n",
        "Date", "Time", "Attendee Name", "Email", "Status"
    ));
    out.push_str(&"-".repeat(86));
    out.push('\n');

    for meeting in meetings {
        let date = meeting
            .date_ymd()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| meeting.date.clone());
        out.push_str(&format!(
            "{:<12} {:<15} {:<20} {:<26} {:<10}\n",
            date,
            meeting.time_span(),
            meeting.attendee_name.as_deref().unwrap_or("-"),
            meeting.email.as_deref().unwrap_or("-"),
            meeting.status.as_str(),
        ));
    }

    out
}

/// The month grid: day-name header, one row per week, a `*` marker on days
/// that have meetings, then a per-day listing below the grid
pub fn calendar_grid(days: &[CalendarDay], year: i32, month: u32) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", month_name(month), year));

    for name in DAY_NAMES {
        out.push_str(&format!("{:^5}", name));
    }
    out.push('\n');

    for week in days.chunks(7) {
        for cell in week {
            match cell.day {
                Some(day) if !cell.meetings.is_empty() => {
                    out.push_str(&format!("{:>3}* ", day));
                }
                Some(day) => {
                    out.push_str(&format!("{:>3}  ", day));
                }
                None => out.push_str("     "),
            }
        }
        out.push('\n');
    }

    for cell in days {
        let Some(day) = cell.day else { continue };
        for meeting in &cell.meetings {
            out.push_str(&format!(
                "{:>3}  {}  {} ({})\n",
                day,
                meeting.time_span(),
                meeting.attendee_name.as_deref().unwrap_or("-"),
                meeting.status.as_str(),
            ));
        }
    }

    out
}
