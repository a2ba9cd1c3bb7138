use crate::components::meetings::Meeting;
use chrono::{Datelike, NaiveDate};

/// Column headers of the month grid, Sunday first
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One cell of the month grid. `day` is `None` for the leading blanks that
/// pad the first week to its weekday offset.
#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub day: Option<u32>,
    pub meetings: Vec<Meeting>,
}

/// Project a meeting list onto a 7-column month grid.
///
/// Emits one blank cell per weekday before the 1st (Sunday = 0), then one
/// cell per day of the month carrying the meetings whose date fields match
/// that (year, month, day) exactly. Pure: same inputs, same grid.
pub fn project(meetings: &[Meeting], year: i32, month: u32) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading_blanks = first.weekday().num_days_from_sunday();
    let mut days = Vec::with_capacity((leading_blanks + days_in_month(year, month)) as usize);

    for _ in 0..leading_blanks {
        days.push(CalendarDay {
            day: None,
            meetings: Vec::new(),
        });
    }

    for day in 1..=days_in_month(year, month) {
        let cell_date = NaiveDate::from_ymd_opt(year, month, day);
        let day_meetings = meetings
            .iter()
            .filter(|meeting| meeting.date_ymd() == cell_date && cell_date.is_some())
            .cloned()
            .collect();

        days.push(CalendarDay {
            day: Some(day),
            meetings: day_meetings,
        });
    }

    days
}

/// Number of days in the given month, leap years included
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let (next_year, next_month) = next_month(year, month);
    let Some(next_first) = NaiveDate::from_ymd_opt(next_year, next_month, 1) else {
        return 0;
    };
    next_first.signed_duration_since(first).num_days() as u32
}

/// The month after (year, month), wrapping the year
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// The month before (year, month), wrapping the year
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// English name of a 1-based month
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}
