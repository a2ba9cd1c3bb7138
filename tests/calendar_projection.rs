use meety::components::calendar::{days_in_month, next_month, prev_month, project};
use meety::components::meetings::{Meeting, MeetingStatus};

fn meeting_on(date: &str) -> Meeting {
    Meeting {
        meeting_id: format!("m-{}", date),
        date: date.to_string(),
        start_time: Some("10:00".to_string()),
        end_time: Some("11:00".to_string()),
        attendee_name: Some("Test Attendee".to_string()),
        email: Some("attendee@example.com".to_string()),
        status: MeetingStatus::Pending,
        notes: None,
    }
}

/// February 2024 is a leap month starting on a Thursday: 4 leading blanks,
/// 29 day cells
#[test]
fn test_leap_february_grid_shape() {
    let grid = project(&[], 2024, 2);

    let blanks = grid.iter().take_while(|cell| cell.day.is_none()).count();
    assert_eq!(blanks, 4);

    let day_cells: Vec<_> = grid.iter().filter(|cell| cell.day.is_some()).collect();
    assert_eq!(day_cells.len(), 29);
    assert_eq!(grid.len(), 4 + 29);

    // Day cells are ordered 1..=29
    for (index, cell) in day_cells.iter().enumerate() {
        assert_eq!(cell.day, Some(index as u32 + 1));
    }
}

/// Leading blanks always equal the Sunday-based weekday of the 1st
#[test]
fn test_leading_blanks_match_first_weekday() {
    // 2025-06-01 is a Sunday: no blanks
    let june = project(&[], 2025, 6);
    assert_eq!(june.iter().take_while(|c| c.day.is_none()).count(), 0);

    // 2025-08-01 is a Friday: five blanks
    let august = project(&[], 2025, 8);
    assert_eq!(august.iter().take_while(|c| c.day.is_none()).count(), 5);
}

/// A meeting inside the month lands in exactly one cell; every other cell
/// stays empty
#[test]
fn test_single_meeting_lands_in_one_cell() {
    let meeting = meeting_on("2024-02-15");
    let grid = project(&[meeting], 2024, 2);

    let mut populated = 0;
    for cell in &grid {
        if cell.meetings.is_empty() {
            continue;
        }
        populated += 1;
        assert_eq!(cell.day, Some(15));
        assert_eq!(cell.meetings[0].meeting_id, "m-2024-02-15");
    }
    assert_eq!(populated, 1);
}

/// Datetime-valued dates match on their calendar fields only
#[test]
fn test_datetime_date_matches_day() {
    let meeting = meeting_on("2025-05-03T14:30:00");
    let grid = project(&[meeting], 2025, 5);

    let cell = grid
        .iter()
        .find(|cell| !cell.meetings.is_empty())
        .expect("meeting should land in a cell");
    assert_eq!(cell.day, Some(3));
}

/// Meetings outside the projected month never appear
#[test]
fn test_out_of_month_meeting_excluded() {
    let meeting = meeting_on("2024-03-01");
    let grid = project(&[meeting], 2024, 2);
    assert!(grid.iter().all(|cell| cell.meetings.is_empty()));
}

/// Identical inputs always produce an identical grid
#[test]
fn test_projection_is_deterministic() {
    let meetings = vec![meeting_on("2024-02-10"), meeting_on("2024-02-29")];

    let first = project(&meetings, 2024, 2);
    let second = project(&meetings, 2024, 2);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.day, b.day);
        assert_eq!(a.meetings.len(), b.meetings.len());
    }
}

#[test]
fn test_month_lengths() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2100, 2), 28); // century rule
    assert_eq!(days_in_month(2000, 2), 29); // 400-year rule
    assert_eq!(days_in_month(2025, 12), 31);
    assert_eq!(days_in_month(2025, 4), 30);
}

#[test]
fn test_month_navigation_wraps_year() {
    assert_eq!(next_month(2024, 12), (2025, 1));
    assert_eq!(next_month(2024, 6), (2024, 7));
    assert_eq!(prev_month(2025, 1), (2024, 12));
    assert_eq!(prev_month(2024, 6), (2024, 5));
}
