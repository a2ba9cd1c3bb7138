use meety::components::meetings::normalize::{meetings_from_response, normalize_response};
use meety::components::meetings::MeetingStatus;
use serde_json::json;

/// A plain value passes through normalization unchanged
#[test]
fn test_plain_object_unchanged() {
    let payload = json!([
        { "meetingId": "m1", "date": "2025-05-01", "status": "pending" }
    ]);

    let normalized = normalize_response(payload.clone()).unwrap();
    assert_eq!(normalized, payload);
}

/// A JSON-encoded string body is parsed to the value it encodes
#[test]
fn test_json_string_parsed() {
    let inner = json!([
        { "meetingId": "m1", "date": "2025-05-01", "status": "pending" }
    ]);
    let payload = json!(inner.to_string());

    let normalized = normalize_response(payload).unwrap();
    assert_eq!(normalized, inner);
}

/// An envelope `{message: "<json>"}` yields the parsed inner value
#[test]
fn test_message_envelope_parsed() {
    let inner = json!([
        { "meetingId": "m2", "date": "2025-06-10", "status": "cancelled" }
    ]);
    let payload = json!({ "message": inner.to_string() });

    let normalized = normalize_response(payload).unwrap();
    assert_eq!(normalized, inner);
}

/// An envelope whose message is not JSON is a serialization error
#[test]
fn test_message_envelope_with_plain_text_fails() {
    let payload = json!({ "message": "Internal server error" });
    assert!(normalize_response(payload).is_err());
}

/// An object with a non-string message field is used verbatim
#[test]
fn test_non_string_message_field_passes_through() {
    let payload = json!({ "message": { "nested": true } });
    let normalized = normalize_response(payload.clone()).unwrap();
    assert_eq!(normalized, payload);
}

/// Full decode path: enveloped list into typed meetings, including the
/// backend's alternate field names
#[test]
fn test_meetings_decode_with_field_aliases() {
    let inner = json!([
        {
            "meetingId": "m1",
            "date": "2025-05-01T09:00:00",
            "time": "09:00",
            "subject": "Kickoff",
            "attendees": "alice@example.com",
            "status": "confirmed"
        },
        {
            "meetingId": "m2",
            "date": "2025-05-02",
            "startTime": "14:00",
            "endTime": "15:00",
            "attendeeName": "Bob",
            "email": "bob@example.com",
            "status": "pending",
            "notes": "bring slides"
        }
    ]);
    let payload = json!({ "message": inner.to_string() });

    let meetings = meetings_from_response(payload).unwrap();
    assert_eq!(meetings.len(), 2);

    assert_eq!(meetings[0].meeting_id, "m1");
    assert_eq!(meetings[0].start_time.as_deref(), Some("09:00"));
    assert_eq!(meetings[0].attendee_name.as_deref(), Some("Kickoff"));
    assert_eq!(meetings[0].email.as_deref(), Some("alice@example.com"));
    // confirmed reads back as approved
    assert_eq!(meetings[0].status, MeetingStatus::Approved);

    assert_eq!(meetings[1].time_span(), "14:00 - 15:00");
    assert_eq!(meetings[1].notes.as_deref(), Some("bring slides"));
}
