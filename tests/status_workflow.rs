use meety::components::meetings::MeetingStatus;

/// Pending meetings can be approved or cancelled, nothing else
#[test]
fn test_pending_transitions() {
    let pending = MeetingStatus::Pending;
    assert!(!pending.is_terminal());
    assert!(pending.can_transition_to(MeetingStatus::Approved));
    assert!(pending.can_transition_to(MeetingStatus::Cancelled));
    assert!(!pending.can_transition_to(MeetingStatus::Pending));
    assert_eq!(
        pending.allowed_transitions(),
        &[MeetingStatus::Approved, MeetingStatus::Cancelled]
    );
}

/// Approval and cancellation are terminal; no way back to pending
#[test]
fn test_terminal_states() {
    for status in [MeetingStatus::Approved, MeetingStatus::Cancelled] {
        assert!(status.is_terminal());
        assert!(status.allowed_transitions().is_empty());
        assert!(!status.can_transition_to(MeetingStatus::Pending));
        assert!(!status.can_transition_to(MeetingStatus::Approved));
        assert!(!status.can_transition_to(MeetingStatus::Cancelled));
    }
}

/// Statuses serialize lowercase and only ever emit `approved`, while
/// `confirmed` is still accepted on the way in
#[test]
fn test_status_serde() {
    assert_eq!(
        serde_json::to_string(&MeetingStatus::Approved).unwrap(),
        "\"approved\""
    );
    assert_eq!(
        serde_json::to_string(&MeetingStatus::Pending).unwrap(),
        "\"pending\""
    );

    let confirmed: MeetingStatus = serde_json::from_str("\"confirmed\"").unwrap();
    assert_eq!(confirmed, MeetingStatus::Approved);

    let cancelled: MeetingStatus = serde_json::from_str("\"cancelled\"").unwrap();
    assert_eq!(cancelled, MeetingStatus::Cancelled);
}

#[test]
fn test_status_display() {
    assert_eq!(MeetingStatus::Pending.to_string(), "pending");
    assert_eq!(MeetingStatus::Approved.to_string(), "approved");
    assert_eq!(MeetingStatus::Cancelled.to_string(), "cancelled");
}
