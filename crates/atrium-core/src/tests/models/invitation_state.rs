use crate::{InvitationState, InvitationStatus};

use chrono::Utc;

#[test]
fn test_status_uninvited_by_default() {
    let state = InvitationState::default();
    assert_eq!(state.status(), InvitationStatus::Uninvited);
}

#[test]
fn test_status_invited_after_stamp() {
    let state = InvitationState {
        invited_at: Some(Utc::now()),
        ..InvitationState::default()
    };
    assert_eq!(state.status(), InvitationStatus::Invited);
}

#[test]
fn test_status_accepted_without_invitation() {
    // Acceptance can be recorded administratively with no invitation on file.
    let state = InvitationState {
        accepted_at: Some(Utc::now()),
        ..InvitationState::default()
    };
    assert_eq!(state.status(), InvitationStatus::Accepted);
    assert!(state.uninvited());
}

#[test]
fn test_inviting_requires_flag() {
    let state = InvitationState::default();
    assert!(!state.inviting());
}

#[test]
fn test_inviting_rejects_falsy_string() {
    let state = InvitationState {
        send_invitation: Some("0".to_string()),
        ..InvitationState::default()
    };
    assert!(!state.inviting());
}

#[test]
fn test_inviting_accepts_truthy_flag() {
    let state = InvitationState {
        send_invitation: Some("1".to_string()),
        ..InvitationState::default()
    };
    assert!(state.inviting());
}

#[test]
fn test_inviting_false_once_accepted() {
    let state = InvitationState {
        accepted_at: Some(Utc::now()),
        send_invitation: Some("1".to_string()),
        ..InvitationState::default()
    };
    assert!(!state.inviting());
}

#[test]
fn test_status_display() {
    assert_eq!(InvitationStatus::Accepted.to_string(), "accepted");
    assert_eq!(
        "invited".parse::<InvitationStatus>().unwrap(),
        InvitationStatus::Invited
    );
    assert!("pending".parse::<InvitationStatus>().is_err());
}
