//! Invitation lifecycle fields carried by a local record.

use crate::InvitationStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp-derived invitation state.
///
/// `invited` and `accepted` are independent: acceptance can be recorded
/// without a prior invitation (administrative override), so neither implies
/// the other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvitationState {
    pub invited_at: Option<DateTime<Utc>>,
    pub reminded_at: Option<DateTime<Utc>>,
    pub accepted_at: Option<DateTime<Utc>>,
    /// Set during the operation that recorded acceptance; never persisted.
    #[serde(skip)]
    pub newly_accepted: bool,
    /// Raw form flag. "0" and absence both mean "do not send".
    #[serde(skip)]
    pub send_invitation: Option<String>,
}

impl InvitationState {
    pub fn invited(&self) -> bool {
        self.invited_at.is_some()
    }

    pub fn uninvited(&self) -> bool {
        !self.invited()
    }

    pub fn reminded(&self) -> bool {
        self.reminded_at.is_some()
    }

    pub fn accepted(&self) -> bool {
        self.accepted_at.is_some()
    }

    pub fn unaccepted(&self) -> bool {
        !self.accepted()
    }

    /// Acceptance wins regardless of `invited_at`, since it can be recorded
    /// without an invitation.
    pub fn status(&self) -> InvitationStatus {
        if self.accepted() {
            InvitationStatus::Accepted
        } else if self.invited() {
            InvitationStatus::Invited
        } else {
            InvitationStatus::Uninvited
        }
    }

    /// Whether the owning record's save hook should send an invitation.
    pub fn inviting(&self) -> bool {
        self.unaccepted() && self.send_invitation.as_deref().is_some_and(|flag| flag != "0")
    }
}
