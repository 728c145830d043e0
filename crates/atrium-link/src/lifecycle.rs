//! The invite / remind / accept state machine.

use crate::{InvitableRecord, MailerRegistry, MessageKind, UserResolver};

use chrono::Utc;
use log::debug;

/// Drives a record's invitation lifecycle.
///
/// Every operation is a silent no-op when its guard fails: re-triggering an
/// invitation against an already-invited record is a deliberate `remind`,
/// not a repeated `invite`, and a record type with no registered mailer
/// simply does not have the feature.
pub struct InvitationLifecycle {
    resolver: UserResolver,
    mailers: MailerRegistry,
}

impl InvitationLifecycle {
    pub fn new(resolver: UserResolver, mailers: MailerRegistry) -> Self {
        Self { resolver, mailers }
    }

    pub fn resolver(&self) -> &UserResolver {
        &self.resolver
    }

    /// Send the invitation and stamp `invited_at`.
    ///
    /// Guards: not yet invited, resolves to a member, and an invitation
    /// mailer is registered for the record type. The timestamp is only
    /// stamped when delivery succeeds, so a failed send can be retried.
    pub async fn invite<R: InvitableRecord>(&self, record: &mut R) -> bool {
        if record.invitation().invited() {
            return false;
        }
        let Some(user) = self.resolver.resolve(record).await else {
            return false;
        };
        let Some(mailer) = self.mailers.get(MessageKind::Invitation, record.record_type()) else {
            return false;
        };

        if !mailer.deliver(&user).await {
            debug!(
                "invitation to {} record not delivered; leaving uninvited",
                record.record_type()
            );
            return false;
        }

        record.invitation_mut().invited_at = Some(Utc::now());
        record.save();
        true
    }

    /// Re-send to an already-invited record and stamp `reminded_at`.
    pub async fn remind<R: InvitableRecord>(&self, record: &mut R) -> bool {
        if record.invitation().uninvited() {
            return false;
        }
        let Some(user) = self.resolver.resolve(record).await else {
            return false;
        };
        let Some(mailer) = self.mailers.get(MessageKind::Reminder, record.record_type()) else {
            return false;
        };

        if !mailer.deliver(&user).await {
            return false;
        }

        record.invitation_mut().reminded_at = Some(Utc::now());
        record.save();
        true
    }

    /// Record acceptance. Pure local state change; needs no member, no
    /// mailer and no prior invitation.
    pub fn accept<R: InvitableRecord>(&self, record: &mut R) -> bool {
        if record.invitation().accepted() {
            return false;
        }

        record.invitation_mut().accepted_at = Some(Utc::now());
        record.invitation_mut().newly_accepted = true;
        record.save();
        true
    }

    /// Save-hook helper: invite when the record's `send_invitation` form
    /// flag asks for it.
    pub async fn invite_if_inviting<R: InvitableRecord>(&self, record: &mut R) -> bool {
        if record.invitation().inviting() {
            self.invite(record).await
        } else {
            false
        }
    }
}
