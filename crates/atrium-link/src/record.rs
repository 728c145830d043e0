use atrium_core::{InvitationState, UserAttributes, UserLink};

/// What a local record supplies so it can reference a directory member.
///
/// Implementors own the persisted `UserLink` column plus whatever local
/// fields seed a brand-new member. Persistence of the record itself stays on
/// the application's side of the seam; the resolver only asks for a `save`
/// when the deferred-save discipline allows one.
pub trait LinkedRecord: Send {
    /// Stable type tag used to key mailers, e.g. "delegate" or "judge".
    fn record_type(&self) -> &'static str;

    fn link(&self) -> &UserLink;

    fn link_mut(&mut self) -> &mut UserLink;

    /// Locally stored email override, when the record keeps its own copy.
    fn local_email(&self) -> Option<&str> {
        None
    }

    /// Name and contact fields used to seed a brand-new directory member.
    fn seed_attributes(&self) -> UserAttributes;

    fn persisted(&self) -> bool;

    /// Whether the record has unsaved local changes beyond the link itself.
    fn changed(&self) -> bool;

    /// Persist the record locally. Returns false when validation fails.
    fn save(&mut self) -> bool;

    /// Whether a member created for this record should skip the directory's
    /// own confirmation message in favour of the invitation flow's
    /// confirmation step. Per-type override point.
    fn defer_confirmation(&self) -> bool {
        true
    }
}

/// A linked record that also tracks the invitation lifecycle.
pub trait InvitableRecord: LinkedRecord {
    fn invitation(&self) -> &InvitationState;

    fn invitation_mut(&mut self) -> &mut InvitationState;
}
