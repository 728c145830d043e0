//! Remote-member association and invitation lifecycle.
//!
//! A local record carries a [`atrium_core::UserLink`] naming a directory
//! member by uid. [`UserResolver`] turns that link into a member snapshot
//! (leniently - a dangling uid is normal), and [`InvitationLifecycle`]
//! layers the invite/remind/accept state machine on top.

pub mod lifecycle;
pub mod mailer;
pub mod record;
pub mod resolver;

pub use lifecycle::InvitationLifecycle;
pub use mailer::{Mailer, MailerRegistry, MessageKind};
pub use record::{InvitableRecord, LinkedRecord};
pub use resolver::UserResolver;
