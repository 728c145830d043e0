//! Token-based confirmation handshake against the member directory.
//!
//! Completes the out-of-band password-setting flow: a one-time token is
//! exchanged for a member, a session is established, and the member is saved
//! confirmed.

pub mod confirmation;
pub mod error;
pub mod session;

pub use confirmation::{Confirmation, ConfirmationHandshake};
pub use error::{AuthError, Result};
pub use session::SessionManager;
