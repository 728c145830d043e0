//! One-shot confirmation: token in, confirmed member + destination out.

use crate::{AuthError, Result as AuthResult, SessionManager};

use atrium_core::{User, UserAttributes};
use atrium_directory::DirectoryClient;

use std::sync::Arc;

use log::debug;

/// Outcome of a completed handshake: the saved member and where to send
/// them next. Acting on the destination (render/redirect) is the caller's
/// business.
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub user: User,
    pub destination: String,
}

/// Validates a one-time confirmation token and completes deferred account
/// setup.
///
/// Stateless across calls; the directory invalidates each token server-side,
/// so reuse needs no tracking here.
pub struct ConfirmationHandshake {
    client: Arc<dyn DirectoryClient>,
    sessions: Arc<dyn SessionManager>,
}

impl ConfirmationHandshake {
    pub fn new(client: Arc<dyn DirectoryClient>, sessions: Arc<dyn SessionManager>) -> Self {
        Self { client, sessions }
    }

    /// Exchange `token` for a member, sign them in, persist the supplied
    /// attributes (typically a password) with `confirmed` forced on, and
    /// pick the post-confirmation destination.
    ///
    /// An unrecognised token fails with [`AuthError::CredentialsNotRecognized`]
    /// before any session exists or any attribute is written. Rejected saves
    /// propagate as directory errors.
    pub async fn complete(
        &self,
        token: &str,
        mut attrs: UserAttributes,
        destination: Option<&str>,
    ) -> AuthResult<Confirmation> {
        let Some(user) = self.client.authenticate_by_token(token).await? else {
            return Err(AuthError::credentials_not_recognized());
        };
        let Some(uid) = user.uid.clone() else {
            return Err(AuthError::credentials_not_recognized());
        };

        self.sessions.sign_in_and_remember(&user);

        attrs.confirmed = Some(true);
        let saved = self.client.update(&uid, &attrs).await?;
        debug!("member {} confirmed", uid);

        let destination = destination
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.sessions.default_post_sign_in_path(&saved));

        Ok(Confirmation {
            user: saved,
            destination,
        })
    }

    /// Invalidate the member's authentication token server-side.
    pub async fn sign_out(&self, user: &User) -> AuthResult<()> {
        if let Some(token) = user.authentication_token.as_deref() {
            self.client.deauthenticate(token).await?;
        }
        Ok(())
    }
}
