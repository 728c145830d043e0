use crate::Result as DirectoryResult;

use atrium_core::{User, UserAttributes};

use async_trait::async_trait;

/// Operations the member directory exposes to consuming applications.
///
/// Lookups return `Ok(None)` when the directory has no matching member;
/// errors are reserved for transport faults, rejected saves and malformed
/// responses.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    async fn find_by_uid(&self, uid: &str) -> DirectoryResult<Option<User>>;

    /// First member registered under `email`, if any.
    async fn find_by_email(&self, email: &str) -> DirectoryResult<Option<User>>;

    async fn create(&self, attrs: &UserAttributes) -> DirectoryResult<User>;

    async fn update(&self, uid: &str, attrs: &UserAttributes) -> DirectoryResult<User>;

    /// Exchange a one-time confirmation token for the member it belongs to.
    /// An unknown token or a malformed response is `Ok(None)`, never an
    /// error: the caller treats both as "credentials not recognised".
    async fn authenticate_by_token(&self, token: &str) -> DirectoryResult<Option<User>>;

    /// Invalidate an authentication token server-side.
    async fn deauthenticate(&self, token: &str) -> DirectoryResult<()>;

    /// Ask the directory to send its own confirmation message to a member.
    /// Used when a record type opts out of deferred confirmation.
    async fn send_confirmation_message(&self, uid: &str) -> DirectoryResult<User> {
        let attrs = UserAttributes {
            send_confirmation: Some(true),
            ..UserAttributes::default()
        };
        self.update(uid, &attrs).await
    }
}
