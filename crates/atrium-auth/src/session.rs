use atrium_core::User;

/// The application's session layer, as the handshake needs to see it.
pub trait SessionManager: Send + Sync {
    /// Establish a signed-in, remembered session for the member.
    fn sign_in_and_remember(&self, user: &User);

    /// Where a freshly signed-in member lands when the caller supplied no
    /// destination.
    fn default_post_sign_in_path(&self, user: &User) -> String;
}
