//! Reference from a local record to a directory member.

use crate::User;

use serde::{Deserialize, Serialize};

/// A uid-keyed reference to a directory member.
///
/// This is a lookup key, never an ownership edge: there is no foreign-key
/// constraint behind it, and a dangling uid (member deleted remotely) is
/// normal rather than an error. Resolution results are memoized for the
/// lifetime of the in-memory instance only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserLink {
    uid: Option<String>,
    /// Outer `None` = not yet evaluated; `Some(None)` = looked up, nobody
    /// there. Negative results are cached too, so derived reads never
    /// re-fetch.
    #[serde(skip)]
    resolved: Option<Option<User>>,
}

impl UserLink {
    pub fn new(uid: Option<String>) -> Self {
        Self {
            uid: uid.filter(|u| !u.is_empty()),
            resolved: None,
        }
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub fn has_uid(&self) -> bool {
        self.uid.is_some()
    }

    /// An empty string means "no value was supplied", not "clear the link";
    /// only a non-empty uid overwrites the stored reference.
    pub fn set_uid(&mut self, uid: &str) {
        if !uid.is_empty() {
            if self.uid.as_deref() != Some(uid) {
                self.resolved = None;
            }
            self.uid = Some(uid.to_string());
        }
    }

    /// The memoized resolution, if one has happened on this instance.
    pub fn resolution(&self) -> Option<&Option<User>> {
        self.resolved.as_ref()
    }

    pub fn memoize(&mut self, user: Option<User>) {
        self.resolved = Some(user);
    }

    pub fn cached_user(&self) -> Option<&User> {
        self.resolved.as_ref().and_then(|r| r.as_ref())
    }
}
