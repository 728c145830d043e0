//! Directory member snapshot - the remote user record as the service returns it.

use crate::UserImages;

use serde::{Deserialize, Serialize};

/// Honorifics that carry no information worth displaying.
const GENERIC_HONORIFICS: [&str; 5] = ["Mr", "Mrs", "Ms", "Miss", "Mx"];

/// A member of the remote directory.
///
/// The directory assigns `uid`; local code never invents one. Everything here
/// is a wire snapshot, not a locally persisted row, and the member's
/// lifecycle is entirely controlled by the remote service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub uid: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    /// Preferred display variant, e.g. a native-script or chosen name.
    #[serde(default)]
    pub preferred_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub unconfirmed_email: Option<String>,
    #[serde(default)]
    pub permission_codes: Vec<String>,
    #[serde(default)]
    pub images: UserImages,
    /// Suppresses the directory's own confirmation message so the invitation
    /// flow's confirmation step is used instead.
    #[serde(default)]
    pub defer_confirmation: bool,
    #[serde(default)]
    pub authentication_token: Option<String>,
}

impl User {
    /// True until the directory has assigned a uid.
    pub fn new_member(&self) -> bool {
        self.uid.is_none()
    }

    pub fn name(&self) -> String {
        join_present(&[&self.given_name, &self.family_name])
    }

    pub fn formal_name(&self) -> String {
        join_present(&[&self.title, &self.given_name, &self.family_name])
    }

    pub fn informal_name(&self) -> String {
        self.given_name.trim().to_string()
    }

    /// The name the member actually goes by, when they have told us.
    pub fn colloquial_name(&self) -> String {
        let preferred = self.preferred_name.trim();
        if preferred.is_empty() {
            self.informal_name()
        } else {
            preferred.to_string()
        }
    }

    /// The member's title, unless it is a generic honorific nobody needs
    /// to see.
    pub fn title_if_applicable(&self) -> Option<&str> {
        let title = self.title.trim();
        if title.is_empty() || GENERIC_HONORIFICS.contains(&title) {
            None
        } else {
            Some(title)
        }
    }

    pub fn unconfirmed(&self) -> bool {
        !self.confirmed
    }

    pub fn has_unconfirmed_email(&self) -> bool {
        self.unconfirmed_email
            .as_deref()
            .is_some_and(|email| !email.is_empty())
    }

    pub fn permitted(&self, code: &str) -> bool {
        self.permission_codes.iter().any(|c| c == code)
    }

    /// Whether the member may sign in to the named consuming service.
    pub fn can_sign_in(&self, service_name: &str) -> bool {
        self.permitted(&format!("{}.login", service_name))
    }

    pub fn is_admin(&self, service_name: &str) -> bool {
        self.permitted(&format!("{}.admin", service_name))
    }

    pub fn image(&self) -> Option<&str> {
        self.images.standard.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.images.icon.as_deref()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.thumbnail.as_deref()
    }
}

fn join_present(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
