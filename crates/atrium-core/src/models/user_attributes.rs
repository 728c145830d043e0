//! Partial member attributes for create, update and nested-form flows.

use serde::{Deserialize, Serialize};

/// A partial set of member attributes.
///
/// `None` means "not supplied", so an update sends only what the caller
/// actually set. `password` and `send_confirmation` are write-only fields the
/// directory accepts but never returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defer_confirmation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_confirmation: Option<bool>,
}

impl UserAttributes {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fill in any field the caller did not supply from `defaults`.
    /// Supplied values always win.
    pub fn reverse_merge(&mut self, defaults: UserAttributes) {
        fn fill<T>(slot: &mut Option<T>, default: Option<T>) {
            if slot.is_none() {
                *slot = default;
            }
        }

        fill(&mut self.title, defaults.title);
        fill(&mut self.given_name, defaults.given_name);
        fill(&mut self.family_name, defaults.family_name);
        fill(&mut self.preferred_name, defaults.preferred_name);
        fill(&mut self.email, defaults.email);
        fill(&mut self.phone, defaults.phone);
        fill(&mut self.password, defaults.password);
        fill(&mut self.confirmed, defaults.confirmed);
        fill(&mut self.defer_confirmation, defaults.defer_confirmation);
        fill(&mut self.send_confirmation, defaults.send_confirmation);
    }
}
