//! Registry of outbound invitation/reminder mailers, keyed by record type.

use atrium_core::User;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Invitation,
    Reminder,
}

/// A configured outbound message for one `(kind, record type)` pair.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver the message to the member. Reports whether the send went out;
    /// a false here means the lifecycle leaves its timestamps unstamped so
    /// the operation can be retried.
    async fn deliver(&self, user: &User) -> bool;
}

/// Explicit registry resolved at startup.
///
/// A missing registration means "this record type does not do that kind of
/// message" - a legitimate answer, never an error.
#[derive(Default)]
pub struct MailerRegistry {
    handlers: HashMap<(MessageKind, String), Arc<dyn Mailer>>,
}

impl MailerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        kind: MessageKind,
        record_type: &str,
        mailer: Arc<dyn Mailer>,
    ) -> &mut Self {
        self.handlers.insert((kind, record_type.to_string()), mailer);
        self
    }

    pub fn get(&self, kind: MessageKind, record_type: &str) -> Option<Arc<dyn Mailer>> {
        self.handlers.get(&(kind, record_type.to_string())).cloned()
    }

    pub fn supports(&self, kind: MessageKind, record_type: &str) -> bool {
        self.handlers.contains_key(&(kind, record_type.to_string()))
    }
}
