//! Lenient, memoized resolution of a record's directory member.

use crate::LinkedRecord;

use atrium_core::{User, UserAttributes};
use atrium_directory::{DirectoryClient, Result as DirectoryResult};

use std::sync::Arc;

use log::{debug, warn};

/// Resolves, creates and assigns the directory member behind a record's
/// `UserLink`.
pub struct UserResolver {
    client: Arc<dyn DirectoryClient>,
}

impl UserResolver {
    pub fn new(client: Arc<dyn DirectoryClient>) -> Self {
        Self { client }
    }

    /// Resolve the member this record points at, memoizing the answer on the
    /// record's link.
    ///
    /// Lookup faults are absorbed here, and only here: a uid that matches no
    /// member (someone deleted remotely), a transport fault or a bad payload
    /// all log a warning and resolve to `None`. A dangling reference must
    /// not break the local record.
    pub async fn resolve<R: LinkedRecord>(&self, record: &mut R) -> Option<User> {
        if let Some(resolution) = record.link().resolution() {
            return resolution.clone();
        }

        let resolved = self.look_up(record).await;
        record.link_mut().memoize(resolved.clone());
        resolved
    }

    async fn look_up<R: LinkedRecord>(&self, record: &R) -> Option<User> {
        if let Some(uid) = record.link().uid() {
            return match self.client.find_by_uid(uid).await {
                Ok(Some(user)) => Some(user),
                Ok(None) => {
                    warn!(
                        "{} record has uid {} that corresponds to no known directory member. \
                         Perhaps someone has been deleted? Ignoring.",
                        record.record_type(),
                        uid
                    );
                    None
                }
                Err(err) => {
                    warn!(
                        "{} record could not resolve uid {}: {}. Ignoring.",
                        record.record_type(),
                        uid,
                        err
                    );
                    None
                }
            };
        }

        if let Some(email) = record.local_email() {
            return match self.client.find_by_email(email).await {
                Ok(found) => found,
                Err(err) => {
                    warn!(
                        "{} record could not look up member by email: {}. Ignoring.",
                        record.record_type(),
                        err
                    );
                    None
                }
            };
        }

        None
    }

    /// Resolve, or create a member seeded from the record's own fields.
    ///
    /// Returns `Ok(None)` when the record has no email - that is the one
    /// field a member cannot be created without. Create failures (rejected
    /// attributes, transport) propagate to the caller.
    ///
    /// Two racing calls for the same unresolved email can each create a
    /// member; the directory does not deduplicate. Known, accepted race.
    pub async fn find_or_create<R: LinkedRecord>(
        &self,
        record: &mut R,
    ) -> DirectoryResult<Option<User>> {
        if let Some(user) = self.resolve(record).await {
            return Ok(Some(user));
        }

        let Some(email) = record.local_email().map(str::to_string) else {
            return Ok(None);
        };

        let mut attrs = record.seed_attributes();
        if attrs.email.is_none() {
            attrs.email = Some(email);
        }

        let user = self.client.create(&attrs).await?;
        debug!(
            "created directory member {} for {} record",
            user.uid.as_deref().unwrap_or("?"),
            record.record_type()
        );

        if let Some(uid) = user.uid.as_deref() {
            record.link_mut().set_uid(uid);
        }
        record.link_mut().memoize(Some(user.clone()));
        Ok(Some(user))
    }

    /// Point the record at an existing member.
    ///
    /// The record is saved immediately only when it is already persisted and
    /// has no other pending changes; otherwise this is assumed to be part of
    /// a larger compound save and persistence is left to the caller. Returns
    /// whether a save ran.
    pub fn assign<R: LinkedRecord>(&self, record: &mut R, user: User) -> bool {
        let also_save = record.persisted() && !record.changed();

        if let Some(uid) = user.uid.as_deref() {
            record.link_mut().set_uid(uid);
        }
        record.link_mut().memoize(Some(user));

        if also_save { record.save() } else { false }
    }

    /// Nested-attributes contract: update the member if the record resolves
    /// to one, otherwise create a member from the attributes and assign it.
    ///
    /// The create path fills in `defer_confirmation` from the record so the
    /// directory holds its own confirmation message until the invitation
    /// flow sends one.
    pub async fn assign_attributes<R: LinkedRecord>(
        &self,
        record: &mut R,
        mut attrs: UserAttributes,
    ) -> DirectoryResult<()> {
        if attrs.is_empty() {
            return Ok(());
        }

        if let Some(user) = self.resolve(record).await
            && let Some(uid) = user.uid.as_deref()
        {
            let updated = self.client.update(uid, &attrs).await?;
            record.link_mut().memoize(Some(updated));
            return Ok(());
        }

        attrs.reverse_merge(UserAttributes {
            defer_confirmation: Some(record.defer_confirmation()),
            ..UserAttributes::default()
        });

        let user = self.client.create(&attrs).await?;
        self.assign(record, user);
        Ok(())
    }

    /// Whether the record resolves to a member at all.
    pub async fn linked<R: LinkedRecord>(&self, record: &mut R) -> bool {
        self.resolve(record).await.is_some()
    }

    /// A record can be invited iff it has (or can lazily acquire) a member.
    pub async fn invitable<R: LinkedRecord>(&self, record: &mut R) -> bool {
        self.linked(record).await
    }

    /// The record's email: the local override when one is stored, else the
    /// member's.
    pub async fn email<R: LinkedRecord>(&self, record: &mut R) -> Option<String> {
        if let Some(email) = record.local_email() {
            return Some(email.to_string());
        }
        self.resolve(record)
            .await
            .map(|user| user.email)
            .filter(|email| !email.is_empty())
    }

    pub async fn name<R: LinkedRecord>(&self, record: &mut R) -> Option<String> {
        self.resolve(record).await.map(|user| user.name())
    }

    pub async fn formal_name<R: LinkedRecord>(&self, record: &mut R) -> Option<String> {
        self.resolve(record).await.map(|user| user.formal_name())
    }

    pub async fn informal_name<R: LinkedRecord>(&self, record: &mut R) -> Option<String> {
        self.resolve(record).await.map(|user| user.informal_name())
    }

    pub async fn colloquial_name<R: LinkedRecord>(&self, record: &mut R) -> Option<String> {
        self.resolve(record).await.map(|user| user.colloquial_name())
    }

    pub async fn title_if_applicable<R: LinkedRecord>(&self, record: &mut R) -> Option<String> {
        self.resolve(record)
            .await
            .and_then(|user| user.title_if_applicable().map(str::to_string))
    }

    pub async fn icon<R: LinkedRecord>(&self, record: &mut R) -> Option<String> {
        self.resolve(record).await.and_then(|user| user.images.icon)
    }

    pub async fn confirmed<R: LinkedRecord>(&self, record: &mut R) -> bool {
        self.resolve(record)
            .await
            .map(|user| user.confirmed)
            .unwrap_or(false)
    }
}
