//! Shared fixtures: an in-memory directory, a host record and a counting
//! mailer.

use atrium_core::{InvitationState, User, UserAttributes, UserLink};
use atrium_directory::{DirectoryClient, DirectoryError, Result as DirectoryResult};
use atrium_link::{InvitableRecord, LinkedRecord, Mailer};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

/// In-memory stand-in for the directory service, counting every call.
#[derive(Default)]
pub struct FakeDirectory {
    pub users: Mutex<HashMap<String, User>>,
    pub fail_lookups: bool,
    pub uid_lookups: AtomicUsize,
    pub email_lookups: AtomicUsize,
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
    next_uid: AtomicUsize,
}

impl FakeDirectory {
    pub fn with_member(user: User) -> Self {
        let fake = Self::default();
        let uid = user.uid.clone().expect("fixture member needs a uid");
        fake.users.lock().unwrap().insert(uid, user);
        fake
    }

    pub fn failing() -> Self {
        Self {
            fail_lookups: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl DirectoryClient for FakeDirectory {
    async fn find_by_uid(&self, uid: &str) -> DirectoryResult<Option<User>> {
        self.uid_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups {
            return Err(DirectoryError::api(500, "directory down".to_string()));
        }
        Ok(self.users.lock().unwrap().get(uid).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DirectoryResult<Option<User>> {
        self.email_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups {
            return Err(DirectoryError::api(500, "directory down".to_string()));
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn create(&self, attrs: &UserAttributes) -> DirectoryResult<User> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        let uid = format!("gen-{}", self.next_uid.fetch_add(1, Ordering::SeqCst) + 1);
        let user = User {
            uid: Some(uid.clone()),
            given_name: attrs.given_name.clone().unwrap_or_default(),
            family_name: attrs.family_name.clone().unwrap_or_default(),
            preferred_name: attrs.preferred_name.clone().unwrap_or_default(),
            email: attrs.email.clone().unwrap_or_default(),
            phone: attrs.phone.clone().unwrap_or_default(),
            confirmed: attrs.confirmed.unwrap_or(false),
            defer_confirmation: attrs.defer_confirmation.unwrap_or(false),
            ..User::default()
        };
        self.users.lock().unwrap().insert(uid, user.clone());
        Ok(user)
    }

    async fn update(&self, uid: &str, attrs: &UserAttributes) -> DirectoryResult<User> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.get_mut(uid) else {
            return Err(DirectoryError::api(404, "no such member".to_string()));
        };
        if let Some(email) = &attrs.email {
            user.email = email.clone();
        }
        if let Some(phone) = &attrs.phone {
            user.phone = phone.clone();
        }
        if let Some(given_name) = &attrs.given_name {
            user.given_name = given_name.clone();
        }
        if let Some(confirmed) = attrs.confirmed {
            user.confirmed = confirmed;
        }
        Ok(user.clone())
    }

    async fn authenticate_by_token(&self, _token: &str) -> DirectoryResult<Option<User>> {
        Ok(None)
    }

    async fn deauthenticate(&self, _token: &str) -> DirectoryResult<()> {
        Ok(())
    }
}

/// A conference delegate: the archetypal record that references a member.
#[derive(Default)]
pub struct Delegate {
    pub link: UserLink,
    pub invitation: InvitationState,
    pub email: Option<String>,
    pub given_name: String,
    pub family_name: String,
    pub persisted: bool,
    pub changed: bool,
    pub saves: usize,
}

impl Delegate {
    pub fn with_uid(uid: &str) -> Self {
        Self {
            link: UserLink::new(Some(uid.to_string())),
            persisted: true,
            ..Self::default()
        }
    }

    pub fn with_email(email: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            given_name: "Ada".to_string(),
            family_name: "Lovelace".to_string(),
            ..Self::default()
        }
    }
}

impl LinkedRecord for Delegate {
    fn record_type(&self) -> &'static str {
        "delegate"
    }

    fn link(&self) -> &UserLink {
        &self.link
    }

    fn link_mut(&mut self) -> &mut UserLink {
        &mut self.link
    }

    fn local_email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn seed_attributes(&self) -> UserAttributes {
        UserAttributes {
            given_name: Some(self.given_name.clone()),
            family_name: Some(self.family_name.clone()),
            email: self.email.clone(),
            ..UserAttributes::default()
        }
    }

    fn persisted(&self) -> bool {
        self.persisted
    }

    fn changed(&self) -> bool {
        self.changed
    }

    fn save(&mut self) -> bool {
        self.saves += 1;
        self.persisted = true;
        self.changed = false;
        true
    }
}

impl InvitableRecord for Delegate {
    fn invitation(&self) -> &InvitationState {
        &self.invitation
    }

    fn invitation_mut(&mut self) -> &mut InvitationState {
        &mut self.invitation
    }
}

/// Mailer that counts deliveries and can be told to fail.
pub struct CountingMailer {
    pub deliveries: AtomicUsize,
    pub succeed: AtomicBool,
}

impl Default for CountingMailer {
    fn default() -> Self {
        Self {
            deliveries: AtomicUsize::new(0),
            succeed: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl Mailer for CountingMailer {
    async fn deliver(&self, _user: &User) -> bool {
        self.deliveries.fetch_add(1, Ordering::SeqCst);
        self.succeed.load(Ordering::SeqCst)
    }
}

pub fn member(uid: &str, email: &str) -> User {
    User {
        uid: Some(uid.to_string()),
        given_name: "Ada".to_string(),
        family_name: "Lovelace".to_string(),
        email: email.to_string(),
        ..User::default()
    }
}
