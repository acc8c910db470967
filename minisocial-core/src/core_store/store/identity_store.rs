/*
    identity_store.rs - Registered users and the current session

    Holds the user collection and the single active session. Every
    successful mutation persists immediately through the blob store; there
    is no batching. The users and session blobs are independent, so a crash
    between the two saves in sign_up leaves a registered user without a
    session, which the next login repairs.
*/

use crate::core_store::model::{default_avatar_url, normalize_email, Session, User};
use crate::core_store::store::blob_store::{BlobStore, SESSION_KEY, USERS_KEY};
use crate::core_store::store::errors::{StoreError, StoreResult};
use tracing::{debug, info};

/// Email and password of the seeded demo account
const DEMO_NAME: &str = "Guest";
const DEMO_EMAIL: &str = "guest@mini.local";
const DEMO_PASSWORD: &str = "guest";

/// User registry plus the at-most-one active session
#[derive(Debug)]
pub struct IdentityStore {
    blobs: BlobStore,
    users: Vec<User>,
    session: Option<Session>,
}

impl IdentityStore {
    /// Open the store, hydrating users and session from their blobs
    ///
    /// Absent or corrupt blobs hydrate as an empty registry / no session.
    pub fn open(blobs: BlobStore) -> Self {
        let users: Vec<User> = blobs.load(USERS_KEY, Vec::new());
        let session: Option<Session> = blobs.load(SESSION_KEY, None);
        debug!(users = users.len(), has_session = session.is_some(), "identity store opened");
        IdentityStore {
            blobs,
            users,
            session,
        }
    }

    /// Register a new user and log them in
    ///
    /// The email is normalized (trimmed, lowercased) before the uniqueness
    /// check. When no avatar reference is supplied, a default one is derived
    /// from the display name. Returns the newly established session.
    pub fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        avatar: Option<String>,
    ) -> StoreResult<Session> {
        let name = name.trim().to_string();
        let email = normalize_email(email);

        if self.users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail(email));
        }

        let avatar = avatar
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| default_avatar_url(&name));

        let user = User::new(name, email, password.to_string(), avatar);
        self.users.push(user.clone());
        self.blobs.save(USERS_KEY, &self.users)?;

        let session = Session::from_user(&user);
        self.blobs.save(SESSION_KEY, &session)?;
        self.session = Some(session.clone());

        info!(user_id = %user.id, "user signed up");
        Ok(session)
    }

    /// Log in with an email/password pair
    ///
    /// Both the normalized email and the password must match exactly
    /// (passwords are compared in plaintext by design).
    pub fn log_in(&mut self, email: &str, password: &str) -> StoreResult<Session> {
        let email = normalize_email(email);

        let user = self
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(StoreError::InvalidCredentials)?;

        let session = Session::from_user(user);
        self.blobs.save(SESSION_KEY, &session)?;
        self.session = Some(session.clone());

        info!(user_id = %session.id, "user logged in");
        Ok(session)
    }

    /// Clear the current session; idempotent
    pub fn log_out(&mut self) -> StoreResult<()> {
        self.session = None;
        self.blobs.remove(SESSION_KEY)?;
        info!("session cleared");
        Ok(())
    }

    /// The current session, if any
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// All registered users
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Re-read users and session from the blobs
    ///
    /// Reflects out-of-process changes (another tab); last write wins.
    pub fn reload(&mut self) {
        self.users = self.blobs.load(USERS_KEY, Vec::new());
        self.session = self.blobs.load(SESSION_KEY, None);
        debug!(users = self.users.len(), "identity store reloaded");
    }

    /// Seed the demo Guest account when the registry is empty
    ///
    /// Returns true when a user was created. Does not log the demo user in.
    pub fn seed_demo_user(&mut self) -> StoreResult<bool> {
        if !self.users.is_empty() {
            return Ok(false);
        }

        let user = User::new(
            DEMO_NAME.to_string(),
            DEMO_EMAIL.to_string(),
            DEMO_PASSWORD.to_string(),
            default_avatar_url(DEMO_NAME),
        );
        self.users.push(user);
        self.blobs.save(USERS_KEY, &self.users)?;

        info!("seeded demo user");
        Ok(true)
    }
}
