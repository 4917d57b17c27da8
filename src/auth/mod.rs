pub mod user;

use std::collections::hash_map::Entry;
use std::fmt;

use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tracing::{debug, info};

use crate::error::Result;
use crate::session::{self, SessionStore, TOKEN_KEY, USERNAME_KEY};
use crate::types::*;
pub use user::User;

/// Static username -> password table from the `auth` config section.
#[derive(Default, Deserialize)]
#[serde(transparent)]
pub struct Credentials(BTreeMap<String, SecretString>);

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.0
            .insert(username.into(), SecretString::new(password.into()));
    }

    /// True iff `username` exists and `password` matches it exactly.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.0.get(username) {
            Some(expected) => expected
                .expose_secret()
                .as_bytes()
                .ct_eq(password.as_bytes())
                .into(),
            None => false,
        }
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Credentials {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut creds = Credentials::new();
        for (k, v) in iter {
            creds.insert(k, v);
        }
        creds
    }
}

/// Validates logins and tracks live sessions (token -> user).
///
/// Safe to share between request handlers; every access to the session map
/// goes through the lock.
#[derive(Debug)]
pub struct AuthRegistry {
    credentials: Credentials,
    sessions: RwLock<HashMap<String, User>>,
}

impl AuthRegistry {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Check a username/password pair without touching any session state.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        !username.is_empty() && !password.is_empty() && self.credentials.verify(username, password)
    }

    /// Log a caller in.
    ///
    /// Returns `Ok(false)` on bad credentials with nothing changed. On
    /// success the new token and username are written to `session` and saved.
    /// A token the session held before is revoked. `Err` only comes from a
    /// failed session save, in which case the registry and session are put
    /// back as they were.
    pub fn login<S: SessionStore + ?Sized>(
        &self,
        session: &mut S,
        username: &str,
        password: &str,
        remote_addr: &str,
    ) -> Result<bool> {
        if !self.verify(username, password) {
            debug!(user = %username, "login rejected");
            return Ok(false);
        }

        let user = User::new(username, password, remote_addr);
        let ip = user.ip_addr.clone();
        let token = self.register(user);

        let prev_user = session.get(USERNAME_KEY);
        let prev_token = session.get(TOKEN_KEY);
        session.set(USERNAME_KEY, username.to_string());
        session.set(TOKEN_KEY, token.clone());

        if let Err(e) = session.save() {
            self.sessions.write().remove(&token);
            restore(session, USERNAME_KEY, prev_user);
            restore(session, TOKEN_KEY, prev_token);
            return Err(e);
        }

        if let Some(old) = prev_token.filter(|old| *old != token) {
            self.sessions.write().remove(&old);
        }

        info!(user = %username, %ip, "LOGIN");
        Ok(true)
    }

    /// Resolve the caller behind `session`, if it carries a live token
    /// issued to the username it claims.
    pub fn current_user<S: SessionStore + ?Sized>(&self, session: &S) -> Option<User> {
        let username = session.get(USERNAME_KEY)?;
        let token = session.get(TOKEN_KEY)?;

        let sessions = self.sessions.read();
        match sessions.get(&token) {
            Some(user) if user.username == username => Some(user.clone()),
            Some(_) => {
                debug!(user = %username, "session username does not match token owner");
                None
            }
            None => {
                debug!(user = %username, "session token not active");
                None
            }
        }
    }

    /// Log the caller out. Always `Ok(true)`, including for a session that
    /// was never logged in; `Err` only if the session cannot be saved.
    pub fn logout<S: SessionStore + ?Sized>(&self, session: &mut S) -> Result<bool> {
        if let Some(token) = session.get(TOKEN_KEY) {
            if let Some(user) = self.sessions.write().remove(&token) {
                info!(user = %user.username, ip = %user.ip_addr, "LOGOUT");
            }
        }
        session.delete(USERNAME_KEY);
        session.delete(TOKEN_KEY);
        session.save()?;
        Ok(true)
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_active(&self, token: &str) -> bool {
        self.sessions.read().contains_key(token)
    }

    /// Insert `user` under a freshly generated token. A colliding token is
    /// regenerated rather than overwriting the existing entry.
    fn register(&self, user: User) -> String {
        let mut sessions = self.sessions.write();
        loop {
            let token = session::generate_token();
            if let Entry::Vacant(slot) = sessions.entry(token.clone()) {
                slot.insert(user);
                return token;
            }
        }
    }
}

fn restore<S: SessionStore + ?Sized>(session: &mut S, key: &str, value: Option<String>) {
    match value {
        Some(v) => session.set(key, v),
        None => session.delete(key),
    }
}
