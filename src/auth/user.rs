use secrecy::{ExposeSecret, SecretString};

use crate::types::*;

/// An authenticated principal, captured at login time.
#[derive(Debug)]
pub struct User {
    pub username: String,
    /// The password as supplied at login.
    pub password: SecretString,
    /// Client address without the port.
    pub ip_addr: String,
    pub logged_in_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: &str, password: &str, remote_addr: &str) -> Self {
        Self {
            username: username.to_string(),
            password: SecretString::new(password.to_string()),
            ip_addr: ip_from_remote_addr(remote_addr).to_string(),
            logged_in_at: Utc::now(),
        }
    }

    pub fn actor_name(&self) -> String {
        format!("{}@{}", self.username, self.ip_addr)
    }
}

impl Clone for User {
    fn clone(&self) -> Self {
        Self {
            username: self.username.clone(),
            password: SecretString::new(self.password.expose_secret().clone()),
            ip_addr: self.ip_addr.clone(),
            logged_in_at: self.logged_in_at,
        }
    }
}

/// Everything before the first `:` of a `host:port` remote address. An
/// address with no `:` is returned whole.
pub fn ip_from_remote_addr(remote_addr: &str) -> &str {
    remote_addr
        .split_once(':')
        .map_or(remote_addr, |(host, _)| host)
}
