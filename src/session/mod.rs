use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;

use crate::error::Result;
use crate::types::*;

/// Session key holding the authenticated username.
pub const USERNAME_KEY: &str = "username";

/// Session key holding the opaque session token.
pub const TOKEN_KEY: &str = "token";

const TOKEN_BYTES: usize = 16;

/// Per-client key/value session provided by the hosting layer.
///
/// Values written with [`set`](SessionStore::set) or removed with
/// [`delete`](SessionStore::delete) only reach the client once
/// [`save`](SessionStore::save) succeeds. Any backend (signed cookie,
/// server-side store) can implement this.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn delete(&mut self, key: &str);
    fn save(&mut self) -> Result<()>;
}

/// Generate a fresh 128-bit session token, URL-safe base64 without padding.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// In-memory session, used by the CLI and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    values: BTreeMap<String, String>,
    saved: BTreeMap<String, String>,
    saves: usize,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values as of the last successful save (what the client would hold).
    pub fn persisted(&self) -> &BTreeMap<String, String> {
        &self.saved
    }

    /// True when there are changes that have not been saved yet.
    pub fn is_dirty(&self) -> bool {
        self.values != self.saved
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn save(&mut self) -> Result<()> {
        self.saved = self.values.clone();
        self.saves += 1;
        Ok(())
    }
}
