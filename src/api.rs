//! Service object handed to the HTTP layer.
//!
//! [`Portal`] is built once at startup from a loaded [`Config`] and shared
//! (usually behind an `Arc`) by every request handler. Configuration is
//! read-only from then on; only the session registry inside [`AuthRegistry`]
//! changes.

use crate::ami::AmiRegistry;
use crate::auth::{AuthRegistry, User};
use crate::config::Config;
use crate::error::Result;
use crate::session::SessionStore;
use crate::types::*;

#[derive(Debug)]
pub struct Portal {
    auth: AuthRegistry,
    download_roots: Vec<String>,
    upload_path: String,
    ami: Option<AmiRegistry>,
}

impl Portal {
    pub fn new(config: Config) -> Self {
        let Config {
            auth,
            download_roots,
            upload_path,
            ami,
        } = config;
        Self {
            auth: AuthRegistry::new(auth),
            download_roots,
            upload_path,
            ami,
        }
    }

    /// Load the config file at `path` and build the portal from it.
    pub fn load(path: &Path) -> Result<Self> {
        Config::load(path).map(Self::new)
    }

    /// Log a caller in. `Ok(false)` means bad credentials.
    pub fn login<S: SessionStore + ?Sized>(
        &self,
        session: &mut S,
        username: &str,
        password: &str,
        remote_addr: &str,
    ) -> Result<bool> {
        self.auth.login(session, username, password, remote_addr)
    }

    /// Log a caller out. Always `Ok(true)` unless the session cannot be saved.
    pub fn logout<S: SessionStore + ?Sized>(&self, session: &mut S) -> Result<bool> {
        self.auth.logout(session)
    }

    /// The authenticated user behind `session`, or `None` if the caller must
    /// be sent to the login page.
    pub fn current_user<S: SessionStore + ?Sized>(&self, session: &S) -> Option<User> {
        self.auth.current_user(session)
    }

    /// Upload directory with a trailing `/`, empty when uploads are disabled.
    pub fn upload_path(&self) -> &str {
        &self.upload_path
    }

    pub fn upload_enabled(&self) -> bool {
        !self.upload_path.is_empty()
    }

    pub fn download_roots(&self) -> &[String] {
        &self.download_roots
    }

    pub fn ami_command_path(&self) -> Option<&Path> {
        self.ami.as_ref().map(AmiRegistry::command)
    }

    pub fn ami_registry(&self) -> Option<&AmiRegistry> {
        self.ami.as_ref()
    }

    pub fn auth(&self) -> &AuthRegistry {
        &self.auth
    }
}
