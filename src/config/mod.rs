use std::fs;

use tracing::info;

use crate::ami::{self, AmiRegistry};
use crate::auth::Credentials;
use crate::error::{FilegateError, Result};
use crate::types::*;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

/// Raw shape of the JSON config document.
///
/// ```json
/// {
///   "auth": { "alice": "secret" },
///   "downloadServer": ["/srv/share"],
///   "uploadPath": "/srv/incoming",
///   "amipath": "/opt/ami"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    auth: Option<Credentials>,
    #[serde(default)]
    download_server: Option<Vec<String>>,
    #[serde(default)]
    upload_path: Option<String>,
    #[serde(default)]
    amipath: Option<String>,
}

/// Validated configuration, loaded once at startup.
#[derive(Debug)]
pub struct Config {
    pub auth: Credentials,
    /// Directories served for download, in mount order.
    pub download_roots: Vec<String>,
    /// Upload directory ending in `/`, or empty when uploads are disabled.
    pub upload_path: String,
    pub ami: Option<AmiRegistry>,
}

impl Config {
    /// Load and validate the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| FilegateError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_slice(&bytes)?;

        info!(
            path = %path.display(),
            users = config.auth.len(),
            download_roots = config.download_roots.len(),
            upload = !config.upload_path.is_empty(),
            ami = config.ami.is_some(),
            ami_entries = config.ami.as_ref().map_or(0, AmiRegistry::len),
            "config loaded"
        );
        Ok(config)
    }

    /// Decode a config document. A missing `auth` table or any field of the
    /// wrong type is an error; no partial config is returned.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let file: ConfigFile = serde_json::from_slice(bytes)
            .map_err(|e| FilegateError::InvalidConfig(e.to_string()))?;

        let auth = file.auth.ok_or(FilegateError::MissingAuth)?;

        let upload_path = file
            .upload_path
            .map(normalize_upload_path)
            .unwrap_or_default();

        let ami = file.amipath.as_deref().and_then(ami::load);

        Ok(Self {
            auth,
            download_roots: file.download_server.unwrap_or_default(),
            upload_path,
            ami,
        })
    }

    pub fn upload_enabled(&self) -> bool {
        !self.upload_path.is_empty()
    }
}

fn normalize_upload_path(mut path: String) -> String {
    if !path.is_empty() && !path.ends_with('/') {
        path.push('/');
    }
    path
}
