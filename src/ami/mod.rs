//! Registry of managed hosts parsed out of the legacy ami control file.
//!
//! The control file lives at `<amipath>/config.ini`. Only lines starting
//! with [`TAG_MARKER`] carry entries; everything else in the file belongs to
//! the external tool and is ignored here.

use std::fs;

use tracing::{debug, warn};

use crate::types::*;

/// Prefix identifying a directive line.
pub const TAG_MARKER: &str = "<@esxi_info";

/// Control file name inside the ami directory.
pub const CONTROL_FILE: &str = "config.ini";

/// Command script name inside the ami directory.
pub const COMMAND_FILE: &str = "excli.sh";

const ASSIGN: &str = "@>=";

/// Parsed id -> name mapping plus the path of the management command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmiRegistry {
    command: PathBuf,
    servers: HashMap<String, String>,
}

impl AmiRegistry {
    /// Parse the contents of a control file. Never fails: lines that are not
    /// directives are ignored and malformed directives are skipped.
    pub fn parse(contents: &str, command: PathBuf) -> Self {
        let mut servers = HashMap::new();
        for (lineno, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            let Some(payload) = line.strip_prefix(TAG_MARKER) else {
                continue;
            };
            match parse_directive(payload) {
                Some((id, name)) => {
                    debug!(line = lineno + 1, %id, %name, "ami directive");
                    servers.insert(id, name);
                }
                None => warn!(line = lineno + 1, "skipping malformed ami directive"),
            }
        }
        Self { command, servers }
    }

    /// Path of the external management command (`<amipath>/excli.sh`).
    pub fn command(&self) -> &Path {
        &self.command
    }

    /// The full id -> name mapping.
    pub fn servers(&self) -> &HashMap<String, String> {
        &self.servers
    }

    /// Look up the source name recorded for an id.
    pub fn name_for(&self, id: &str) -> Option<&str> {
        self.servers.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

/// Split a directive payload (the line with the tag marker removed) into
/// `(id, name)`.
///
/// `.host1@>=val@id123;comment` yields `("id123", "host1")`: the name is the
/// text before `@>=` minus one leading dot, the id is the text after it with
/// any `;` comment dropped and everything up to the first `@` removed.
///
/// Returns `None` when the payload has no `@>=` or the id comes out empty.
pub fn parse_directive(payload: &str) -> Option<(String, String)> {
    let (left, right) = payload.split_once(ASSIGN)?;

    let name = left.strip_prefix('.').unwrap_or(left);

    let mut id = right;
    if !id.is_empty() {
        id = id.split_once(';').map_or(id, |(before, _)| before);
        if !id.is_empty() {
            if let Some((_, after)) = id.split_once('@') {
                id = after;
            }
        }
    }

    if id.is_empty() {
        return None;
    }
    Some((id.to_string(), name.to_string()))
}

/// Load the registry from `<dir>/config.ini`.
///
/// Returns `None` when `dir` is empty or the control file cannot be read;
/// callers carry on without ami support. A readable file with no directives
/// yields an empty registry.
pub fn load(dir: &str) -> Option<AmiRegistry> {
    if dir.is_empty() {
        return None;
    }

    let dir = Path::new(dir);
    let control = dir.join(CONTROL_FILE);
    let bytes = match fs::read(&control) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %control.display(), error = %e, "ami control file unavailable");
            return None;
        }
    };

    let contents = String::from_utf8_lossy(&bytes);
    Some(AmiRegistry::parse(&contents, dir.join(COMMAND_FILE)))
}
