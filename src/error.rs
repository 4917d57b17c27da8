use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilegateError {
    #[error("Cannot read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid config: missing required `auth` table")]
    MissingAuth,

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl FilegateError {
    /// Return a typed exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            FilegateError::ConfigRead { .. } => 7,
            FilegateError::InvalidConfig(_) => 7,
            FilegateError::MissingAuth => 7,
            FilegateError::AuthFailed(_) => 2,
            FilegateError::Session(_) => 1,
            FilegateError::Serialization(_) => 1,
            FilegateError::Io(_) => 1,
            FilegateError::Other(_) => 1,
        }
    }

    /// Return a string error code identifier.
    pub fn error_code(&self) -> &'static str {
        match self {
            FilegateError::ConfigRead { .. } => "config_unreadable",
            FilegateError::InvalidConfig(_) => "invalid_config",
            FilegateError::MissingAuth => "missing_auth",
            FilegateError::AuthFailed(_) => "auth_failed",
            FilegateError::Session(_) => "session_error",
            FilegateError::Serialization(_) => "serialization_error",
            FilegateError::Io(_) => "io_error",
            FilegateError::Other(_) => "error",
        }
    }

    /// Whether this error must abort startup.
    pub fn is_fatal_config(&self) -> bool {
        matches!(
            self,
            FilegateError::ConfigRead { .. }
                | FilegateError::InvalidConfig(_)
                | FilegateError::MissingAuth
        )
    }
}

/// JSON error response for --json mode.
#[derive(Serialize)]
pub struct JsonError {
    pub error: JsonErrorDetail,
}

#[derive(Serialize)]
pub struct JsonErrorDetail {
    pub code: String,
    pub message: String,
    pub exit_code: i32,
}

impl JsonError {
    pub fn from_error(e: &FilegateError) -> Self {
        Self {
            error: JsonErrorDetail {
                code: e.error_code().to_string(),
                message: e.to_string(),
                exit_code: e.exit_code(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, FilegateError>;
