use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmployeeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Transport { status: u16, message: String },

    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Rejected by server: {}", messages.join(", "))]
    Validation { messages: Vec<String> },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    ActionFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl EmployeeError {
    /// True for failures of the transport layer itself, as opposed to
    /// answers the server gave about a specific record.
    pub fn is_transport(&self) -> bool {
        matches!(self, EmployeeError::Http(_) | EmployeeError::Transport { .. })
    }
}

pub type Result<T> = std::result::Result<T, EmployeeError>;
