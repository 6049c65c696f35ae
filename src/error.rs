//! Error types and Result aliases for termblog

use std::fmt;
use std::path::PathBuf;

/// Result type alias for termblog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for termblog
#[derive(Debug)]
pub enum Error {
    // === Shell errors ===
    /// No such directory for `cd`
    NoSuchDirectory {
        name: String,
    },

    /// No listed entry matched the requested file for `cat`
    NoSuchFile {
        name: String,
    },

    /// A command was given without its required operand
    MissingArgument {
        command: String,
        operand: String,
    },

    // === Content store errors ===
    /// Remote content operation could not be completed
    ///
    /// Covers transport failures, non-success status codes, and
    /// malformed listing payloads alike.
    Unreachable {
        reason: String,
    },

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to parse configuration
    ConfigParseFailed {
        format: String,
        reason: String,
    },

    /// Configuration file not found
    ConfigNotFound,

    // === Post index errors ===
    /// Failed to scan the posts directory
    ScanFailed {
        path: PathBuf,
        reason: String,
    },

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// Serialization errors
    Serde(serde_json::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    /// Regex compilation errors
    Regex(regex::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Shell errors
            Error::NoSuchDirectory { name } => {
                write!(f, "{}: No such directory", name)
            }
            Error::NoSuchFile { name } => {
                write!(f, "{}: No such file", name)
            }
            Error::MissingArgument { command, operand } => {
                write!(f, "{}: missing {} operand", command, operand)
            }

            // Content store errors
            Error::Unreachable { reason } => {
                write!(f, "{}", reason)
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }
            Error::ConfigNotFound => {
                write!(f, "Configuration file not found")
            }

            // Post index errors
            Error::ScanFailed { path, reason } => {
                write!(f, "Failed to scan '{}': {}", path.display(), reason)
            }

            // I/O and serialization errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),
            Error::Regex(err) => write!(f, "Regex compilation error: {}", err),

            // Generic fallback
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// True when the error names a missing file rather than a transport failure.
    ///
    /// The session renders the two cases differently, so the distinction
    /// must survive the trip through the content store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NoSuchFile { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Regex(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Unreachable {
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for Error {
    fn from(err: git2::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
