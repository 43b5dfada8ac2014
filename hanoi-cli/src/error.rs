//! Errors surfaced by the shell, and their exit codes.
//!
//! | Code | Meaning                         |
//! |------|---------------------------------|
//! |  0   | Success                         |
//! |  1   | Internal / I/O error            |
//! |  2   | Malformed command               |
//! |  3   | Path not found                  |
//! |  4   | Invalid puzzle configuration    |
//! |  5   | Move rejected by the rules      |

use hanoi_core::HanoiError;
use thiserror::Error;
use tracing::{error, warn};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid command: {0}")]
    Usage(String),

    #[error("{path}: no such file or directory")]
    NotFound { path: String },

    #[error("{path}: not a directory")]
    NotADirectory { path: String },

    #[error("cannot move {src} to {dst}: {reason}")]
    InvalidRename {
        src: String,
        dst: String,
        reason: &'static str,
    },

    #[error("invalid configuration: {0}")]
    Config(#[source] HanoiError),

    #[error("move rejected: {0}")]
    Rejected(#[source] HanoiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<HanoiError> for CliError {
    fn from(err: HanoiError) -> Self {
        if err.is_fatal() {
            CliError::Config(err)
        } else {
            CliError::Rejected(err)
        }
    }
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Io(_) => 1,
            CliError::Usage(_) => 2,
            CliError::NotFound { .. } | CliError::NotADirectory { .. } => 3,
            CliError::Config(_) => 4,
            CliError::InvalidRename { .. } | CliError::Rejected(_) => 5,
        }
    }

    /// Emit a log event at a severity matching the error class.
    pub fn log(&self) {
        match self {
            CliError::Io(_) | CliError::Config(_) => error!(code = self.exit_code(), "{self}"),
            _ => warn!(code = self.exit_code(), "{self}"),
        }
    }
}
