//! Error types shared by every command.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Neither `ECOLIFE_HOME` nor a home directory is available.
    #[error("could not determine home directory (set ECOLIFE_HOME)")]
    NoHomeDir,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown challenge id '{0}'")]
    UnknownChallenge(String),

    /// The id exists but is not one of the challenges offered on that day.
    #[error("challenge '{id}' is not offered on {date}")]
    NotOfferedToday { id: String, date: NaiveDate },

    #[error("no challenge selected for {0}. Run `ecolife select <ID>` first")]
    NoSelection(NaiveDate),

    #[error("a challenge was already completed on {0}")]
    AlreadyCompleted(NaiveDate),

    #[error("you need to log in first. Run `ecolife login`")]
    NotLoggedIn,

    #[error("passwords do not match")]
    PasswordMismatch,

    /// The backend answered with a non-success status.
    #[error("{action} failed: server returned {status}")]
    Auth {
        action: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unsupported log level '{0}' (use error, warn, info, debug or trace)")]
    InvalidLogLevel(String),

    #[error("logging setup failed: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Parse {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
