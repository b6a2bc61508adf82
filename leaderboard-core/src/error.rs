//! Errors raised while executing a single command line.

use thiserror::Error;

use crate::array::ArrayError;

/// Every way a command can fail. None of them end the session; the
/// dispatcher reports one line and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Wrong number of arguments; carries the command's usage text.
    #[error("{0}")]
    Usage(&'static str),

    #[error("ADD_PLAYER requires a name")]
    EmptyName,

    #[error("score must be an integer")]
    InvalidScore,

    #[error("k must be a non-negative integer")]
    InvalidHistoryLimit,

    #[error("k must be a positive integer")]
    InvalidTopK,

    #[error("player not found")]
    NotFound,

    #[error("player already exists")]
    Duplicate,

    #[error("quotes are not supported; use underscores for spaces")]
    QuotesUnsupported,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error(transparent)]
    Array(#[from] ArrayError),
}

impl CommandError {
    /// The single output line reporting this error.
    pub fn report(&self) -> String {
        match self {
            Self::NotFound => "NOT FOUND".to_string(),
            Self::Duplicate => "DUPLICATE".to_string(),
            other => format!("ERROR: {other}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
