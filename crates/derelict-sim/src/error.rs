//! Error types for the panic engine and the interactive session.

use thiserror::Error;

use derelict_core::MapError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised by panic rolls and session commands.
#[derive(Debug, Error)]
pub enum SimError {
    /// The panic room table has no entries to draw from.
    #[error("the panic room table is empty")]
    EmptyPanicTable,

    /// A command was given the wrong shape of arguments.
    #[error("usage: {0}")]
    Usage(String),

    /// Not a recognized command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A deck-plan operation failed.
    #[error("{0}")]
    Map(#[from] MapError),
}
