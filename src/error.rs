//! Error types for game operations.

use std::io;

use thiserror::Error;

/// Errors that can occur while running the turn loop.
///
/// Bust, blackjack, a declined prompt, and deck exhaustion are outcomes, not
/// errors. Only collaborator I/O failures end up here.
#[derive(Debug, Error)]
pub enum GameError {
    /// Asking the user whether to continue failed.
    #[error("failed to read the answer: {0}")]
    Prompt(#[source] io::Error),
    /// Writing a report line failed.
    #[error("failed to write the report: {0}")]
    Output(#[source] io::Error),
}
