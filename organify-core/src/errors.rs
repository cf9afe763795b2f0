//! Error type shared by the core operations.

use thiserror::Error;

/// Fatal failures that abort a whole operation.
///
/// Per-item filesystem errors are not represented here: they are logged
/// against the offending entry and processing continues with the next item.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The supplied removal pattern did not compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A new operation was requested while a previous one is still running.
    #[error("another operation is already running")]
    Busy,

    /// The operation's worker thread panicked.
    #[error("operation thread panicked")]
    Panicked,
}
