//! Error type shared by every SDK component.

use std::io;

/// Convenience alias for SDK results.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures surfaced by the SDK.
///
/// The SDK never logs these itself; callers decide what to do with them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required secret is not present in the environment.
    #[error(
        "Secret '{name}' not available. Ensure it is set via 'aegis secret set' and the task/app references it."
    )]
    SecretUnavailable { name: String },

    /// Directory creation or stream write failed. The underlying error is kept as-is.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Name of the missing secret, if this is a [`Error::SecretUnavailable`].
    pub fn secret_name(&self) -> Option<&str> {
        match self {
            Error::SecretUnavailable { name } => Some(name),
            Error::Io(_) => None,
        }
    }

    /// The wrapped I/O error, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::Io(err) => Some(err),
            Error::SecretUnavailable { .. } => None,
        }
    }
}
