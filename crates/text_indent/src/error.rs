//! Errors raised by indentation policies.

use std::{fmt, io};

/// Coarse classification of an [`IndentError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller passed a negative level or left a required value unset.
    InvalidArgument,
    /// The output sink rejected a write.
    IoFailure,
}

/// Error returned by indentation operations.
///
/// Argument errors are raised before any cache mutation or sink write.
/// Sink errors carry the original failure as their source.
#[derive(Debug, thiserror::Error)]
pub enum IndentError {
    /// Level below zero.
    #[error("indentation level {level} is negative")]
    NegativeLevel { level: isize },

    /// Level whose prefix would not fit in a `String`.
    #[error("indentation level {level} is too deep to render")]
    LevelTooDeep { level: isize },

    /// No unit string was configured.
    #[error("indentation unit is not set")]
    MissingUnit,

    /// No line-break string was configured.
    #[error("line break is not set")]
    MissingLineBreak,

    /// A unit name that does not match any known constant.
    #[error("unknown {kind} `{name}`")]
    UnknownUnit { kind: &'static str, name: String },

    /// A `fmt::Write` sink rejected a write.
    #[error("failed to write indentation")]
    Format(#[from] fmt::Error),

    /// An `io::Write` sink rejected a write.
    #[error("failed to write indentation: {0}")]
    Io(#[from] io::Error),
}

impl IndentError {
    /// The class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IndentError::NegativeLevel { .. }
            | IndentError::LevelTooDeep { .. }
            | IndentError::MissingUnit
            | IndentError::MissingLineBreak
            | IndentError::UnknownUnit { .. } => ErrorKind::InvalidArgument,
            IndentError::Format(_) | IndentError::Io(_) => ErrorKind::IoFailure,
        }
    }

    /// Shorthand for `kind() == ErrorKind::InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

/// Convert a signed level into a depth, rejecting negatives.
#[inline]
pub(crate) fn check_level(level: isize) -> Result<usize, IndentError> {
    usize::try_from(level).map_err(|_| IndentError::NegativeLevel { level })
}
