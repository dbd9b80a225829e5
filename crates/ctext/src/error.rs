#![forbid(unsafe_code)]

//! Construction errors.

use std::fmt;

/// Errors raised when a builder cannot produce a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A mandatory field was never set, or the builder holds nothing at all.
    InvalidState {
        /// What was being built (`"text component"`, `"title"`).
        target: &'static str,
        /// Why the state is unusable.
        reason: &'static str,
    },
}

impl BuildError {
    pub(crate) const fn missing(target: &'static str, reason: &'static str) -> Self {
        Self::InvalidState { target, reason }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState { target, reason } => {
                write!(f, "cannot build {}: {}", target, reason)
            }
        }
    }
}

impl std::error::Error for BuildError {}
