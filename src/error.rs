//! Error type shared by the widget, its scheduler and the terminal surface.
//!
//! Ordinary input edge cases (digit while full, delete while empty) are
//! no-ops and never reach this type. Only contract violations by the host
//! and resource failures do.

use std::io;

/// Result alias used throughout the crate.
pub type PinResult<T> = Result<T, PinError>;

/// Errors raised by the PIN widget.
#[derive(Debug, thiserror::Error)]
pub enum PinError {
    /// The configuration cannot produce a usable widget.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with it.
        reason: String,
    },

    /// A saved state does not fit the widget it is being restored into.
    #[error("invalid restored state: {reason}")]
    InvalidRestoredState {
        /// What was wrong with it.
        reason: String,
    },

    /// The blink scheduler thread could not be started.
    #[error("could not spawn blink thread")]
    ThreadSpawn(#[source] io::Error),

    /// Writing to the terminal failed.
    #[error("terminal i/o failed")]
    Io(#[from] io::Error),
}

impl PinError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_restore(reason: impl Into<String>) -> Self {
        Self::InvalidRestoredState {
            reason: reason.into(),
        }
    }
}
