//! Engine log severities mapped onto tracing levels

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a message raised while processing scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Debug,
    Verbose,
    Information,
    Warning,
    Error,
}

impl Severity {
    /// Write `message` to the tracing level matching this severity
    pub fn emit(self, message: &str) {
        match self {
            Self::Debug => tracing::debug!("{message}"),
            Self::Verbose => tracing::trace!("{message}"),
            Self::Information => tracing::info!("{message}"),
            Self::Warning => tracing::warn!("{message}"),
            Self::Error => tracing::error!("{message}"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Debug => "debug",
            Self::Verbose => "verbose",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        write!(f, "{s}")
    }
}
