// ── Core error types ──
//
// The deck controller, router and flow state are total and never fail.
// These errors only come from the edges: flag persistence and the mock
// collaborators. View-models turn them into a display string; nothing in
// the core inspects them further.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Persistence ──────────────────────────────────────────────────
    #[error("Failed to persist flag '{key}': {reason}")]
    Persistence { key: String, reason: String },

    #[error("Flag store at {path} is unreadable: {reason}")]
    CorruptStore { path: String, reason: String },

    // ── Collaborators ────────────────────────────────────────────────
    #[error("Service '{service}' failed: {message}")]
    Service { service: String, message: String },

    #[error("Bad server response")]
    BadServerResponse,

    // ── Input ────────────────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Short message suitable for an inline error banner.
    pub fn display_message(&self) -> String {
        match self {
            Self::Service { message, .. } => message.clone(),
            Self::BadServerResponse => "The operation couldn't be completed.".into(),
            other => other.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CoreError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Persistence {
            key: "*".into(),
            reason: err.to_string(),
        }
    }
}
