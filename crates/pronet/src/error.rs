//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use pronet_config::ConfigError;
use pronet_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const FLOW: i32 = 5;
    pub const STATE: i32 = 6;
    pub const CONFIG: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Flow ─────────────────────────────────────────────────────────
    #[error("'{command}' is not available in the {flow} flow")]
    #[diagnostic(code(pronet::wrong_flow), help("Run: pronet {next_step}"))]
    WrongFlow {
        command: String,
        flow: String,
        next_step: String,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Sign-in failed: {reason}")]
    #[diagnostic(
        code(pronet::auth_failed),
        help("Request a new code with: pronet auth send-code <phone>")
    )]
    AuthFailed { reason: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(pronet::not_found),
        help("Run: pronet {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Services ─────────────────────────────────────────────────────
    #[error("{service} request failed: {message}")]
    #[diagnostic(code(pronet::service))]
    Service { service: String, message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(pronet::validation))]
    Validation { field: String, reason: String },

    // ── State file ───────────────────────────────────────────────────
    #[error("Could not read flow state from {path}")]
    #[diagnostic(
        code(pronet::corrupt_state),
        help(
            "{reason}\n\
             Delete the file to start over, or pass --ephemeral."
        )
    )]
    CorruptState { path: String, reason: String },

    #[error("Could not save flag '{key}': {reason}")]
    #[diagnostic(code(pronet::persistence))]
    Persistence { key: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Invalid configuration: {message}")]
    #[diagnostic(
        code(pronet::config),
        help(
            "Fix or regenerate the file with: pronet config init\n\
             Expected at: {path}"
        )
    )]
    Config { message: String, path: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Operation '{action}' requires confirmation")]
    #[diagnostic(
        code(pronet::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Output ───────────────────────────────────────────────────────
    #[error("Could not render {format} output: {reason}")]
    #[diagnostic(
        code(pronet::output),
        help("Retry with --output table, or file a bug with the command you ran.")
    )]
    Output { format: String, reason: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::WrongFlow { .. } => exit_code::FLOW,
            Self::CorruptState { .. } | Self::Persistence { .. } => exit_code::STATE,
            Self::Config { .. } => exit_code::CONFIG,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            Self::Service { .. } | Self::Output { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Persistence { key, reason } => Self::Persistence { key, reason },
            CoreError::CorruptStore { path, reason } => Self::CorruptState { path, reason },
            CoreError::Service { service, message } => Self::Service { service, message },
            err @ CoreError::BadServerResponse => Self::Service {
                service: "server".into(),
                message: err.display_message(),
            },
            CoreError::ValidationFailed { message } => Self::Validation {
                field: "input".into(),
                reason: message,
            },
            CoreError::Io(err) => Self::Io(err),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Config {
                message: format!("{field}: {reason}"),
                path: pronet_config::config_path().display().to_string(),
            },
            ConfigError::Io(err) => Self::Io(err),
            other => Self::Config {
                message: other.to_string(),
                path: pronet_config::config_path().display().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_keep_their_exit_class() {
        let err: CliError = CoreError::CorruptStore {
            path: "/tmp/state.toml".into(),
            reason: "expected a boolean".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::STATE);

        let err: CliError = CoreError::BadServerResponse.into();
        assert_eq!(err.exit_code(), exit_code::GENERAL);
        assert!(err.to_string().contains("couldn't be completed"));
    }

    #[test]
    fn config_validation_is_a_config_error() {
        let err: CliError = ConfigError::Validation {
            field: "defaults.output".into(),
            reason: "bad".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::CONFIG);
    }

    #[test]
    fn exit_codes_are_distinct_failures() {
        let codes = [
            exit_code::GENERAL,
            exit_code::USAGE,
            exit_code::AUTH,
            exit_code::NOT_FOUND,
            exit_code::FLOW,
            exit_code::STATE,
            exit_code::CONFIG,
        ];
        for (i, code) in codes.iter().enumerate() {
            assert_ne!(*code, 0);
            assert!(!codes[i + 1..].contains(code));
        }
    }

    #[test]
    fn render_failures_exit_nonzero() {
        let err = CliError::Output {
            format: "yaml".into(),
            reason: "map key must be a string".into(),
        };
        assert_eq!(err.exit_code(), exit_code::GENERAL);
        assert!(err.to_string().contains("yaml"));
    }
}
