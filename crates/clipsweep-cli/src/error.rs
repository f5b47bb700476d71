//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for configuration and validation errors.
pub const EXIT_CONFIG: i32 = 2;

/// Exit code when a sweep stage fails.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when some deletions failed.
pub const EXIT_PARTIAL: i32 = 3;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client error
    #[error(transparent)]
    Client(#[from] clipsweep_client::ClientError),

    /// Sweep stage error
    #[error(transparent)]
    Janitor(#[from] clipsweep_janitor::JanitorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use clipsweep_client::ClientError;
        use clipsweep_janitor::JanitorError;

        match self {
            CliError::Config(_)
            | CliError::Toml(_)
            | CliError::Client(ClientError::Config(_))
            | CliError::Janitor(JanitorError::Config(_)) => EXIT_CONFIG,
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Config("token is empty".into()).exit_code(), EXIT_CONFIG);

        let err = CliError::from(clipsweep_client::ClientError::Config("bad url".into()));
        assert_eq!(err.exit_code(), EXIT_CONFIG);

        let err = CliError::from(clipsweep_janitor::JanitorError::Collect {
            page: 1,
            message: "Service error: Invalid token".into(),
        });
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert_eq!(
            err.to_string(),
            "Failed to list resources (page 1): Service error: Invalid token"
        );
    }
}
