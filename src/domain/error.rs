use std::io;

use thiserror::Error;

/// Library-wide error type for promptsync operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No repository URL has been configured.
    #[error("Repository URL is not configured. Run 'promptsync init <url>' first.")]
    NotConfigured,

    /// The git executable could not be found on PATH.
    #[error("Git is required but could not be found in PATH.")]
    GitUnavailable,

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Requested prompt does not exist in the mirror.
    #[error("Prompt '{0}' not found")]
    PromptNotFound(String),

    /// Requested template is not configured.
    #[error("Template '{name}' not found. Available: {available}")]
    TemplateNotFound { name: String, available: String },

    /// Operation requires a prompt file but a directory was given.
    #[error("'{0}' is a directory; select a prompt file")]
    NotAFile(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Interactive input failed.
    #[error("Failed to read input: {0}")]
    Prompt(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::NotAFile(_)
            | AppError::TomlParseError(_)
            | AppError::TomlSerializeError(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::NotConfigured
            | AppError::GitUnavailable
            | AppError::PromptNotFound(_)
            | AppError::TemplateNotFound { .. } => io::ErrorKind::NotFound,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::GitError { .. } | AppError::Clipboard(_) => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn git_error_carries_command_and_details() {
        let err = AppError::GitError {
            command: "git fetch origin main".into(),
            details: "fatal: couldn't find remote ref main".into(),
        };
        let message = err.to_string();
        assert!(message.contains("git fetch origin main"));
        assert!(message.contains("couldn't find remote ref"));
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn missing_things_map_to_not_found() {
        assert_eq!(AppError::NotConfigured.kind(), io::ErrorKind::NotFound);
        assert_eq!(AppError::PromptNotFound("x".into()).kind(), io::ErrorKind::NotFound);
        assert_eq!(AppError::GitUnavailable.kind(), io::ErrorKind::NotFound);
    }
}
