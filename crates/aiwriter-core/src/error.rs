use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiWriterError {
    // Input errors
    #[error("{0}")]
    Validation(String),

    #[error("OpenAI API key not configured. Please check your settings.")]
    MissingApiKey,

    #[error("No API key found. Please enter your OpenAI API key first.")]
    NoApiKeyForTest,

    #[error("{0}")]
    PermissionDenied(String),

    // Upstream API errors
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API key. Please check your OpenAI API key in settings.")]
    Auth,

    #[error("Access forbidden. Your API key may not have the required permissions.")]
    Forbidden,

    #[error("Rate limit exceeded. Please try again in a few moments.")]
    RateLimited,

    #[error("OpenAI service is temporarily unavailable. Please try again later.")]
    ServiceUnavailable,

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response format from OpenAI API.")]
    InvalidResponse,

    #[error("No content was generated. Please try again.")]
    EmptyResponse,

    // Persistence errors
    #[error("Failed to create post: {0}")]
    PostCreation(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Unknown setting '{0}'")]
    UnknownSetting(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidSettingValue { key: String, reason: String },

    #[error("Store error ({}): {reason}", .path.display())]
    Store { path: PathBuf, reason: String },

    #[error("Content '{0}' not found")]
    ContentNotFound(u64),

    // IO errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AiWriterError {
    /// Stable machine-readable code, used by `--json` output
    pub fn code(&self) -> &'static str {
        match self {
            AiWriterError::Validation(_) => "VALIDATION_ERROR",
            AiWriterError::MissingApiKey | AiWriterError::NoApiKeyForTest => "CONFIG_ERROR",
            AiWriterError::PermissionDenied(_) => "PERMISSION_DENIED",
            AiWriterError::Network(_) => "NETWORK_ERROR",
            AiWriterError::Auth => "AUTH_ERROR",
            AiWriterError::Forbidden => "PERMISSION_ERROR",
            AiWriterError::RateLimited => "RATE_LIMIT_ERROR",
            AiWriterError::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            AiWriterError::Api { .. } => "API_ERROR",
            AiWriterError::InvalidResponse | AiWriterError::EmptyResponse => "EMPTY_RESPONSE",
            AiWriterError::PostCreation(_) => "POST_CREATION_ERROR",
            AiWriterError::Settings(_)
            | AiWriterError::UnknownSetting(_)
            | AiWriterError::InvalidSettingValue { .. } => "SETTINGS_ERROR",
            AiWriterError::Store { .. } | AiWriterError::ContentNotFound(_) => "STORE_ERROR",
            AiWriterError::Io(_) => "IO_ERROR",
        }
    }

    /// Errors raised before any network call was attempted
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AiWriterError::Validation(_)
                | AiWriterError::MissingApiKey
                | AiWriterError::NoApiKeyForTest
                | AiWriterError::PermissionDenied(_)
                | AiWriterError::Settings(_)
        )
    }

    pub(crate) fn store(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        AiWriterError::Store {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AiWriterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages_are_human_readable() {
        assert_eq!(
            AiWriterError::Auth.to_string(),
            "Invalid API key. Please check your OpenAI API key in settings."
        );
        let err = AiWriterError::Api {
            status: 418,
            message: "teapot".to_string(),
        };
        assert_eq!(err.to_string(), "API request failed with status 418: teapot");
        assert_eq!(err.code(), "API_ERROR");
    }

    #[test]
    fn test_local_errors() {
        assert!(AiWriterError::Validation("x".into()).is_local());
        assert!(AiWriterError::MissingApiKey.is_local());
        assert!(AiWriterError::Settings("bad url".into()).is_local());
        assert!(!AiWriterError::RateLimited.is_local());
    }
}
