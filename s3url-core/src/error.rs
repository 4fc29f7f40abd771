//! Error types for connection string parsing.

use thiserror::Error;

/// Errors that can occur while parsing an `s3://` connection string.
///
/// Every variant is terminal: a failed parse never yields a partially
/// populated [`ConnectionConfig`](crate::ConnectionConfig). Messages never
/// echo the credentials.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// The string is not a syntactically valid URL.
    #[error("Malformed connection URL: {0}")]
    MalformedUrl(String),

    /// The scheme is not exactly `s3`.
    #[error("Invalid scheme '{0}': expecting s3://")]
    InvalidScheme(String),

    /// Userinfo is absent or one of its two parts is empty.
    #[error("Missing {0} in the connection URL")]
    MissingCredentials(&'static str),

    /// The path has no bucket segment.
    #[error("Missing bucket name in the connection URL")]
    MissingBucket,

    /// The prefix does not end in `/` and `anyPrefix` was not set.
    #[error("Prefix '{prefix}' must end with a slash, set anyPrefix=1 on the URL to allow it")]
    PrefixSlashViolation {
        /// The offending prefix.
        prefix: String,
    },

    /// A required field was empty after parsing.
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Environment variable not found.
    #[error("Environment variable not found: {0}")]
    EnvNotFound(String),

    /// Malformed `${...}` reference in a connection string template.
    #[error("Invalid environment variable '{name}': {message}")]
    InvalidEnvValue {
        /// Variable name, as far as it could be read.
        name: String,
        /// What was wrong with the reference.
        message: String,
    },
}

/// Payload-free category of a [`ConnectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ConnectionError::MalformedUrl`].
    MalformedUrl,
    /// See [`ConnectionError::InvalidScheme`].
    InvalidScheme,
    /// See [`ConnectionError::MissingCredentials`].
    MissingCredentials,
    /// See [`ConnectionError::MissingBucket`].
    MissingBucket,
    /// See [`ConnectionError::PrefixSlashViolation`].
    PrefixSlashViolation,
    /// See [`ConnectionError::EmptyField`].
    EmptyField,
    /// See [`ConnectionError::EnvNotFound`] and [`ConnectionError::InvalidEnvValue`].
    Environment,
}

impl ConnectionError {
    /// Get the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedUrl(_) => ErrorKind::MalformedUrl,
            Self::InvalidScheme(_) => ErrorKind::InvalidScheme,
            Self::MissingCredentials(_) => ErrorKind::MissingCredentials,
            Self::MissingBucket => ErrorKind::MissingBucket,
            Self::PrefixSlashViolation { .. } => ErrorKind::PrefixSlashViolation,
            Self::EmptyField(_) => ErrorKind::EmptyField,
            Self::EnvNotFound(_) | Self::InvalidEnvValue { .. } => ErrorKind::Environment,
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedUrl(message.into())
    }
}

impl From<url::ParseError> for ConnectionError {
    fn from(err: url::ParseError) -> Self {
        Self::MalformedUrl(err.to_string())
    }
}

/// Result type for connection string operations.
pub type ConnectionResult<T> = Result<T, ConnectionError>;
