//! CLI error types and result alias.

use miette::Diagnostic;
use s3url_core::{ConnectionError, ErrorKind};
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// The connection string was rejected
    #[error(transparent)]
    #[diagnostic(
        code(s3url::parse),
        help("expected s3://<access key>:<secret key>@<host>[:<port>]/<bucket>[/<prefix>/]")
    )]
    Parse(ConnectionError),

    /// The connection string could not be read from the environment
    #[error(transparent)]
    #[diagnostic(code(s3url::env))]
    Env(ConnectionError),

    /// Neither an argument nor $S3_URL was given
    #[error("No connection string given")]
    #[diagnostic(
        code(s3url::input),
        help("pass it as an argument, set S3_URL, or use --from-env <VAR>")
    )]
    MissingInput,

    /// Output rendering failed
    #[error("Output error: {0}")]
    #[diagnostic(code(s3url::output))]
    Output(#[from] serde_json::Error),
}

impl From<ConnectionError> for CliError {
    fn from(err: ConnectionError) -> Self {
        match err.kind() {
            ErrorKind::Environment => CliError::Env(err),
            _ => CliError::Parse(err),
        }
    }
}
