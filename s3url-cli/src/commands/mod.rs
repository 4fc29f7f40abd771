//! CLI command implementations.

pub mod check;
pub mod parse;
pub mod version;

use s3url_core::{ConnectionConfig, ConnectionError, EnvExpander, EnvSource, StdEnvSource};
use tracing::debug;

use crate::cli::SourceArgs;
use crate::error::{CliError, CliResult};

/// Resolve the connection string named by `source` and parse it.
///
/// `--from-env` wins over the positional argument and `$S3_URL`.
pub(crate) fn load(source: &SourceArgs) -> CliResult<ConnectionConfig> {
    let raw = match (&source.from_env, &source.url) {
        (Some(var), _) => StdEnvSource
            .get(var)
            .ok_or_else(|| ConnectionError::EnvNotFound(var.clone()))?,
        (None, Some(url)) => url.clone(),
        (None, None) => return Err(CliError::MissingInput),
    };
    debug!(from_env = ?source.from_env, expand = source.expand, "Loading connection string");

    let config = if source.expand {
        ConnectionConfig::parse_expanded(&raw, &EnvExpander::new())?
    } else {
        ConnectionConfig::parse(&raw)?
    };
    Ok(config)
}
