//! `s3url check` command - Validate a connection string.

use crate::cli::CheckArgs;
use crate::error::CliResult;
use crate::output;

/// Run the check command
pub fn run(args: CheckArgs) -> CliResult<()> {
    let config = super::load(&args.source)?;

    let location = if config.has_prefix() {
        format!("{}/{}", config.bucket, config.prefix)
    } else {
        config.bucket.clone()
    };
    output::success(&format!(
        "Valid connection to {} at {}",
        location, config.endpoint
    ));
    Ok(())
}
