//! `s3url version` command - Display version information.

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub fn run() -> CliResult<()> {
    output::header("s3url");

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    output::newline();
    output::section("Environment");
    kv("Connection string", s3url_core::DEFAULT_ENV_VAR);
    kv("Log filter", s3url_core::logging::LOG_ENV);
    kv("Log format", s3url_core::logging::LOG_FORMAT_ENV);

    Ok(())
}
