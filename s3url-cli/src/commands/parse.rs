//! `s3url parse` command - Print the fields of a connection string.

use s3url_core::ConnectionConfig;

use crate::cli::{OutputFormat, ParseArgs};
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the parse command
pub fn run(args: ParseArgs) -> CliResult<()> {
    let mut config = super::load(&args.source)?;
    if !args.show_secret {
        config.secret_key = output::mask(&config.secret_key);
    }

    match args.format {
        OutputFormat::Text => print_text(&config),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}

fn print_text(config: &ConnectionConfig) {
    output::header("S3 connection");

    kv("Access key", &config.access_key_id);
    kv("Secret key", &config.secret_key);
    kv("Bucket", &config.bucket);
    kv(
        "Prefix",
        if config.has_prefix() {
            config.prefix.as_str()
        } else {
            "(none)"
        },
    );
    kv("Endpoint", &config.endpoint);
    kv("Endpoint host", &config.endpoint_host);

    output::newline();
    if config.params.is_empty() {
        output::dim("No query parameters");
        return;
    }

    output::section("Parameters");
    let mut keys: Vec<_> = config.params.keys().collect();
    keys.sort();
    for key in keys {
        for value in config.param_values(key) {
            output::list_item(&format!("{key}={value}"));
        }
    }
}
