//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// s3url - Inspect s3:// connection strings
#[derive(Parser, Debug)]
#[command(name = "s3url")]
#[command(version)]
#[command(about = "s3url - Inspect s3:// connection strings", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a connection string and print its fields
    Parse(ParseArgs),

    /// Check that a connection string is valid
    Check(CheckArgs),

    /// Display version information
    Version,
}

/// Where the connection string comes from
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Connection string (defaults to $S3_URL)
    #[arg(env = "S3_URL", hide_env_values = true)]
    pub url: Option<String>,

    /// Read the connection string from this environment variable instead
    #[arg(long, value_name = "VAR")]
    pub from_env: Option<String>,

    /// Expand ${VAR} references from the environment before parsing
    #[arg(long)]
    pub expand: bool,
}

/// Arguments for the `parse` command
#[derive(Args, Debug)]
pub struct ParseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Print the secret key instead of masking it
    #[arg(long)]
    pub show_secret: bool,
}

/// Arguments for the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Output formats for `parse`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
