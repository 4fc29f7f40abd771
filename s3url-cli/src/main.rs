//! s3url CLI - Command-line interface for `s3://` connection strings.

use clap::Parser;
use miette::Diagnostic;

use s3url_cli::cli::{Cli, Command};
use s3url_cli::commands;
use s3url_cli::error::CliResult;
use s3url_cli::output;
use s3url_core::logging;

fn main() {
    if let Err(e) = run() {
        output::error(&e.to_string());
        if let Some(help) = e.help() {
            output::hint(&help.to_string());
        }
        if let Some(code) = e.code() {
            output::hint(&format!("[{code}]"));
        }
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init_with_filter("s3url_core=debug,s3url_cli=debug");
    } else {
        logging::init();
    }

    match cli.command {
        Command::Parse(args) => commands::parse::run(args),
        Command::Check(args) => commands::check::run(args),
        Command::Version => commands::version::run(),
    }
}
