//! s3url CLI - Command-line interface for `s3://` connection strings.
//!
//! This crate provides the `s3url` tool, which parses a connection string
//! (from an argument or the environment) and prints or checks its fields.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
