//! # s3url-core
//!
//! Parser for `s3://` object-storage connection strings.
//!
//! A connection string packs everything needed to reach a bucket into one
//! value, the way `DATABASE_URL` does for databases:
//!
//! ```text
//! s3://<access key>:<secret key>@<host>[:<port>]/<bucket>[/<prefix>][?<params>]
//! ```
//!
//! ## Parsing
//!
//! ```rust
//! use s3url_core::ConnectionConfig;
//!
//! let config = ConnectionConfig::parse(
//!     "s3://AKIA:[wJal/rXU+tn@F]@s3.eu-west-1.amazonaws.com/logs/app/?region=eu-west-1",
//! )
//! .unwrap();
//!
//! assert_eq!(config.access_key_id, "AKIA");
//! assert_eq!(config.secret_key, "wJal/rXU+tn@F");
//! assert_eq!(config.bucket, "logs");
//! assert_eq!(config.prefix, "app/");
//! assert_eq!(config.endpoint, "https://s3.eu-west-1.amazonaws.com");
//! assert_eq!(config.param("region"), Some("eu-west-1"));
//! ```
//!
//! ## Bracketed credentials
//!
//! Credentials containing characters that are not allowed in a URL authority
//! (`@`, `:`, `/`, `?`, `&`, ...) can be wrapped in `[` and `]`; the content
//! is taken literally, brackets included.
//!
//! ## Prefixes
//!
//! A prefix must end in `/`. Set `anyPrefix=1` to accept one that does not:
//!
//! ```rust
//! use s3url_core::{ErrorKind, parse};
//!
//! let err = parse("s3://k:s@host/bucket/daily").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::PrefixSlashViolation);
//!
//! let config = parse("s3://k:s@host/bucket/daily?anyPrefix=1").unwrap();
//! assert_eq!(config.prefix, "daily");
//! assert!(config.params.is_empty());
//! ```

mod config;
mod escape;
mod parser;

pub mod env;
pub mod error;
pub mod logging;

pub use config::{ConnectionConfig, DEFAULT_ENV_VAR};
pub use env::{EnvExpander, EnvSource, MapEnvSource, StdEnvSource};
pub use error::{ConnectionError, ConnectionResult, ErrorKind};
pub use parser::{ANY_PREFIX_PARAM, parse};
