//! # s3url
//!
//! Parse `s3://` connection strings into bucket credentials and location.
//!
//! One string carries everything a storage client needs, in the spirit of
//! `DATABASE_URL`:
//!
//! ```text
//! s3://<access key>:<secret key>@<host>[:<port>]/<bucket>[/<prefix>/][?<params>]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use s3url::prelude::*;
//!
//! let config: ConnectionConfig = "s3://AKIA:[p@ss]@minio:9000/media/uploads/?region=eu-west-1"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint, "https://minio:9000");
//! assert_eq!(config.object_key("cat.png"), "uploads/cat.png");
//! assert_eq!(config.param("region"), Some("eu-west-1"));
//! ```
//!
//! Credentials with characters such as `@`, `:` or `/` are wrapped in `[...]`.
//! A prefix has to end in `/` unless the URL sets `anyPrefix=1`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Environment lookup and template expansion.
pub mod env {
    pub use s3url_core::env::*;
}

/// Logging bootstrap.
pub mod logging {
    pub use s3url_core::logging::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use s3url_core::{ConnectionConfig, ConnectionError, ConnectionResult, ErrorKind, parse};
}

// Re-export key types at the crate root
pub use s3url_core::{
    ANY_PREFIX_PARAM, ConnectionConfig, ConnectionError, ConnectionResult, DEFAULT_ENV_VAR,
    EnvExpander, EnvSource, ErrorKind, MapEnvSource, StdEnvSource, parse,
};
