//! The parsed connection record.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::env::{EnvExpander, EnvSource, StdEnvSource};
use crate::error::{ConnectionError, ConnectionResult};
use crate::parser;

/// Environment variable read by [`ConnectionConfig::from_default_env`].
pub const DEFAULT_ENV_VAR: &str = "S3_URL";

/// A fully parsed and validated bucket connection.
///
/// Built by [`ConnectionConfig::parse`]; there is no other way to obtain one
/// that has passed validation.
///
/// The `Debug` output masks the secret key.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionConfig {
    /// Access key id, decoded.
    pub access_key_id: String,
    /// Secret key, decoded.
    pub secret_key: String,
    /// Bucket name (first path segment).
    pub bucket: String,
    /// Key prefix inside the bucket. Empty when the URL names only a bucket.
    pub prefix: String,
    /// `https://` followed by [`endpoint_host`](Self::endpoint_host).
    pub endpoint: String,
    /// Host and optional port, as written in the URL.
    pub endpoint_host: String,
    /// Remaining query parameters. Never contains `anyPrefix`.
    #[serde(serialize_with = "serialize_sorted")]
    pub params: HashMap<String, Vec<String>>,
}

impl ConnectionConfig {
    /// Parse an `s3://` connection string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use s3url_core::ConnectionConfig;
    ///
    /// let config = ConnectionConfig::parse("s3://key:[s3cr@t]@minio:9000/media/uploads/").unwrap();
    /// assert_eq!(config.secret_key, "s3cr@t");
    /// assert_eq!(config.bucket, "media");
    /// assert_eq!(config.prefix, "uploads/");
    /// assert_eq!(config.endpoint, "https://minio:9000");
    /// ```
    pub fn parse(input: &str) -> ConnectionResult<Self> {
        parser::parse(input)
    }

    /// Expand `${VAR}` references with `expander`, then parse.
    ///
    /// ```rust
    /// use s3url_core::{ConnectionConfig, EnvExpander, MapEnvSource};
    ///
    /// let env = MapEnvSource::new()
    ///     .set("S3_ACCESS_KEY", "AKIA")
    ///     .set("S3_SECRET_KEY", "p@ss/word");
    /// let expander = EnvExpander::with_source(env);
    ///
    /// let config = ConnectionConfig::parse_expanded(
    ///     "s3://${S3_ACCESS_KEY}:[${S3_SECRET_KEY}]@${S3_HOST:-s3.local}/backups/",
    ///     &expander,
    /// )
    /// .unwrap();
    /// assert_eq!(config.secret_key, "p@ss/word");
    /// assert_eq!(config.endpoint_host, "s3.local");
    /// ```
    pub fn parse_expanded<S: EnvSource>(
        template: &str,
        expander: &EnvExpander<S>,
    ) -> ConnectionResult<Self> {
        let expanded = expander.expand(template)?;
        Self::parse(&expanded)
    }

    /// Parse the connection string held by an environment variable.
    pub fn from_env(var: &str) -> ConnectionResult<Self> {
        let url = StdEnvSource
            .get(var)
            .ok_or_else(|| ConnectionError::EnvNotFound(var.to_string()))?;
        Self::parse(&url)
    }

    /// Parse from the `S3_URL` environment variable.
    pub fn from_default_env() -> ConnectionResult<Self> {
        Self::from_env(DEFAULT_ENV_VAR)
    }

    /// Check the invariants every parsed config must hold.
    pub fn validate(&self) -> ConnectionResult<()> {
        if self.access_key_id.is_empty() {
            return Err(ConnectionError::EmptyField("access_key_id"));
        }
        if self.secret_key.is_empty() {
            return Err(ConnectionError::EmptyField("secret_key"));
        }
        if self.bucket.is_empty() {
            return Err(ConnectionError::EmptyField("bucket"));
        }
        if self.endpoint_host.is_empty() || self.endpoint.is_empty() {
            return Err(ConnectionError::EmptyField("endpoint"));
        }
        Ok(())
    }

    /// Get the first value of a query parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Get every value of a query parameter, in URL order.
    pub fn param_values(&self, key: &str) -> &[String] {
        self.params
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check whether the connection is scoped below the bucket root.
    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }

    /// Build an object key under the configured prefix.
    pub fn object_key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_key", &"***")
            .field("bucket", &self.bucket)
            .field("prefix", &self.prefix)
            .field("endpoint", &self.endpoint)
            .field("endpoint_host", &self.endpoint_host)
            .field("params", &self.params)
            .finish()
    }
}

impl FromStr for ConnectionConfig {
    type Err = ConnectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ConnectionConfig {
    type Error = ConnectionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

fn serialize_sorted<S: Serializer>(
    params: &HashMap<String, Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    params.iter().collect::<BTreeMap<_, _>>().serialize(serializer)
}
