//! Environment lookup and `${VAR}` expansion for connection string templates.
//!
//! Keeping credentials in their own variables and assembling the connection
//! string from a template avoids copying secrets into a second place:
//!
//! ```text
//! S3_URL='s3://${S3_ACCESS_KEY}:[${S3_SECRET_KEY}]@${S3_HOST:-s3.amazonaws.com}/backups/'
//! ```

use std::collections::HashMap;

use crate::error::{ConnectionError, ConnectionResult};

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get a variable's value.
    fn get(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory variables, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Expands variable references in a template.
///
/// Supported syntax:
/// - `${VAR}` and `$VAR`: the variable's value; an error when unset
/// - `${VAR:-default}`: `default` when the variable is unset or empty
/// - `$$`: a literal `$`
///
/// A `$` not followed by a name is kept as is.
#[derive(Debug, Clone, Default)]
pub struct EnvExpander<S: EnvSource = StdEnvSource> {
    source: S,
}

impl EnvExpander<StdEnvSource> {
    /// Create an expander over the process environment.
    pub fn new() -> Self {
        Self {
            source: StdEnvSource,
        }
    }
}

impl<S: EnvSource> EnvExpander<S> {
    /// Create an expander over a custom source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Expand every reference in `template`.
    ///
    /// ```rust
    /// use s3url_core::{EnvExpander, MapEnvSource};
    ///
    /// let expander = EnvExpander::with_source(MapEnvSource::new().set("KEY", "AKIA"));
    /// assert_eq!(expander.expand("s3://$KEY:${SECRET:-x}@host/b/").unwrap(), "s3://AKIA:x@host/b/");
    /// ```
    pub fn expand(&self, template: &str) -> ConnectionResult<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(dollar) = rest.find('$') {
            out.push_str(&rest[..dollar]);
            let after = &rest[dollar + 1..];

            if let Some(tail) = after.strip_prefix('$') {
                out.push('$');
                rest = tail;
            } else if let Some(body) = after.strip_prefix('{') {
                let close = body.find('}').ok_or_else(|| ConnectionError::InvalidEnvValue {
                    name: body.chars().take_while(|&c| is_name_char(c)).collect(),
                    message: "unterminated ${ reference".to_string(),
                })?;
                let (name, default) = match body[..close].split_once(":-") {
                    Some((name, default)) => (name, Some(default)),
                    None => (&body[..close], None),
                };
                if !is_valid_name(name) {
                    return Err(ConnectionError::InvalidEnvValue {
                        name: name.to_string(),
                        message: "invalid variable name".to_string(),
                    });
                }
                out.push_str(&self.lookup(name, default)?);
                rest = &body[close + 1..];
            } else {
                let len = after
                    .find(|c: char| !is_name_char(c))
                    .unwrap_or(after.len());
                let name = &after[..len];
                if is_valid_name(name) {
                    out.push_str(&self.lookup(name, None)?);
                    rest = &after[len..];
                } else {
                    out.push('$');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        Ok(out)
    }

    fn lookup(&self, name: &str, default: Option<&str>) -> ConnectionResult<String> {
        match (self.source.get(name), default) {
            (Some(value), Some(default)) if value.is_empty() => Ok(default.to_string()),
            (Some(value), _) => Ok(value),
            (None, Some(default)) => Ok(default.to_string()),
            (None, None) => Err(ConnectionError::EnvNotFound(name.to_string())),
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_valid_name(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(is_name_char)
}
