//! Connection string parser.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use tracing::debug;
use url::Url;

use crate::config::ConnectionConfig;
use crate::error::{ConnectionError, ConnectionResult};
use crate::escape::{self, SCHEME_PREFIX};

/// Query parameter that allows a prefix without a trailing slash.
pub const ANY_PREFIX_PARAM: &str = "anyPrefix";

const SCHEME: &str = "s3";

/// Parse an `s3://` connection string into a validated [`ConnectionConfig`].
///
/// ```text
/// s3://<user>:<password>@<host>[:<port>]/<bucket>[/<prefix>][?<query>]
/// ```
///
/// Either credential may be wrapped in `[...]` to carry characters that are
/// not allowed in a URL authority. The prefix must end in `/` unless the
/// query sets `anyPrefix` to a non-empty value.
///
/// # Examples
///
/// ```rust
/// use s3url_core::parse;
///
/// let config = parse("s3://accessKey123:secretKey123@endpoint/bucket/prefix/").unwrap();
/// assert_eq!(config.access_key_id, "accessKey123");
/// assert_eq!(config.prefix, "prefix/");
/// assert_eq!(config.endpoint, "https://endpoint");
///
/// assert!(parse("s3://key:secret@endpoint/bucket/prefix").is_err());
/// assert!(parse("s3://key:secret@endpoint/bucket/prefix?anyPrefix=1").is_ok());
/// ```
pub fn parse(input: &str) -> ConnectionResult<ConnectionConfig> {
    debug!(input_len = input.len(), "s3url::parse()");

    let rewritten = escape::unwrap_brackets(input);
    check_characters(&rewritten)?;
    escape::check_userinfo(&rewritten)?;
    let url = Url::parse(&rewritten)?;

    check_scheme(input, &url)?;
    let (raw_host, raw_path) = match rewritten.strip_prefix(SCHEME_PREFIX) {
        Some(rest) if !rest.starts_with('/') => split_raw(rest),
        _ => {
            return Err(ConnectionError::malformed(
                "expected s3:// followed by credentials and a host",
            ));
        }
    };

    let access_key_id = decode(url.username())?;
    if access_key_id.is_empty() {
        return Err(ConnectionError::MissingCredentials("access key"));
    }
    let secret_key = match url.password() {
        Some(password) => decode(password)?,
        None => String::new(),
    };
    if secret_key.is_empty() {
        return Err(ConnectionError::MissingCredentials("secret key"));
    }

    // `Url` resolves `.` and `..` segments, so the path is taken as written.
    let path = decode(raw_path)?;
    let (bucket, prefix) = split_path(&path);
    if bucket.is_empty() {
        return Err(ConnectionError::MissingBucket);
    }

    let mut params: HashMap<String, Vec<String>> = HashMap::new();
    for (key, value) in url.query_pairs() {
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    let any_prefix = params
        .remove(ANY_PREFIX_PARAM)
        .and_then(|values| values.into_iter().next())
        .is_some_and(|value| !value.is_empty());

    if !prefix.is_empty() && !prefix.ends_with('/') && !any_prefix {
        return Err(ConnectionError::PrefixSlashViolation { prefix });
    }

    let endpoint_host = raw_host.to_string();
    let config = ConnectionConfig {
        access_key_id,
        secret_key,
        bucket: bucket.to_string(),
        prefix,
        endpoint: format!("https://{endpoint_host}"),
        endpoint_host,
        params,
    };
    config.validate()?;

    debug!(
        bucket = %config.bucket,
        endpoint_host = %config.endpoint_host,
        has_prefix = config.has_prefix(),
        params = config.params.len(),
        "Connection parsed"
    );
    Ok(config)
}

/// The URL parser lowercases schemes, so the literal token is checked too.
fn check_scheme(input: &str, url: &Url) -> ConnectionResult<()> {
    let token = input.split_once(':').map_or(input, |(scheme, _)| scheme);
    if url.scheme() != SCHEME || token != SCHEME {
        return Err(ConnectionError::InvalidScheme(token.to_string()));
    }
    Ok(())
}

/// The URL parser drops tabs and newlines and trims control characters and
/// spaces at either end. Bracketed credentials are already encoded here.
fn check_characters(rewritten: &str) -> ConnectionResult<()> {
    if rewritten.contains(|c: char| c.is_ascii_control()) {
        return Err(ConnectionError::malformed("control character in connection URL"));
    }
    if rewritten.starts_with(char::is_whitespace) || rewritten.ends_with(char::is_whitespace) {
        return Err(ConnectionError::malformed(
            "leading or trailing whitespace in connection URL",
        ));
    }
    Ok(())
}

fn decode(component: &str) -> ConnectionResult<String> {
    percent_decode_str(component)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ConnectionError::malformed("percent-decoded value is not valid UTF-8"))
}

/// Split a decoded path into bucket and prefix.
///
/// One leading and one trailing `/` are trimmed before splitting at the first
/// `/`. A trailing slash is put back on a non-empty prefix.
fn split_path(path: &str) -> (&str, String) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    match trimmed.split_once('/') {
        Some((bucket, prefix)) if !prefix.is_empty() && path.ends_with('/') => {
            (bucket, format!("{prefix}/"))
        }
        Some((bucket, prefix)) => (bucket, prefix.to_string()),
        None => (trimmed, String::new()),
    }
}

/// Split the text after `s3://` into the `host[:port]` part of the authority
/// and the path, both as written.
fn split_raw(rest: &str) -> (&str, &str) {
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);
    let host = authority.rfind('@').map_or(authority, |at| &authority[at + 1..]);
    let path = tail.find(['?', '#']).map_or(tail, |end| &tail[..end]);
    (host, path)
}
