//! Bracket-unwrapping pre-pass for credential fields.
//!
//! Access and secret keys may be written as `[...]` so they can carry
//! characters a URL authority cannot (`@`, `:`, `/`, `?`, ...). Before the
//! string is handed to the URL parser, each bracketed field is replaced in
//! place by its percent-encoded content:
//!
//! ```text
//! s3://[ac@ss]:[k=?y]@host/bucket/   ->   s3://ac%40ss:k%3D%3Fy@host/bucket/
//! ```
//!
//! The walk is anchored at the scheme and looks at the userinfo only, so
//! brackets elsewhere in the string (an IPv6 host, the query) are left alone.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::{ConnectionError, ConnectionResult};

/// The only accepted scheme token, including the authority marker.
pub(crate) const SCHEME_PREFIX: &str = "s3://";

/// Everything outside the RFC 3986 unreserved set.
const CREDENTIAL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Replace bracket-wrapped credentials with their percent-encoded content.
///
/// Returns the input unchanged when it does not start with `s3://` or when
/// neither credential is bracketed.
pub(crate) fn unwrap_brackets(input: &str) -> Cow<'_, str> {
    let Some(rest) = input.strip_prefix(SCHEME_PREFIX) else {
        return Cow::Borrowed(input);
    };

    let access = bracketed(rest, "]:");
    let after_access = access.map_or(rest, |(_, tail)| tail);

    // The secret starts after the first colon. The access key before it must
    // be non-empty, either bracketed or bare.
    let secret = after_access
        .find(':')
        .filter(|&colon| colon > 0 || access.is_some())
        .and_then(|colon| {
            bracketed(&after_access[colon + 1..], "]@").map(|found| (colon, found))
        });

    if access.is_none() && secret.is_none() {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() * 2);
    out.push_str(SCHEME_PREFIX);
    if let Some((content, _)) = access {
        out.extend(utf8_percent_encode(content, CREDENTIAL));
    }
    match secret {
        Some((colon, (content, tail))) => {
            out.push_str(&after_access[..=colon]);
            out.extend(utf8_percent_encode(content, CREDENTIAL));
            out.push_str(tail);
        }
        None => out.push_str(after_access),
    }
    Cow::Owned(out)
}

/// Split `[content]<delim>tail` into `content` and `<delim>tail`.
///
/// `closing` is `]` followed by the delimiter. The content must hold at least
/// one character and ends at the first `closing` after that character, so
/// `[` and `]` may appear inside it.
fn bracketed<'a>(s: &'a str, closing: &str) -> Option<(&'a str, &'a str)> {
    let body = s.strip_prefix('[')?;
    let first = body.chars().next()?.len_utf8();
    let close = first + body[first..].find(closing)?;
    Some((&body[..close], &body[close + 1..]))
}

/// Reject userinfo that is not authority-safe after the pre-pass.
///
/// Allowed: unreserved characters, sub-delimiters, `:` and well-formed `%XX`
/// escapes. A bracket that survived the pre-pass (for instance `[]`) is an
/// error here.
pub(crate) fn check_userinfo(rewritten: &str) -> ConnectionResult<()> {
    let Some(rest) = rewritten.strip_prefix(SCHEME_PREFIX) else {
        return Ok(());
    };
    let authority = rest
        .find(['/', '?', '#'])
        .map_or(rest, |end| &rest[..end]);
    let Some(at) = authority.rfind('@') else {
        return Ok(());
    };

    let bytes = authority[..at].as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escape = bytes.get(i + 1..i + 3);
                if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                    return Err(ConnectionError::malformed(
                        "invalid percent-escape in credentials",
                    ));
                }
                i += 3;
            }
            b if is_userinfo_byte(b) => i += 1,
            _ => {
                return Err(ConnectionError::malformed(
                    "invalid character in credentials, wrap the value in [ and ]",
                ));
            }
        }
    }
    Ok(())
}

fn is_userinfo_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b':'
        )
}
