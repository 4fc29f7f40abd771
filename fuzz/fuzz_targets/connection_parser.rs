//! Fuzz target for the connection string parser.
//!
//! Feeds arbitrary strings, and structured strings shaped like connection
//! URLs, to the parser. The parser must never panic, and every config it
//! accepts must hold the success invariants.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_connection_parser
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use s3url_core::{ANY_PREFIX_PARAM, ConnectionConfig, parse};

/// A connection string assembled from fuzzed parts.
#[derive(Debug, Arbitrary)]
struct FuzzUrl {
    access_key: String,
    secret_key: String,
    bracket_access: bool,
    bracket_secret: bool,
    host: String,
    path: String,
    query: Option<String>,
}

impl FuzzUrl {
    fn to_url(&self) -> String {
        let wrap = |value: &str, bracket: bool| {
            if bracket {
                format!("[{value}]")
            } else {
                value.to_string()
            }
        };
        let mut url = format!(
            "s3://{}:{}@{}/{}",
            wrap(&self.access_key, self.bracket_access),
            wrap(&self.secret_key, self.bracket_secret),
            self.host,
            self.path
        );
        if let Some(query) = &self.query {
            url.push('?');
            url.push_str(query);
        }
        url
    }
}

fn check_invariants(config: &ConnectionConfig) {
    assert!(!config.access_key_id.is_empty());
    assert!(!config.secret_key.is_empty());
    assert!(!config.bucket.is_empty());
    assert!(!config.endpoint_host.is_empty());
    assert_eq!(config.endpoint, format!("https://{}", config.endpoint_host));
    assert!(!config.params.contains_key(ANY_PREFIX_PARAM));
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(config) = parse(input) {
            check_invariants(&config);
        }
    }

    let mut u = arbitrary::Unstructured::new(data);
    if let Ok(fuzz_url) = FuzzUrl::arbitrary(&mut u) {
        let url = fuzz_url.to_url();
        if let Ok(config) = parse(&url) {
            check_invariants(&config);
            // Bracketed values without the closing sequence come back verbatim.
            let plain_access = !fuzz_url.bracket_access
                && !fuzz_url.access_key.is_empty()
                && fuzz_url.access_key.chars().all(|c| c.is_ascii_alphanumeric());
            if plain_access
                && fuzz_url.bracket_secret
                && !fuzz_url.secret_key.is_empty()
                && !fuzz_url.secret_key.contains("]@")
            {
                assert_eq!(config.secret_key, fuzz_url.secret_key);
            }
        }
    }
});
