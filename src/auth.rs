// Authenticated HTTP client construction. Every request sent through the
// returned client carries the bearer token and a JSON content type; reqwest
// applies default headers to a per-request copy, so callers can retry or
// reuse builders without aliasing concerns.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{Error, Result};

// The API itself mandates no timeout; 30s is a sane default so a hung remote
// does not block the CLI forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a blocking HTTP client that authenticates every request with the
/// given bearer token. Fails with `Error::Auth` when the token is empty,
/// before anything touches the network.
pub fn client(token: &str) -> Result<Client> {
    if token.is_empty() {
        return Err(Error::Auth);
    }

    let mut headers = HeaderMap::new();
    let mut bearer =
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| Error::Auth)?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        assert!(matches!(client(""), Err(Error::Auth)));
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        assert!(matches!(client("bad\ntoken"), Err(Error::Auth)));
    }

    #[test]
    fn valid_token_builds_a_client() {
        assert!(client("tok-123").is_ok());
    }
}
