// Error taxonomy for the client. Every failure class the CLI can hit is a
// variant here; nothing is retried or recovered internally, errors propagate
// unchanged up to `main` which prints them and exits non-zero.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The settings file could not be read, written, or parsed, or the home
    /// directory could not be determined.
    #[error("config error: {0}")]
    Config(String),

    /// No API token was available when building the client. No request is
    /// sent in this state.
    #[error("authentication token is required (set DIGITALOCEAN_TOKEN or run `do-cli config set token <value>`)")]
    Auth,

    /// Network-level failure: DNS, connection refused, timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status. `message` is the first entry
    /// of the error envelope when one parsed, otherwise the raw status and
    /// body text.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape. This is a
    /// contract violation, not a recoverable condition.
    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request rejected locally, before any network call.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
