// Library root
// -----------
// The binary (`main.rs`) parses the command line and dispatches into these
// modules.
//
// Module responsibilities:
// - `config`: settings resolution (env var, settings file, defaults) and
//   persistence.
// - `auth`: construction of the HTTP client that attaches the bearer token
//   and JSON content type to every request.
// - `api`: the typed operations against the remote API.
// - `models`: the JSON wire shapes.
// - `error`: the error taxonomy shared by all of the above.
// - `commands`: subcommand handlers and text rendering.

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;

pub use api::ApiClient;
pub use config::Settings;
pub use error::{Error, Result};
