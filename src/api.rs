// API client: one method per remote operation, each a single blocking HTTP
// round trip. No retries, no caching, no pagination traversal beyond the
// first page of list responses.

use reqwest::blocking::Client;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::{
    Account, AccountResponse, CreateDropletRequest, CreateDropletResponse, Droplet,
    DropletListResponse, DropletResponse, ErrorResponse,
};

#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from resolved settings. Fails with `Error::Auth` when
    /// no token is configured.
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(ApiClient {
            http: auth::client(&settings.token)?,
            base_url: settings.base_url.clone(),
        })
    }

    pub fn get_account(&self) -> Result<Account> {
        let resp: AccountResponse = self.request(Method::GET, "/v2/account", None::<&()>)?;
        Ok(resp.account)
    }

    /// List droplets. Returns the first page only; pagination links in the
    /// response are not followed.
    pub fn list_droplets(&self) -> Result<Vec<Droplet>> {
        let resp: DropletListResponse = self.request(Method::GET, "/v2/droplets", None::<&()>)?;
        Ok(resp.droplets)
    }

    pub fn get_droplet(&self, id: u64) -> Result<Droplet> {
        let endpoint = format!("/v2/droplets/{id}");
        let resp: DropletResponse = self.request(Method::GET, &endpoint, None::<&()>)?;
        Ok(resp.droplet)
    }

    pub fn create_droplet(&self, req: &CreateDropletRequest) -> Result<Droplet> {
        if req.name.is_empty()
            || req.region.is_empty()
            || req.size.is_empty()
            || req.image.is_empty()
        {
            return Err(Error::InvalidRequest(
                "name, region, size, and image are required".to_string(),
            ));
        }
        let resp: CreateDropletResponse = self.request(Method::POST, "/v2/droplets", Some(req))?;
        Ok(resp.droplet)
    }

    pub fn delete_droplet(&self, id: u64) -> Result<()> {
        let endpoint = format!("/v2/droplets/{id}");
        self.send(Method::DELETE, &endpoint, None::<&()>)?;
        Ok(())
    }

    fn request<B, T>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let text = self.send(method, endpoint, body)?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    // Single round trip: join the URL, attach the JSON body when present,
    // send, and classify any non-2xx response. Returns the raw body text so
    // callers without a payload (delete) skip decoding entirely.
    fn send<B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<String> {
        let url = join_url(&self.base_url, endpoint);
        let mut req = self.http.request(method, &url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send()?;
        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &text));
        }
        Ok(text)
    }
}

// Join a base URL and an endpoint path with exactly one separating slash,
// regardless of how either side is written.
fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

// Classify a non-2xx response: prefer the first message of the structured
// error envelope, fall back to the raw status and body.
fn api_error(status: u16, body: &str) -> Error {
    if let Ok(envelope) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(first) = envelope.errors.first() {
            return Error::Api {
                status,
                message: first.message.clone(),
            };
        }
    }
    Error::Api {
        status,
        message: format!("status {status}: {body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_inserts_exactly_one_slash() {
        assert_eq!(
            join_url("https://api.example.com", "/v2/droplets/7"),
            "https://api.example.com/v2/droplets/7"
        );
        assert_eq!(
            join_url("https://api.example.com/", "/v2/droplets/7"),
            "https://api.example.com/v2/droplets/7"
        );
        assert_eq!(
            join_url("https://api.example.com", "v2/account"),
            "https://api.example.com/v2/account"
        );
    }

    #[test]
    fn structured_error_surfaces_first_message() {
        let body = r#"{"errors":[{"id":"not_found","message":"The resource you requested could not be found."}]}"#;
        match api_error(404, body) {
            Error::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "The resource you requested could not be found.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_envelope_falls_back_to_raw_body() {
        match api_error(500, r#"{"errors":[]}"#) {
            Error::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("status 500"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_an_opaque_error() {
        match api_error(502, "bad gateway") {
            Error::Api { status, message } => {
                assert_eq!(status, 502);
                assert!(message.contains("bad gateway"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
