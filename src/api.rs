// API client module: a small blocking HTTP client for the chat server's
// administrative REST API. One generic POST primitive carries both endpoints
// we use; endpoint-specific success checks sit in the public methods.

use crate::config::Credentials;
use anyhow::{anyhow, bail, Result};
use reqwest::blocking::Client;
use serde_json::Value;

const API_ROOT: &str = "/api/v1";

/// Blocking client bound to one server. Authentication is per-call: the
/// login request goes out bare, everything else attaches the cached
/// token/user-id header pair.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// POST `form` to `endpoint`, optionally with the auth header pair, and
    /// decode the response envelope. Single attempt, no retry. Failure
    /// order: transport error, unparseable body, then a server-reported
    /// `status: "error"` (the HTTP status code itself is not consulted —
    /// the server encodes failures in the body).
    fn request(
        &self,
        form: Option<&[(&str, &str)]>,
        auth: Option<&Credentials>,
        endpoint: &str,
    ) -> Result<Value> {
        let url = format!("{}{}/{}", self.base_url, API_ROOT, endpoint);
        let mut req = self.client.post(&url);
        if let Some(form) = form {
            req = req.form(form);
        }
        if let Some(creds) = auth {
            req = req
                .header("X-Auth-Token", &creds.auth_token)
                .header("X-User-Id", &creds.user_id);
        }

        let res = req.send()?;
        let text = res.text()?;
        let body: Value =
            serde_json::from_str(&text).map_err(|_| anyhow!("Unable to parse response"))?;

        if body["status"] == "error" {
            let message = body["message"].as_str().unwrap_or("Unspecified error");
            bail!("{}", message);
        }
        Ok(body)
    }

    /// Exchange a username and password for an auth token/user-id pair.
    /// Errors are prefixed with the phase tag `[login]`.
    pub fn login(&self, username: &str, password: &str) -> Result<Credentials> {
        let form = [("username", username), ("password", password)];
        let mut body = self
            .request(Some(&form), None, "login")
            .map_err(|e| anyhow!("[login] {}", e))?;
        serde_json::from_value(body["data"].take())
            .map_err(|_| anyhow!("[login] Malformed login response"))
    }

    /// Write the given stylesheet to the server's custom-CSS theme setting.
    /// This endpoint reports failure two ways: the common `status: "error"`
    /// envelope, and its own `success` flag, which must be `true` even when
    /// the envelope looks fine.
    pub fn set_custom_css(&self, css: &str, auth: &Credentials) -> Result<()> {
        let form = [("value", css)];
        let body = self
            .request(Some(&form), Some(auth), "settings/theme-custom-css")
            .map_err(|e| anyhow!("[settings]{}", e))?;
        if body["success"] != true {
            bail!("Unable to deploy CSS");
        }
        Ok(())
    }
}
