// Persisted connection settings: the server URL plus the cached auth
// token/user id pair obtained from a previous login. Stored as an indented
// JSON file so an operator can inspect or delete it by hand (deleting it is
// the only way to force a fresh login).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Authentication pair returned by the login endpoint and attached to every
/// authenticated request. The two values only ever travel together; a config
/// file holding just one of them is treated as not logged in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    #[serde(rename = "authToken")]
    pub auth_token: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// On-disk shape. `url` sits alongside the credential fields for convenience;
/// `load` hands it back separately so callers never mix it into headers.
#[derive(Serialize, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    url: String,
    #[serde(rename = "authToken", default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
}

/// Reads and writes the connection config at a fixed path. The path is given
/// at construction so tests can point the store at a scratch file.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        ConfigStore { path }
    }

    /// Resolve the config location from the `THEMEPUSH_CONFIG` environment
    /// variable, or fall back to a dotfile in the user's home directory.
    pub fn from_env() -> Self {
        let path = match std::env::var("THEMEPUSH_CONFIG") {
            Ok(p) => PathBuf::from(p),
            Err(_) => ConfigStore::default_path(),
        };
        ConfigStore::new(path)
    }

    pub fn default_path() -> PathBuf {
        let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.join(".themepush.json")
    }

    /// Returns the saved server URL and, if a complete pair was cached, the
    /// credentials. A missing file or a file without a URL yields an empty
    /// URL and no credentials, meaning the caller has to prompt.
    pub fn load(&self) -> Result<(String, Option<Credentials>)> {
        if !self.path.exists() {
            return Ok((String::new(), None));
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;
        let file: ConfigFile = serde_json::from_str(&raw)
            .with_context(|| format!("Config file {} is not valid JSON", self.path.display()))?;

        if file.url.is_empty() {
            return Ok((String::new(), None));
        }

        let creds = match (file.auth_token, file.user_id) {
            (Some(auth_token), Some(user_id)) => Some(Credentials { auth_token, user_id }),
            _ => None,
        };
        Ok((file.url, creds))
    }

    /// Overwrites the config file with the URL and credentials. Full rewrite,
    /// no merge; written to a temp file first and renamed into place so a
    /// failed write never leaves a truncated config behind.
    pub fn save(&self, url: &str, creds: &Credentials) -> Result<()> {
        let file = ConfigFile {
            url: url.to_string(),
            auth_token: Some(creds.auth_token.clone()),
            user_id: Some(creds.user_id.clone()),
        };
        let mut body = serde_json::to_string_pretty(&file)?;
        body.push('\n');

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)
            .with_context(|| format!("Failed to write config file {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace config file {}", self.path.display()))?;
        Ok(())
    }
}
