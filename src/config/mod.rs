use std::env;

use anyhow::Context;

use crate::api::{get_api_prefix, GameType};

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8888";
/// Value of the backend's `auth_token` session cookie, copied from a browser
/// that completed the login.
pub const SESSION_TOKEN_VAR: &str = "AUTH_TOKEN";

/// Where the backend lives. Paths are appended to `api_base_url`, which
/// never ends with a slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: &str) -> Result<Self, anyhow::Error> {
        let url = url::Url::parse(api_base_url)
            .with_context(|| format!("invalid API base url {api_base_url:?}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow::anyhow!(
                "API base url {api_base_url:?} must be http or https"
            ));
        }

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Reads `API_BASE_URL`, falling back to the local development backend.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        match env::var(API_BASE_URL_VAR) {
            Ok(value) => Self::from_value(Some(&value)),
            Err(env::VarError::NotPresent) => Self::from_value(None),
            Err(e) => Err(anyhow::anyhow!("cannot read {API_BASE_URL_VAR}: {e}")),
        }
    }

    fn from_value(value: Option<&str>) -> Result<Self, anyhow::Error> {
        match value.map(str::trim) {
            Some(value) if !value.is_empty() => Self::new(value),
            _ => Ok(Self::default()),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// Full url of a per-game API path, e.g. `{base}/api/cr/clans`.
    pub fn api_url(&self, game: GameType, path: &str) -> String {
        format!("{}{}{}", self.api_base_url, get_api_prefix(game), path)
    }
}
