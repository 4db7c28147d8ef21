use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable holding the OpenAI credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Optional override for the API base URL.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const ORGANIZATION_VAR: &str = "OPENAI_ORG_ID";
pub const PROJECT_VAR: &str = "OPENAI_PROJECT_ID";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Hosted Whisper model id.
pub const WHISPER_MODEL: &str = "whisper-1";
/// ISO-639-1 code for Spanish.
pub const SPANISH: &str = "es";

/// An API credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Settings for one invocation, loaded once at startup.
///
/// The credential stays optional here: a missing key is only reported after
/// the input file has been validated, so a bad path always wins over a bad
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<ApiKey>,
    pub base_url: String,
    pub organization: Option<String>,
    pub project: Option<String>,
    pub model: String,
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            organization: None,
            project: None,
            model: WHISPER_MODEL.into(),
            language: SPANISH.into(),
        }
    }
}

impl Config {
    /// Load `.env` (if any) into the process environment, then read settings
    /// from it. Variables already set in the environment take precedence.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => debug!("no .env file found"),
            Err(e) => debug!(error = %e, "ignoring unreadable .env"),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = non_empty(BASE_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Self {
            api_key: non_empty(API_KEY_VAR).map(ApiKey::new),
            base_url,
            organization: non_empty(ORGANIZATION_VAR),
            project: non_empty(PROJECT_VAR),
            ..Self::default()
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(key));
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// The credential, or `MissingCredential` if none was configured.
    pub fn require_api_key(&self) -> Result<&ApiKey> {
        self.api_key.as_ref().ok_or(Error::MissingCredential)
    }

    /// Full URL of the transcription endpoint.
    pub fn transcription_url(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }
}
