//! # Client configuration
//!
//! [`ApiConfig`] holds the backend base URL and how logins are verified.
//! It can be built three ways:
//!
//! - [`ApiConfig::default`]: `http://localhost:3000`, directory login.
//! - [`ApiConfig::from_env`]: defaults overridden by `API_URL` and
//!   `API_LOGIN_MODE` (a `.env` file is loaded first when present).
//! - [`ApiConfig::from_toml`]: an `[api]` table:
//!
//! ```toml
//! [api]
//! base_url = "https://food.example.com"
//! login_mode = "credentials"   # or "directory"
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// How the session store verifies a login.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMode {
    /// `POST /auth/login`; the backend checks the password and issues the token.
    Credentials,
    /// Fetch `/users` and match email and password on the client, minting a
    /// local token. Kept for backends without a login endpoint.
    #[default]
    Directory,
}

impl std::str::FromStr for LoginMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credentials" => Ok(Self::Credentials),
            "directory" => Ok(Self::Directory),
            other => Err(format!("Unknown login mode: {}", other)),
        }
    }
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub login_mode: LoginMode,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_mode: LoginMode::default(),
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api: ApiConfig,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the login mode.
    pub fn with_login_mode(mut self, mode: LoginMode) -> Self {
        self.login_mode = mode;
        self
    }

    /// Defaults overridden by `API_URL` / `API_LOGIN_MODE`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match lookup("API_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => config.base_url = url.trim().to_string(),
            None => info!("API_URL not set, using default: {}", DEFAULT_API_URL),
        }

        if let Some(mode) = lookup("API_LOGIN_MODE") {
            match mode.parse() {
                Ok(mode) => config.login_mode = mode,
                Err(e) => warn!("Invalid API_LOGIN_MODE value: {}", e),
            }
        }

        config
    }

    /// Parse the `[api]` table of a TOML document. A missing table or missing
    /// keys fall back to the defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<ConfigFile>(s).map(|file| file.api)
    }
}
