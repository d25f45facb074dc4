use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const ENV_FILE: &str = ".env";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_login_url")]
    pub login_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://www.nytimes.com/svc/crosswords".to_string()
}

fn default_login_url() -> String {
    "https://myaccount.nytimes.com/svc/ios/v2/login".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_url: default_login_url(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }

    /// Load .env file into process environment. Real env vars take precedence.
    pub fn load_env_file() {
        let path = Path::new(ENV_FILE);
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return,
        };
        // Strip BOM if present (common on Windows-created files)
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        for line in content.lines() {
            let line = line.trim().trim_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
        }
    }

    /// Pre-supplied session token from NYT_COOKIE. When set, the network
    /// login is skipped entirely.
    pub fn session_token() -> Option<String> {
        std::env::var("NYT_COOKIE")
            .ok()
            .map(|v| sanitize_secret(&v))
            .filter(|v| !v.is_empty())
    }

    /// Resolve account credentials: CLI flags win, then NYT_EMAIL / NYT_PASSWORD.
    pub fn credentials(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<(String, String)> {
        let username = username
            .or_else(|| std::env::var("NYT_EMAIL").ok())
            .map(|v| sanitize_secret(&v))
            .filter(|v| !v.is_empty());
        let password = password
            .or_else(|| std::env::var("NYT_PASSWORD").ok())
            .filter(|v| !v.is_empty());
        match (username, password) {
            (Some(u), Some(p)) => Ok((u, p)),
            _ => anyhow::bail!(
                "missing credentials: set NYT_COOKIE, or pass -u/-p, \
                 or set NYT_EMAIL and NYT_PASSWORD"
            ),
        }
    }
}

/// Strip carriage returns, BOM, and other invisible chars from a pasted
/// token or email.
fn sanitize_secret(raw: &str) -> String {
    raw.replace(['\r', '\u{feff}', '\u{200b}'], "")
        .trim()
        .to_string()
}
