use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_SESSION_FILE: &str = ".pt_session.json";

/// Runtime configuration, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub session_file: PathBuf,
    /// Token to save into the session store on startup
    pub initial_token: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            initial_token: None,
        }
    }
}

impl ResolverConfig {
    /// Load from the process environment (call `dotenvy::dotenv()` first)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = lookup("PT_API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.api_url);

        let request_timeout = match lookup("PT_REQUEST_TIMEOUT_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    warn!("Ignoring invalid PT_REQUEST_TIMEOUT_MS={:?}", raw);
                    defaults.request_timeout
                }
            },
            None => defaults.request_timeout,
        };

        let session_file = lookup("PT_SESSION_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.session_file);

        Self {
            api_url,
            request_timeout,
            session_file,
            initial_token: lookup("PT_TOKEN"),
        }
    }
}
