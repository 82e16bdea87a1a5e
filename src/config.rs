use anyhow::Result;
use std::env;

/// Value `CSE_ID` falls back to when the deployment never set it.
pub const PLACEHOLDER_CSE_ID: &str = "YOUR_DEFAULT_CSE_ID";

pub const DEFAULT_CSE_ENDPOINT: &str = "https://customsearch.googleapis.com/customsearch/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Clone)]
pub struct SearchConfig {
    pub cse_id: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_dir: Option<String>,
}

// Credentials never reach the logs.
impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("cse_id", &self.cse_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SearchConfig {
    /// True when `cse_id` holds a real engine id rather than nothing or the placeholder.
    pub fn is_cse_configured(&self) -> bool {
        is_cse_id_configured(&self.cse_id)
    }
}

pub fn is_cse_id_configured(cse_id: &str) -> bool {
    !cse_id.is_empty() && cse_id != PLACEHOLDER_CSE_ID
}

/// Reads an optional variable, treating an empty value the same as an unset one.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            search: SearchConfig {
                cse_id: env::var("CSE_ID").unwrap_or_else(|_| PLACEHOLDER_CSE_ID.to_string()),
                api_key: non_empty_var("GOOGLE_API_KEY"),
                access_token: non_empty_var("GOOGLE_OAUTH_ACCESS_TOKEN"),
                endpoint: env::var("CSE_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_CSE_ENDPOINT.to_string()),
                timeout_secs: env::var("CSE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            },
            logging: LoggingConfig {
                log_dir: non_empty_var("LOG_DIR"),
            },
        })
    }
}
