use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote marketplace API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the marketplace API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL for the separate unauthenticated demo user service.
    #[serde(default = "default_user_base_url")]
    pub user_base_url: String,
    /// Overall request timeout in seconds (default: 15).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Bearer token for marketplace requests.
    ///
    /// Absent means requests go out without an Authorization header.
    /// The `GIFTMART_TOKEN` environment variable takes precedence over
    /// the file so the token never has to live on disk.
    #[serde(default)]
    pub token: Option<String>,
}

/// UI behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-loop tick rate in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// User id fetched from the demo user service for the dashboard.
    #[serde(default = "default_demo_user_id")]
    pub demo_user_id: u64,
}

fn default_base_url() -> String {
    "http://localhost:3233/api".to_string()
}

fn default_user_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    15
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_demo_user_id() -> u64 {
    1
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_base_url: default_user_base_url(),
            timeout_seconds: default_timeout_seconds(),
            token: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            demo_user_id: default_demo_user_id(),
        }
    }
}

impl ApiConfig {
    /// Effective bearer token: environment first, then the config file.
    ///
    /// Empty strings count as absent so `GIFTMART_TOKEN=""` disables the
    /// header instead of sending a blank credential.
    pub fn resolved_token(&self) -> Option<String> {
        let from_env = std::env::var("GIFTMART_TOKEN").ok();
        from_env
            .or_else(|| self.token.clone())
            .filter(|t| !t.trim().is_empty())
    }
}
