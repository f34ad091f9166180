use std::env;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.printnode.com";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Default API key, used when a call does not supply its own.
    pub api_key: Option<String>,
    /// API host, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Configuration with a default API key and the production host.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PRINTNODE_API_KEY` - Default API key (default: unset)
    /// - `PRINTNODE_BASE_URL` - API host (default: "https://api.printnode.com")
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("PRINTNODE_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            base_url: env::var("PRINTNODE_BASE_URL")
                .map(|url| normalize_base_url(&url))
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
