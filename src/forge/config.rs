//! Configuration for GitHub connections.
use secrecy::SecretString;

/// Public GitHub API endpoint used when no api url is configured.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Credentials and endpoint for one session.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Custom API base url for GitHub Enterprise.
    pub api_url: Option<String>,
    /// User for basic authentication.
    pub user: String,
    /// Password for basic authentication.
    pub password: SecretString,
    /// Log writes instead of sending them.
    pub dry_run: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            user: "".to_string(),
            password: SecretString::from("".to_string()),
            dry_run: false,
        }
    }
}

impl RemoteConfig {
    /// Endpoint this session talks to.
    pub fn endpoint(&self) -> &str {
        match self.api_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.trim(),
            _ => DEFAULT_API_URL,
        }
    }

    pub fn is_enterprise(&self) -> bool {
        self.endpoint() != DEFAULT_API_URL
    }
}
