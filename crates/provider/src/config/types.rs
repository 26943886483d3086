use serde::{Deserialize, Serialize};

/// Provider configuration.
///
/// Owned by the host application; the provider only reads it. The host is
/// expected to call [`crate::YggProvider::refresh_urls`] and
/// [`crate::YggProvider::refresh_login_url`] when the corresponding fields
/// change.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Site base URL (e.g., "https://www.yggtorrent.org"). Must be https.
    pub url: String,
    /// Base URL of the login host. Often the same as `url`, kept separate
    /// because the site has moved its authentication domain in the past.
    #[serde(default)]
    pub login_url: String,
    /// Account username.
    #[serde(default)]
    pub username: String,
    /// Account password.
    #[serde(default)]
    pub password: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_timeout() -> u32 {
    30
}

/// Sanitized config for API responses and logs (password redacted).
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedProviderConfig {
    pub url: String,
    pub login_url: String,
    pub username: String,
    pub password_configured: bool,
    pub timeout_secs: u32,
}

impl From<&ProviderConfig> for SanitizedProviderConfig {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            url: config.url.clone(),
            login_url: config.login_url.clone(),
            username: config.username.clone(),
            password_configured: !config.password.is_empty(),
            timeout_secs: config.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
url = "https://www.yggtorrent.org"
login_url = "https://auth.yggtorrent.org"
username = "alice"
password = "hunter2"
timeout_secs = 10
"#;
        let config: ProviderConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.url, "https://www.yggtorrent.org");
        assert_eq!(config.login_url, "https://auth.yggtorrent.org");
        assert_eq!(config.username, "alice");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_deserialize_minimal_config() {
        let toml = r#"
url = "https://www.yggtorrent.org"
"#;
        let config: ProviderConfig = toml::from_str(toml).unwrap();
        assert!(config.login_url.is_empty());
        assert!(config.username.is_empty());
        assert_eq!(config.timeout_secs, 30); // default
    }

    #[test]
    fn test_deserialize_missing_url_fails() {
        let toml = r#"
username = "alice"
"#;
        let result: Result<ProviderConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_sanitized_config_hides_password() {
        let config = ProviderConfig {
            url: "https://www.yggtorrent.org".to_string(),
            login_url: "https://www.yggtorrent.org".to_string(),
            username: "alice".to_string(),
            password: "hunter2".to_string(),
            timeout_secs: 30,
        };
        let sanitized = SanitizedProviderConfig::from(&config);
        assert!(sanitized.password_configured);
        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("hunter2"));
    }
}
