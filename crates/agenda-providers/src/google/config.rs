//! Google Calendar gateway configuration.

use std::time::Duration;

/// Configuration for the Google Calendar gateway.
///
/// The gateway does not run an OAuth flow: it is handed an access token
/// obtained elsewhere.
#[derive(Clone)]
pub struct GoogleConfig {
    /// OAuth 2.0 bearer token for the Calendar API.
    pub access_token: String,

    /// Base URL of the Calendar API.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string for API requests.
    pub user_agent: String,
}

impl GoogleConfig {
    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Base URL for Google Calendar API v3.
    pub const DEFAULT_BASE_URL: &'static str = "https://www.googleapis.com/calendar/v3";

    /// Creates a configuration with default endpoint and timeout.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            user_agent: format!("agenda/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.access_token.trim().is_empty() {
            return Err("access_token is required".to_string());
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| format!("invalid base_url {:?}: {}", self.base_url, e))?;

        if self.timeout.is_zero() {
            return Err("timeout must be greater than zero".to_string());
        }

        Ok(())
    }
}

// Keeps the token out of debug logs.
impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_creation() {
        let config = GoogleConfig::new("ya29.token");
        assert_eq!(config.base_url, GoogleConfig::DEFAULT_BASE_URL);
        assert_eq!(
            config.timeout,
            Duration::from_secs(GoogleConfig::DEFAULT_TIMEOUT_SECS)
        );
        assert!(config.user_agent.starts_with("agenda/"));
    }

    #[test]
    fn config_builder_methods() {
        let config = GoogleConfig::new("ya29.token")
            .with_base_url("http://127.0.0.1:8080/calendar/v3")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test");

        assert_eq!(config.base_url, "http://127.0.0.1:8080/calendar/v3");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test");
    }

    #[test]
    fn config_validation() {
        assert!(GoogleConfig::new("ya29.token").validate().is_ok());
        assert!(GoogleConfig::new("  ").validate().is_err());
        assert!(
            GoogleConfig::new("ya29.token")
                .with_base_url("not a url")
                .validate()
                .is_err()
        );
        assert!(
            GoogleConfig::new("ya29.token")
                .with_timeout(Duration::ZERO)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn debug_redacts_token() {
        let config = GoogleConfig::new("ya29.secret-token");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}
