//! CLI configuration.
//!
//! All settings live in `~/.config/agenda/config.toml` by default.
//!
//! The Google `access_token` supports secret references:
//! - `pass::path/in/store`: resolved via `pass show`
//! - `env::VAR_NAME`: resolved from the environment
//! - plain text: used as-is

use std::path::{Path, PathBuf};
use std::time::Duration;

use agenda_providers::PRIMARY_CALENDAR_ID;
use agenda_providers::google::GoogleConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the agenda CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug logging.
    pub debug: bool,

    /// Google Calendar settings.
    pub google: Option<GoogleSettings>,
}

impl ClientConfig {
    /// Loads configuration from the default path, or defaults if the file
    /// does not exist.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("agenda")
            .join("config.toml")
    }

    /// Returns the Google settings, or an error explaining how to add them.
    pub fn google(&self) -> Result<&GoogleSettings, String> {
        self.google.as_ref().ok_or_else(|| {
            format!(
                "Google settings not found. Add to {}:\n  \
                 [google]\n  \
                 access_token = \"env::AGENDA_GOOGLE_TOKEN\"",
                Self::default_path().display()
            )
        })
    }
}

/// Google Calendar settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleSettings {
    /// OAuth access token (supports `pass::` and `env::` prefixes).
    pub access_token: Option<String>,

    /// Calendar to query appointments from.
    pub calendar_id: String,

    /// Request timeout in seconds.
    pub timeout: u64,

    /// Alternative API endpoint.
    pub base_url: Option<String>,
}

impl Default for GoogleSettings {
    fn default() -> Self {
        Self {
            access_token: None,
            calendar_id: PRIMARY_CALENDAR_ID.to_string(),
            timeout: GoogleConfig::DEFAULT_TIMEOUT_SECS,
            base_url: None,
        }
    }
}

impl GoogleSettings {
    /// Resolves the access token and builds the gateway configuration.
    pub fn to_provider_config(&self) -> Result<GoogleConfig, String> {
        let raw_token = self
            .access_token
            .as_deref()
            .ok_or_else(|| "access_token is missing from [google] section".to_string())?;
        let token = crate::secret::resolve(raw_token)
            .map_err(|e| format!("failed to resolve access_token: {}", e))?;

        let mut config = GoogleConfig::new(token).with_timeout(Duration::from_secs(self.timeout));
        if let Some(ref base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }

        config.validate()?;
        Ok(config)
    }
}
