//! Configuration commands.

use std::path::Path;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::secret;

/// Renders the configuration as TOML.
///
/// Secret references are shown as written; plain-text tokens are masked.
pub fn dump(config: &ClientConfig, path: &Path) -> ClientResult<String> {
    let mut shown = config.clone();
    if let Some(ref mut google) = shown.google
        && let Some(ref token) = google.access_token
        && !secret::is_reference(token)
    {
        google.access_token = Some("<redacted>".to_string());
    }

    let toml_str = toml::to_string_pretty(&shown)
        .map_err(|e| ClientError::config(format!("failed to serialize config: {}", e)))?;
    Ok(format!("# config.toml ({})\n{}", path.display(), toml_str))
}

/// Checks that the Google settings are present and usable.
///
/// Resolves the access token, so `pass::` and `env::` references must be
/// reachable.
pub fn validate(config: &ClientConfig) -> ClientResult<String> {
    let google = config.google().map_err(ClientError::Config)?;
    if google.calendar_id.trim().is_empty() {
        return Err(ClientError::config("Google calendar_id must not be empty"));
    }
    google
        .to_provider_config()
        .map_err(|e| ClientError::config(format!("invalid Google settings: {}", e)))?;

    Ok("Configuration is valid.".to_string())
}

/// Shows the configuration file path.
pub fn path(path: &Path) -> ClientResult<String> {
    Ok(format!("config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GoogleSettings;

    fn with_google(access_token: Option<&str>) -> ClientConfig {
        ClientConfig {
            debug: false,
            google: Some(GoogleSettings {
                access_token: access_token.map(str::to_string),
                ..GoogleSettings::default()
            }),
        }
    }

    #[test]
    fn dump_masks_plain_tokens() {
        let output = dump(&with_google(Some("ya29.secret")), Path::new("/tmp/config.toml")).unwrap();
        assert!(output.starts_with("# config.toml (/tmp/config.toml)\n"));
        assert!(output.contains("<redacted>"));
        assert!(!output.contains("ya29.secret"));
    }

    #[test]
    fn dump_keeps_references() {
        let output = dump(&with_google(Some("env::AGENDA_TOKEN")), Path::new("config.toml")).unwrap();
        assert!(output.contains("env::AGENDA_TOKEN"));
    }

    #[test]
    fn validate_requires_google_section() {
        let err = validate(&ClientConfig::default()).unwrap_err();
        assert!(err.to_string().contains("[google]"));
    }

    #[test]
    fn validate_requires_token() {
        let err = validate(&with_google(None)).unwrap_err();
        assert!(err.to_string().contains("access_token"));
    }

    #[test]
    fn validate_rejects_empty_calendar() {
        let mut config = with_google(Some("ya29.token"));
        if let Some(ref mut google) = config.google {
            google.calendar_id = " ".to_string();
        }
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("calendar_id"));
    }

    #[test]
    fn validate_accepts_complete_settings() {
        assert_eq!(
            validate(&with_google(Some("ya29.token"))).unwrap(),
            "Configuration is valid."
        );
    }

    #[test]
    fn path_is_printed() {
        assert_eq!(
            path(Path::new("/etc/agenda.toml")).unwrap(),
            "config: /etc/agenda.toml"
        );
    }
}
