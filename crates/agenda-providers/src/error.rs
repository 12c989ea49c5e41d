//! Error types for gateway and agenda operations.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The category of a provider error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorCode {
    /// Access token missing, invalid or expired.
    AuthenticationFailed,
    /// The token is valid but lacks access to the resource.
    AuthorizationFailed,
    /// Connection failed, timed out, DNS resolution, etc.
    NetworkError,
    /// Quota or rate limit exceeded.
    RateLimited,
    /// The service answered with an unexpected status.
    ServerError,
    /// The response or one of its records could not be interpreted.
    InvalidResponse,
    /// Calendar not found.
    NotFound,
    /// Missing or invalid configuration.
    ConfigurationError,
    /// Unexpected state inside the gateway.
    InternalError,
}

impl ProviderErrorCode {
    /// Returns a machine-readable name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "authentication_failed",
            Self::AuthorizationFailed => "authorization_failed",
            Self::NetworkError => "network_error",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::InvalidResponse => "invalid_response",
            Self::NotFound => "not_found",
            Self::ConfigurationError => "configuration_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error reported by a provider gateway.
///
/// Gateway failures of every kind (transport, auth, quota, malformed
/// records) travel to the caller as this type, unchanged.
#[derive(Debug, Error)]
pub struct ProviderError {
    code: ProviderErrorCode,
    message: String,
    /// Gateway that produced the error (e.g. "google").
    provider: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ProviderError {
    pub fn new(code: ProviderErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider: None,
            source: None,
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::AuthenticationFailed, message)
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::AuthorizationFailed, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::NetworkError, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::RateLimited, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::ServerError, message)
    }

    /// A response, or one record in it, that could not be interpreted.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::InvalidResponse, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::NotFound, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::ConfigurationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::InternalError, message)
    }

    /// Sets the gateway name for this error.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Sets the underlying cause.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn code(&self) -> ProviderErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref provider) = self.provider {
            write!(f, "[{}] ", provider)?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for gateway operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors returned by [`Agenda`](crate::Agenda) queries.
#[derive(Debug, Error)]
pub enum AgendaError {
    /// The query range is empty or reversed. Raised before any gateway call.
    #[error("the start time should be before the end time (start: {start}, end: {end})")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// The gateway failed; passed through unchanged.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AgendaError {
    pub fn invalid_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::InvalidRange { start, end }
    }
}

/// Result type for agenda queries.
pub type AgendaResult<T> = Result<T, AgendaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn error_code_names() {
        assert_eq!(
            ProviderErrorCode::AuthenticationFailed.as_str(),
            "authentication_failed"
        );
        assert_eq!(ProviderErrorCode::InvalidResponse.to_string(), "invalid_response");
    }

    #[test]
    fn provider_error_creation() {
        let err = ProviderError::authentication("token expired");
        assert_eq!(err.code(), ProviderErrorCode::AuthenticationFailed);
        assert_eq!(err.message(), "token expired");
        assert!(err.provider().is_none());
    }

    #[test]
    fn provider_error_display() {
        let err = ProviderError::rate_limited("quota exceeded").with_provider("google");
        let display = err.to_string();
        assert!(display.contains("[google]"));
        assert!(display.contains("rate_limited"));
        assert!(display.contains("quota exceeded"));
    }

    #[test]
    fn provider_error_with_source() {
        use std::error::Error;
        let io_err = std::io::Error::other("connection reset");
        let err = ProviderError::network("request failed").with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn agenda_error_wraps_provider_error_transparently() {
        let err: AgendaError = ProviderError::not_found("no such calendar").into();
        assert_eq!(err.to_string(), "not_found: no such calendar");
    }

    #[test]
    fn invalid_range_message() {
        let at = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
        let err = AgendaError::invalid_range(at, at);
        assert!(
            err.to_string()
                .starts_with("the start time should be before the end time")
        );
    }
}
