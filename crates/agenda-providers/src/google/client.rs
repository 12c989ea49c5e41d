//! Google Calendar API client.
//!
//! Low-level HTTP access to the three Calendar v3 endpoints the gateway
//! needs. One request per call: no paging, no retries.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::gateway::{CalendarListOptions, EventQuery};
use crate::raw::{ColorTable, RawCalendar, RawEvent};

use super::config::GoogleConfig;

/// Google Calendar API client.
#[derive(Debug)]
pub struct GoogleCalendarClient {
    http_client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl GoogleCalendarClient {
    /// Creates a client from a validated configuration.
    pub fn new(config: &GoogleConfig) -> ProviderResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                ProviderError::configuration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            access_token: config.access_token.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Lists the user's calendars.
    pub async fn list_calendars(
        &self,
        options: CalendarListOptions,
    ) -> ProviderResult<Vec<RawCalendar>> {
        let url = format!("{}/users/me/calendarList", self.base_url);
        let list: CalendarListResponse = self
            .get_json(&url, &[("showHidden", options.show_hidden.to_string())])
            .await?;
        Ok(list.items)
    }

    /// Fetches the event color palette.
    pub async fn get_colors(&self) -> ProviderResult<ColorTable> {
        let url = format!("{}/colors", self.base_url);
        let colors: ColorsResponse = self.get_json(&url, &[]).await?;
        Ok(colors.event)
    }

    /// Lists events from a calendar.
    pub async fn list_events(&self, query: &EventQuery) -> ProviderResult<Vec<RawEvent>> {
        let url = events_url(&self.base_url, &query.calendar_id);
        let list: EventListResponse = self.get_json(&url, &event_params(query)).await?;

        debug!(
            "fetched {} events from calendar {}",
            list.items.len(),
            query.calendar_id
        );
        Ok(list.items)
    }

    /// Sends an authenticated GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> ProviderResult<T> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::network("request timeout")
                } else if e.is_connect() {
                    ProviderError::network(format!("connection failed: {}", e))
                } else {
                    ProviderError::network(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("failed to read response: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| {
            ProviderError::invalid_response(format!("failed to parse response: {}", e))
        })
    }
}

fn events_url(base_url: &str, calendar_id: &str) -> String {
    format!(
        "{}/calendars/{}/events",
        base_url,
        urlencoding::encode(calendar_id)
    )
}

fn event_params(query: &EventQuery) -> Vec<(&'static str, String)> {
    vec![
        ("timeMin", query.time_min.to_rfc3339()),
        ("timeMax", query.time_max.to_rfc3339()),
        ("singleEvents", query.single_events.to_string()),
        ("orderBy", "startTime".to_string()),
        ("showDeleted", query.show_deleted.to_string()),
    ]
}

/// Maps a non-success HTTP status to a provider error.
fn status_error(status: reqwest::StatusCode, body: &str) -> ProviderError {
    match status {
        reqwest::StatusCode::UNAUTHORIZED => {
            ProviderError::authentication("access token expired or invalid")
        }
        reqwest::StatusCode::FORBIDDEN => ProviderError::authorization("access denied to calendar"),
        reqwest::StatusCode::NOT_FOUND => ProviderError::not_found("calendar not found"),
        reqwest::StatusCode::TOO_MANY_REQUESTS => ProviderError::rate_limited("rate limit exceeded"),
        _ => ProviderError::server(format!("API error ({}): {}", status, body)),
    }
}

/// Response from the calendarList endpoint.
#[derive(Debug, Deserialize)]
struct CalendarListResponse {
    #[serde(default)]
    items: Vec<RawCalendar>,
}

/// Response from the colors endpoint. Only the event palette is used.
#[derive(Debug, Deserialize)]
struct ColorsResponse {
    #[serde(default)]
    event: ColorTable,
}

/// Response from the events.list endpoint.
#[derive(Debug, Deserialize)]
struct EventListResponse {
    #[serde(default)]
    items: Vec<RawEvent>,
}
