//! [`ProviderGateway`] implementation for Google Calendar.

use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::gateway::{BoxFuture, CalendarListOptions, EventQuery, ProviderGateway};
use crate::raw::{ColorTable, RawCalendar, RawEvent};

use super::client::GoogleCalendarClient;
use super::config::GoogleConfig;

/// Google Calendar gateway.
///
/// Errors carry the gateway name so callers can tell where they came from.
#[derive(Debug)]
pub struct GoogleGateway {
    client: GoogleCalendarClient,
}

impl GoogleGateway {
    pub const NAME: &'static str = "google";

    /// Creates a gateway from the given configuration.
    pub fn new(config: GoogleConfig) -> ProviderResult<Self> {
        config
            .validate()
            .map_err(|e| ProviderError::configuration(e).with_provider(Self::NAME))?;

        debug!(base_url = %config.base_url, "creating Google gateway");
        let client = GoogleCalendarClient::new(&config).map_err(|e| e.with_provider(Self::NAME))?;

        Ok(Self { client })
    }
}

impl ProviderGateway for GoogleGateway {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn list_calendars(
        &self,
        options: CalendarListOptions,
    ) -> BoxFuture<'_, ProviderResult<Vec<RawCalendar>>> {
        Box::pin(async move {
            self.client
                .list_calendars(options)
                .await
                .map_err(|e| e.with_provider(Self::NAME))
        })
    }

    fn list_colors(&self) -> BoxFuture<'_, ProviderResult<ColorTable>> {
        Box::pin(async move {
            self.client
                .get_colors()
                .await
                .map_err(|e| e.with_provider(Self::NAME))
        })
    }

    fn list_events(&self, query: EventQuery) -> BoxFuture<'_, ProviderResult<Vec<RawEvent>>> {
        Box::pin(async move {
            self.client
                .list_events(&query)
                .await
                .map_err(|e| e.with_provider(Self::NAME))
        })
    }
}
