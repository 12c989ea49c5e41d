//! ProviderGateway trait definition.
//!
//! A gateway is the capability through which the agenda reaches a calendar
//! service. It only moves raw records; interpretation is left to the
//! [`mapper`](crate::mapper).

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};

use crate::error::{ProviderError, ProviderResult};
use crate::raw::{ColorTable, RawCalendar, RawEvent};

/// Calendar ID used when none is configured.
pub const PRIMARY_CALENDAR_ID: &str = "primary";

/// Options for listing calendars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarListOptions {
    /// Include calendars hidden from the user's list.
    pub show_hidden: bool,
}

/// An event listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub calendar_id: String,
    /// Lower bound on event end time.
    pub time_min: DateTime<Utc>,
    /// Upper bound on event start time.
    pub time_max: DateTime<Utc>,
    /// Expand recurring events into their instances. Results are always
    /// ordered by start time, which requires this.
    pub single_events: bool,
    /// Include cancelled events.
    pub show_deleted: bool,
}

impl EventQuery {
    /// Creates a query for `[time_min, time_max]` on `calendar_id` with
    /// recurring events expanded, ordered by start time, deleted events
    /// excluded.
    pub fn new(
        calendar_id: impl Into<String>,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            time_min,
            time_max,
            single_events: true,
            show_deleted: false,
        }
    }
}

/// A boxed future for async trait methods.
///
/// Boxing keeps the trait object-safe so gateways can be passed as
/// `Box<dyn ProviderGateway>`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Access to a calendar service.
///
/// Each call is a single request; gateways do not retry, paginate or cache.
/// Failures are reported as [`ProviderError`] and reach the caller
/// unchanged.
pub trait ProviderGateway: Send + Sync {
    /// Returns the name of this gateway (e.g. "google").
    fn name(&self) -> &str;

    /// Lists the calendars the user has access to.
    fn list_calendars(
        &self,
        options: CalendarListOptions,
    ) -> BoxFuture<'_, ProviderResult<Vec<RawCalendar>>>;

    /// Returns the event color palette.
    fn list_colors(&self) -> BoxFuture<'_, ProviderResult<ColorTable>>;

    /// Lists events matching `query`.
    fn list_events(&self, query: EventQuery) -> BoxFuture<'_, ProviderResult<Vec<RawEvent>>>;
}

impl<G: ProviderGateway + ?Sized> ProviderGateway for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn list_calendars(
        &self,
        options: CalendarListOptions,
    ) -> BoxFuture<'_, ProviderResult<Vec<RawCalendar>>> {
        (**self).list_calendars(options)
    }

    fn list_colors(&self) -> BoxFuture<'_, ProviderResult<ColorTable>> {
        (**self).list_colors()
    }

    fn list_events(&self, query: EventQuery) -> BoxFuture<'_, ProviderResult<Vec<RawEvent>>> {
        (**self).list_events(query)
    }
}

/// A gateway that fails every call.
///
/// Stands in for a gateway that could not be configured, so the failure
/// surfaces on first use with the original cause.
#[derive(Debug)]
pub struct ErrorGateway {
    name: String,
    error: ProviderError,
}

impl ErrorGateway {
    pub fn new(name: impl Into<String>, error: ProviderError) -> Self {
        Self {
            name: name.into(),
            error,
        }
    }

    fn error(&self) -> ProviderError {
        ProviderError::new(self.error.code(), self.error.message()).with_provider(&self.name)
    }
}

impl ProviderGateway for ErrorGateway {
    fn name(&self) -> &str {
        &self.name
    }

    fn list_calendars(
        &self,
        _options: CalendarListOptions,
    ) -> BoxFuture<'_, ProviderResult<Vec<RawCalendar>>> {
        let error = self.error();
        Box::pin(async move { Err(error) })
    }

    fn list_colors(&self) -> BoxFuture<'_, ProviderResult<ColorTable>> {
        let error = self.error();
        Box::pin(async move { Err(error) })
    }

    fn list_events(&self, _query: EventQuery) -> BoxFuture<'_, ProviderResult<Vec<RawEvent>>> {
        let error = self.error();
        Box::pin(async move { Err(error) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorCode;
    use chrono::TimeZone;

    #[test]
    fn event_query_defaults() {
        let min = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(2019, 1, 1, 23, 59, 59).unwrap();
        let query = EventQuery::new(PRIMARY_CALENDAR_ID, min, max);

        assert_eq!(query.calendar_id, "primary");
        assert!(query.single_events);
        assert!(!query.show_deleted);
    }

    #[tokio::test]
    async fn error_gateway_fails_every_call() {
        let gateway = ErrorGateway::new("google", ProviderError::configuration("no access token"));
        assert_eq!(gateway.name(), "google");

        let err = gateway.list_colors().await.unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::ConfigurationError);
        assert_eq!(err.provider(), Some("google"));

        let err = gateway
            .list_calendars(CalendarListOptions { show_hidden: true })
            .await
            .unwrap_err();
        assert_eq!(err.message(), "no access token");
    }

    #[tokio::test]
    async fn boxed_gateway_delegates() {
        let gateway: Box<dyn ProviderGateway> =
            Box::new(ErrorGateway::new("boxed", ProviderError::internal("boom")));
        assert_eq!(gateway.name(), "boxed");

        let now = Utc::now();
        let err = gateway
            .list_events(EventQuery::new("primary", now, now))
            .await
            .unwrap_err();
        assert_eq!(err.provider(), Some("boxed"));
    }
}
