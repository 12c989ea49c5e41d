//! Command implementations.
//!
//! Query commands return their output as a string; `main` prints it.

pub mod appointments;
pub mod busy;
pub mod calendars;
pub mod config;

use agenda_providers::Agenda;
use agenda_providers::google::GoogleGateway;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Builds an agenda backed by Google Calendar.
///
/// `calendar` overrides the calendar configured in the `[google]` section.
pub fn google_agenda(
    config: &ClientConfig,
    calendar: Option<&str>,
) -> ClientResult<Agenda<GoogleGateway>> {
    let settings = config.google().map_err(ClientError::Config)?;
    let provider_config = settings.to_provider_config().map_err(ClientError::Config)?;
    let gateway = GoogleGateway::new(provider_config)?;

    let calendar_id = calendar.unwrap_or(&settings.calendar_id);
    debug!(calendar_id, "using Google Calendar");
    Ok(Agenda::new(gateway).with_calendar_id(calendar_id))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> ClientResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
pub(crate) mod fixture {
    use agenda_core::FixedClock;
    use agenda_providers::{
        Agenda, BoxFuture, CalendarListOptions, ColorTable, EventQuery, ProviderGateway,
        ProviderResult, RawCalendar, RawEvent, RawEventTime,
    };
    use chrono::{TimeZone, Utc};

    /// Serves a fixed calendar list and the events that start inside the
    /// queried window.
    pub struct StaticGateway {
        pub calendars: Vec<RawCalendar>,
        pub events: Vec<RawEvent>,
    }

    impl ProviderGateway for StaticGateway {
        fn name(&self) -> &str {
            "static"
        }

        fn list_calendars(
            &self,
            _options: CalendarListOptions,
        ) -> BoxFuture<'_, ProviderResult<Vec<RawCalendar>>> {
            let calendars = self.calendars.clone();
            Box::pin(async move { Ok(calendars) })
        }

        fn list_colors(&self) -> BoxFuture<'_, ProviderResult<ColorTable>> {
            Box::pin(async { Ok(ColorTable::new().with_color("1", "#a4bdfc", "#1d1d1d")) })
        }

        fn list_events(&self, query: EventQuery) -> BoxFuture<'_, ProviderResult<Vec<RawEvent>>> {
            let min = query.time_min.to_rfc3339();
            let max = query.time_max.to_rfc3339();
            let events = self
                .events
                .iter()
                .filter(|e| {
                    let start = e
                        .start
                        .as_ref()
                        .and_then(|t| t.date_time.clone())
                        .unwrap_or_default();
                    start >= min && start < max
                })
                .cloned()
                .collect();
            Box::pin(async move { Ok(events) })
        }
    }

    fn event(id: &str, title: &str, start: &str, end: &str) -> RawEvent {
        RawEvent::new(id, RawEventTime::date_time(start), RawEventTime::date_time(end))
            .with_summary(title)
    }

    /// A UTC agenda whose "now" is 2019-01-01T10:00:00Z.
    pub fn agenda() -> Agenda<StaticGateway, Utc> {
        let mut primary = RawCalendar::new("me@example.com");
        primary.summary = Some("Me".to_string());
        primary.time_zone = Some("UTC".to_string());
        primary.selected = Some(true);

        let mut holidays = RawCalendar::new("holidays");
        holidays.summary = Some("Holidays".to_string());

        let gateway = StaticGateway {
            calendars: vec![primary, holidays],
            events: vec![
                event(
                    "standup",
                    "Standup",
                    "2019-01-01T09:00:00+00:00",
                    "2019-01-01T09:30:00+00:00",
                ),
                event(
                    "planning",
                    "Planning",
                    "2019-01-01T13:00:00+00:00",
                    "2019-01-01T14:15:00+00:00",
                ),
                event(
                    "retro",
                    "Retro",
                    "2019-01-03T15:00:00+00:00",
                    "2019-01-03T16:00:00+00:00",
                ),
            ],
        };

        Agenda::with_timezone(gateway, Utc).with_clock(FixedClock(
            Utc.with_ymd_and_hms(2019, 1, 1, 10, 0, 0).unwrap(),
        ))
    }
}
