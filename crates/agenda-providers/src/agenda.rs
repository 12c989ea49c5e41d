//! Appointment queries and the seven-day busy-time report.
//!
//! [`Agenda`] drives a [`ProviderGateway`] with plain sequential awaits:
//! the color palette is fetched before every event listing, and each day
//! of a busy-time report is fetched only after the previous one finished.

use agenda_core::{
    Appointment, BUSY_DAYS, BusyTimeReport, Calendar, Clock, DayWindow, SystemClock, day_end,
    day_start, local_date,
};
use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::{debug, warn};

use crate::error::{AgendaError, AgendaResult};
use crate::gateway::{CalendarListOptions, EventQuery, PRIMARY_CALENDAR_ID, ProviderGateway};
use crate::mapper::{map_appointments, map_calendars};

/// Calendar queries against one gateway, in one timezone.
///
/// The timezone decides where local days start and end, and which clock
/// times the busy-time report sees.
pub struct Agenda<G, Tz: TimeZone = Local> {
    gateway: G,
    calendar_id: Option<String>,
    timezone: Tz,
    clock: Box<dyn Clock>,
}

impl<G: ProviderGateway> Agenda<G, Local> {
    /// Creates an agenda in the system's local timezone.
    pub fn new(gateway: G) -> Self {
        Self::with_timezone(gateway, Local)
    }
}

impl<G: ProviderGateway, Tz: TimeZone> Agenda<G, Tz> {
    /// Creates an agenda that computes days in `timezone`.
    pub fn with_timezone(gateway: G, timezone: Tz) -> Self {
        Self {
            gateway,
            calendar_id: None,
            timezone,
            clock: Box::new(SystemClock),
        }
    }

    /// Restricts event queries to `calendar_id` instead of the primary
    /// calendar.
    pub fn with_calendar_id(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = Some(calendar_id.into());
        self
    }

    /// Replaces the clock used for default query boundaries.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The calendar event queries run against. An unset or empty id means
    /// the primary calendar.
    pub fn calendar_id(&self) -> &str {
        self.calendar_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(PRIMARY_CALENDAR_ID)
    }

    /// The gateway queries are sent to.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// The timezone local days are computed in.
    pub fn timezone(&self) -> &Tz {
        &self.timezone
    }

    /// Lists every calendar the user has access to, hidden ones included.
    pub async fn get_calendars(&self) -> AgendaResult<Vec<Calendar>> {
        let raw = self
            .gateway
            .list_calendars(CalendarListOptions { show_hidden: true })
            .await?;
        debug!(count = raw.len(), "fetched calendar list");
        Ok(map_calendars(raw))
    }

    /// Lists appointments between `start` and `end`, ordered by start time.
    ///
    /// `start` defaults to the start of today and `end` to the end of today
    /// (one second before tomorrow's midnight).
    ///
    /// # Errors
    ///
    /// Returns [`AgendaError::InvalidRange`] without contacting the gateway
    /// when `start >= end`. Gateway and record failures are returned as
    /// [`AgendaError::Provider`].
    pub async fn get_appointments(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> AgendaResult<Vec<Appointment>> {
        let start = start.unwrap_or_else(|| day_start(&self.timezone, self.clock.now()));
        let end = end.unwrap_or_else(|| day_end(&self.timezone, self.clock.now()));

        if start >= end {
            return Err(AgendaError::invalid_range(start, end));
        }

        let colors = self.gateway.list_colors().await?;

        let query = EventQuery::new(self.calendar_id(), start, end);
        debug!(
            calendar_id = %query.calendar_id,
            time_min = %query.time_min,
            time_max = %query.time_max,
            "listing events"
        );
        let events = self.gateway.list_events(query).await?;

        Ok(map_appointments(events, &colors)?)
    }

    /// Computes busy hours for the seven days starting at the local date of
    /// `start` (default: today).
    ///
    /// Each appointment adds its time-of-day delta, rounded to two decimals,
    /// to the day it was fetched for. An appointment running past midnight
    /// therefore adds a negative amount to every day it overlaps.
    ///
    /// # Errors
    ///
    /// The first failing day aborts the whole report.
    pub async fn get_busy_time(&self, start: Option<DateTime<Utc>>) -> AgendaResult<BusyTimeReport> {
        let start = start.unwrap_or_else(|| day_start(&self.timezone, self.clock.now()));
        let first_day = local_date(&self.timezone, start);
        let mut report = BusyTimeReport::new(first_day);

        let windows = DayWindow::days_from(&self.timezone, first_day, BUSY_DAYS);
        for (day, window) in windows.into_iter().enumerate() {
            let appointments = self
                .get_appointments(Some(window.start), Some(window.end))
                .await?;

            for appointment in &appointments {
                if appointment.time.crosses_midnight(&self.timezone) {
                    warn!(
                        id = %appointment.id,
                        date = %window.date,
                        "appointment ends at an earlier clock time than it starts, counting negative hours"
                    );
                }
                report.add(day, appointment.busy_hours(&self.timezone));
            }

            debug!(
                date = %window.date,
                appointments = appointments.len(),
                hours = report.hours()[day],
                "busy time computed"
            );
        }

        Ok(report)
    }
}
