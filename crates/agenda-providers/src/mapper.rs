//! Raw record to [`Calendar`] / [`Appointment`] conversion.
//!
//! Both mappings are pure and keep the provider's order. No filtering,
//! deduplication or sorting happens here.

use agenda_core::{Appointment, AppointmentTime, Calendar, CalendarColor};
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{ProviderError, ProviderResult};
use crate::raw::{ColorTable, RawCalendar, RawEvent, RawEventTime};

/// Converts a calendar list into [`Calendar`]s.
pub fn map_calendars(raw: Vec<RawCalendar>) -> Vec<Calendar> {
    raw.into_iter().map(map_calendar).collect()
}

/// Converts a single calendar list entry.
///
/// `hidden` is the negation of the provider's `selected` flag; a record
/// without the flag is treated as not selected.
pub fn map_calendar(raw: RawCalendar) -> Calendar {
    Calendar {
        id: raw.id,
        title: raw.summary.unwrap_or_default(),
        timezone: raw.time_zone.unwrap_or_default(),
        color: CalendarColor {
            foreground: raw.foreground_color.unwrap_or_default(),
            background: raw.background_color.unwrap_or_default(),
        },
        hidden: !raw.selected.unwrap_or(false),
    }
}

/// Converts an event listing into [`Appointment`]s, resolving each event's
/// color against `colors`.
///
/// # Errors
///
/// Fails with an `InvalidResponse` error on the first record whose start or
/// end is missing or unparsable.
pub fn map_appointments(raw: Vec<RawEvent>, colors: &ColorTable) -> ProviderResult<Vec<Appointment>> {
    raw.into_iter()
        .map(|event| map_appointment(event, colors))
        .collect()
}

/// Converts a single event record.
pub fn map_appointment(raw: RawEvent, colors: &ColorTable) -> ProviderResult<Appointment> {
    let start = resolve_time(&raw.id, "start", raw.start.as_ref())?;
    let end = resolve_time(&raw.id, "end", raw.end.as_ref())?;
    let color = colors
        .resolve(raw.color_id.as_deref())
        .map(|c| c.background.clone());

    Ok(Appointment {
        id: raw.id,
        title: raw.summary.unwrap_or_default(),
        description: raw.description,
        location: raw.location,
        color,
        time: AppointmentTime::new(start, end),
    })
}

/// Picks the precise date-time over the date-only value.
///
/// A date-only value becomes midnight UTC of that date.
fn resolve_time(
    event_id: &str,
    field: &str,
    time: Option<&RawEventTime>,
) -> ProviderResult<DateTime<Utc>> {
    let time = time.ok_or_else(|| {
        ProviderError::invalid_response(format!("event {} has no {} time", event_id, field))
    })?;

    if let Some(ref value) = time.date_time {
        return DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                ProviderError::invalid_response(format!(
                    "event {} has an invalid {} dateTime {:?}",
                    event_id, field, value
                ))
                .with_source(e)
            });
    }

    if let Some(ref value) = time.date {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
            .map_err(|e| {
                ProviderError::invalid_response(format!(
                    "event {} has an invalid {} date {:?}",
                    event_id, field, value
                ))
                .with_source(e)
            });
    }

    Err(ProviderError::invalid_response(format!(
        "event {} has neither dateTime nor date for {}",
        event_id, field
    )))
}
