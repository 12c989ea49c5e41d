//! Calendar, appointment and busy-time types.
//!
//! These are the normalized shapes handed to callers. They are built from
//! provider records by the mapper in `agenda-providers` and never change
//! after construction.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Display colors of a calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarColor {
    /// Text color (hex, e.g. `#000000`).
    pub foreground: String,
    /// Fill color (hex, e.g. `#9fe1e7`).
    pub background: String,
}

impl CalendarColor {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
        }
    }
}

/// A calendar the user has access to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Provider identifier of the calendar.
    pub id: String,
    /// Human-readable name.
    pub title: String,
    /// IANA timezone of the calendar.
    pub timezone: String,
    /// Display colors.
    pub color: CalendarColor,
    /// Whether the calendar is hidden from the user's calendar list.
    pub hidden: bool,
}

impl Calendar {
    /// Returns `true` if the calendar is shown in the user's list.
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

/// Start and end of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentTime {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AppointmentTime {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Difference in minutes between the end and start time of day in `tz`.
    ///
    /// Only hours and minutes count; dates and seconds are ignored. An
    /// appointment ending on a later day at an earlier clock time yields a
    /// negative value.
    pub fn time_of_day_minutes<Tz: TimeZone>(&self, tz: &Tz) -> i64 {
        minute_of_day(&self.end.with_timezone(tz)) - minute_of_day(&self.start.with_timezone(tz))
    }

    /// Returns `true` when the end clock time is earlier than the start
    /// clock time in `tz`, e.g. 23:00 to 01:00.
    pub fn crosses_midnight<Tz: TimeZone>(&self, tz: &Tz) -> bool {
        self.time_of_day_minutes(tz) < 0
    }
}

fn minute_of_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    i64::from(dt.hour()) * 60 + i64::from(dt.minute())
}

/// A single event on a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Provider identifier of the event.
    pub id: String,
    /// Event summary.
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Background color resolved from the provider palette, if the palette
    /// has an entry for the event's color.
    pub color: Option<String>,
    pub time: AppointmentTime,
}

impl Appointment {
    /// Hours this appointment occupies on its day, rounded to two decimals.
    ///
    /// Computed from the time-of-day delta in `tz`, see
    /// [`AppointmentTime::time_of_day_minutes`].
    pub fn busy_hours<Tz: TimeZone>(&self, tz: &Tz) -> f64 {
        round_hours(self.time.time_of_day_minutes(tz))
    }
}

/// Converts minutes to hours rounded to two decimal places.
pub fn round_hours(minutes: i64) -> f64 {
    (minutes as f64 / 60.0 * 100.0).round() / 100.0
}

/// Number of days covered by a [`BusyTimeReport`].
pub const BUSY_DAYS: usize = 7;

/// Busy hours for seven consecutive days.
///
/// Index 0 is the start date; index `i` is `start + i` days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyTimeReport {
    start: NaiveDate,
    hours: [f64; BUSY_DAYS],
}

impl BusyTimeReport {
    /// Creates an all-zero report starting at `start`.
    pub fn new(start: NaiveDate) -> Self {
        Self {
            start,
            hours: [0.0; BUSY_DAYS],
        }
    }

    /// Adds `hours` to the total of day `day`.
    ///
    /// # Panics
    ///
    /// Panics if `day >= BUSY_DAYS`.
    pub fn add(&mut self, day: usize, hours: f64) {
        self.hours[day] += hours;
    }

    /// The first date covered.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Per-day totals, index-aligned to days from [`start`](Self::start).
    pub fn hours(&self) -> &[f64; BUSY_DAYS] {
        &self.hours
    }

    /// Total of day `day`, or `None` past the end of the report.
    pub fn get(&self, day: usize) -> Option<f64> {
        self.hours.get(day).copied()
    }

    /// Iterates over `(date, hours)` pairs in day order.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.start.iter_days().zip(self.hours.iter().copied())
    }

    /// Sum over all days.
    pub fn total(&self) -> f64 {
        self.hours.iter().sum()
    }
}
