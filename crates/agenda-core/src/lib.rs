//! Core types: calendars, appointments, busy-time reports, day windows

pub mod model;
pub mod time;
pub mod tracing;

pub use model::{
    Appointment, AppointmentTime, BUSY_DAYS, BusyTimeReport, Calendar, CalendarColor, round_hours,
};
pub use time::{Clock, DayWindow, FixedClock, SystemClock, day_end, day_start, local_date, local_midnight};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
