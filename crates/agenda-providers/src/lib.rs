//! Provider gateway, record mapping and agenda queries.
//!
//! - [`ProviderGateway`] - Capability through which calendar data is fetched
//! - [`RawCalendar`] / [`RawEvent`] / [`ColorTable`] - Records as the provider sends them
//! - [`map_calendars`] / [`map_appointments`] - Conversion to the core types
//! - [`Agenda`] - Appointment queries and the seven-day busy-time report
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ Google API v3   │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  GoogleGateway  │  ProviderGateway
//! └────────┬────────┘
//!          │ RawCalendar / RawEvent / ColorTable
//!          ▼
//! ┌─────────────────┐
//! │     mapper      │
//! └────────┬────────┘
//!          │ Calendar / Appointment
//!          ▼
//! ┌─────────────────┐
//! │     Agenda      │ ──▶ BusyTimeReport
//! └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use agenda_providers::Agenda;
//!
//! let agenda = Agenda::new(gateway).with_calendar_id("team@example.com");
//! let today = agenda.get_appointments(None, None).await?;
//! let week = agenda.get_busy_time(None).await?;
//! ```

pub mod agenda;
pub mod error;
pub mod gateway;
pub mod mapper;
pub mod raw;

#[cfg(feature = "google")]
pub mod google;

pub use agenda::Agenda;
pub use error::{AgendaError, AgendaResult, ProviderError, ProviderErrorCode, ProviderResult};
pub use gateway::{
    BoxFuture, CalendarListOptions, ErrorGateway, EventQuery, PRIMARY_CALENDAR_ID,
    ProviderGateway,
};
pub use mapper::{map_appointment, map_appointments, map_calendar, map_calendars};
pub use raw::{ColorDescriptor, ColorTable, RawCalendar, RawEvent, RawEventTime};
