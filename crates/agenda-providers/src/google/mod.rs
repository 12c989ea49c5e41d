//! Google Calendar gateway.
//!
//! [`GoogleGateway`] talks to the Google Calendar API v3 with a bearer
//! access token supplied by the caller. Obtaining and refreshing that token
//! is out of scope.
//!
//! # Example
//!
//! ```ignore
//! use agenda_providers::Agenda;
//! use agenda_providers::google::{GoogleConfig, GoogleGateway};
//!
//! let gateway = GoogleGateway::new(GoogleConfig::new(access_token))?;
//! let report = Agenda::new(gateway).get_busy_time(None).await?;
//! ```

mod client;
mod config;
mod gateway;

pub use client::GoogleCalendarClient;
pub use config::GoogleConfig;
pub use gateway::GoogleGateway;
