//! Command-line front end for agenda.
//!
//! This crate provides the `agenda` binary: configuration loading, the
//! query commands and their text or JSON output.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod secret;

pub use cli::Cli;
pub use error::{ClientError, ClientResult};
