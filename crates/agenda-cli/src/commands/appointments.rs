//! `agenda appointments`

use std::fmt::Display;

use agenda_providers::{Agenda, ProviderGateway};
use chrono::TimeZone;
use tracing::info;

use crate::cli::DateArg;
use crate::error::ClientResult;
use crate::render;

/// Lists appointments between `from` and `to`, today when both are absent.
///
/// A date given as `to` covers that whole day.
pub async fn run<G, Tz>(
    agenda: &Agenda<G, Tz>,
    from: Option<DateArg>,
    to: Option<DateArg>,
    json: bool,
) -> ClientResult<String>
where
    G: ProviderGateway,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let tz = agenda.timezone();
    let start = from.map(|arg| arg.start_in(tz));
    let end = to.map(|arg| arg.end_in(tz));

    info!(
        calendar_id = agenda.calendar_id(),
        ?start,
        ?end,
        "listing appointments"
    );
    let appointments = agenda.get_appointments(start, end).await?;

    if json {
        super::to_json(&appointments)
    } else {
        Ok(render::appointments(&appointments, tz))
    }
}
