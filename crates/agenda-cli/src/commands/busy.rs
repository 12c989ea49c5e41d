//! `agenda busy`

use agenda_providers::{Agenda, ProviderGateway};
use chrono::TimeZone;
use tracing::info;

use crate::cli::DateArg;
use crate::error::ClientResult;
use crate::render;

/// Reports busy hours for the seven days starting at `from` (today by
/// default).
pub async fn run<G, Tz>(
    agenda: &Agenda<G, Tz>,
    from: Option<DateArg>,
    json: bool,
) -> ClientResult<String>
where
    G: ProviderGateway,
    Tz: TimeZone,
{
    let start = from.map(|arg| arg.start_in(agenda.timezone()));

    info!(calendar_id = agenda.calendar_id(), ?start, "computing busy time");
    let report = agenda.get_busy_time(start).await?;

    if json {
        super::to_json(&report)
    } else {
        Ok(render::busy_time(&report))
    }
}
