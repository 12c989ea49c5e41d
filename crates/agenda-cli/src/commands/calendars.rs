//! `agenda calendars`

use agenda_providers::{Agenda, ProviderGateway};
use chrono::TimeZone;
use tracing::info;

use crate::error::ClientResult;
use crate::render;

/// Lists every calendar, hidden ones included.
pub async fn run<G, Tz>(agenda: &Agenda<G, Tz>, json: bool) -> ClientResult<String>
where
    G: ProviderGateway,
    Tz: TimeZone,
{
    info!(gateway = agenda.gateway().name(), "listing calendars");
    let calendars = agenda.get_calendars().await?;

    if json {
        super::to_json(&calendars)
    } else {
        Ok(render::calendars(&calendars))
    }
}
