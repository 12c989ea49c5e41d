//! Plain-text rendering of query results.

use agenda_core::{Appointment, BusyTimeReport, Calendar};
use chrono::TimeZone;

/// One line per calendar: `*` marks visible calendars, `-` hidden ones.
pub fn calendars(calendars: &[Calendar]) -> String {
    if calendars.is_empty() {
        return "No calendars".to_string();
    }

    calendars
        .iter()
        .map(|c| {
            let marker = if c.is_visible() { '*' } else { '-' };
            let mut line = format!("{} {} <{}>", marker, c.title, c.id);
            if !c.timezone.is_empty() {
                line.push_str(&format!(" ({})", c.timezone));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per appointment with its local date and clock times.
pub fn appointments<Tz: TimeZone>(appointments: &[Appointment], tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if appointments.is_empty() {
        return "No appointments".to_string();
    }

    appointments
        .iter()
        .map(|a| {
            let start = a.time.start.with_timezone(tz);
            let end = a.time.end.with_timezone(tz);
            let mut line = format!(
                "{} {}-{}  {}",
                start.format("%Y-%m-%d"),
                start.format("%H:%M"),
                end.format("%H:%M"),
                a.title
            );
            if let Some(ref location) = a.location {
                line.push_str(&format!(" @ {}", location));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per day followed by the weekly total.
pub fn busy_time(report: &BusyTimeReport) -> String {
    let mut lines: Vec<String> = report
        .days()
        .map(|(date, hours)| format!("{}  {:>6.2}h", date.format("%a %Y-%m-%d"), hours))
        .collect();
    lines.push(format!("{:<14}  {:>6.2}h", "total", report.total()));
    lines.join("\n")
}
