//! Provider records as they come off the wire.
//!
//! These mirror the Google Calendar v3 JSON shapes closely enough to be
//! deserialized directly. Nothing is validated here: every field a record
//! may omit is an `Option`, and interpretation happens in the
//! [`mapper`](crate::mapper).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One entry of the user's calendar list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCalendar {
    pub id: String,
    pub summary: Option<String>,
    pub time_zone: Option<String>,
    pub foreground_color: Option<String>,
    pub background_color: Option<String>,
    /// Whether the calendar is shown in the user's list.
    pub selected: Option<bool>,
}

impl RawCalendar {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Start or end of an event as sent by the provider.
///
/// Timed events carry `date_time` (RFC 3339); all-day events carry `date`
/// (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventTime {
    pub date: Option<String>,
    pub date_time: Option<String>,
    pub time_zone: Option<String>,
}

impl RawEventTime {
    /// A timed boundary from an RFC 3339 string.
    pub fn date_time(value: impl Into<String>) -> Self {
        Self {
            date_time: Some(value.into()),
            ..Self::default()
        }
    }

    /// An all-day boundary from a `YYYY-MM-DD` string.
    pub fn date(value: impl Into<String>) -> Self {
        Self {
            date: Some(value.into()),
            ..Self::default()
        }
    }
}

/// One event from an event listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub id: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Key into the event color palette.
    pub color_id: Option<String>,
    pub start: Option<RawEventTime>,
    pub end: Option<RawEventTime>,
}

impl RawEvent {
    /// Creates a record with the given id and boundaries.
    pub fn new(id: impl Into<String>, start: RawEventTime, end: RawEventTime) -> Self {
        Self {
            id: id.into(),
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_color_id(mut self, color_id: impl Into<String>) -> Self {
        self.color_id = Some(color_id.into());
        self
    }
}

/// A palette entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDescriptor {
    pub background: String,
    pub foreground: String,
}

/// The provider's event color palette, keyed by color id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTable(HashMap<String, ColorDescriptor>);

impl ColorTable {
    /// Palette key used for events that carry no color id.
    ///
    /// Google numbers its event palette from `"1"` to `"11"`.
    pub const DEFAULT_COLOR_ID: &'static str = "1";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(
        mut self,
        id: impl Into<String>,
        background: impl Into<String>,
        foreground: impl Into<String>,
    ) -> Self {
        self.0.insert(
            id.into(),
            ColorDescriptor {
                background: background.into(),
                foreground: foreground.into(),
            },
        );
        self
    }

    /// Looks up `color_id`, falling back to [`Self::DEFAULT_COLOR_ID`] when
    /// the event has no color of its own. An empty id counts as none.
    pub fn resolve(&self, color_id: Option<&str>) -> Option<&ColorDescriptor> {
        let key = color_id
            .filter(|id| !id.is_empty())
            .unwrap_or(Self::DEFAULT_COLOR_ID);
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_calendar_record() {
        let json = r##"{
            "id": "work@example.com",
            "summary": "Work",
            "timeZone": "Europe/Amsterdam",
            "foregroundColor": "#000000",
            "backgroundColor": "#9fe1e7",
            "selected": true,
            "accessRole": "owner"
        }"##;

        let raw: RawCalendar = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, "work@example.com");
        assert_eq!(raw.time_zone.as_deref(), Some("Europe/Amsterdam"));
        assert_eq!(raw.selected, Some(true));
    }

    #[test]
    fn parse_calendar_without_selected() {
        let raw: RawCalendar = serde_json::from_str(r#"{ "id": "holidays" }"#).unwrap();
        assert!(raw.selected.is_none());
        assert!(raw.summary.is_none());
    }

    #[test]
    fn parse_timed_and_all_day_events() {
        let json = r#"[
            {
                "id": "a",
                "summary": "Review",
                "colorId": "5",
                "start": { "dateTime": "2019-01-01T09:00:00+01:00" },
                "end": { "dateTime": "2019-01-01T10:30:00+01:00" }
            },
            {
                "id": "b",
                "summary": "Holiday",
                "start": { "date": "2019-01-02" },
                "end": { "date": "2019-01-03" }
            }
        ]"#;

        let events: Vec<RawEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events[0].color_id.as_deref(), Some("5"));
        assert!(events[0].start.as_ref().unwrap().date_time.is_some());
        assert_eq!(
            events[1].start.as_ref().unwrap().date.as_deref(),
            Some("2019-01-02")
        );
        assert!(events[1].color_id.is_none());
    }

    #[test]
    fn color_table_resolves_default() {
        let colors = ColorTable::new()
            .with_color("1", "#a4bdfc", "#1d1d1d")
            .with_color("5", "#fbd75b", "#1d1d1d");

        assert_eq!(colors.resolve(Some("5")).unwrap().background, "#fbd75b");
        assert_eq!(colors.resolve(None).unwrap().background, "#a4bdfc");
        assert_eq!(colors.resolve(Some("")).unwrap().background, "#a4bdfc");
        assert!(colors.resolve(Some("42")).is_none());
    }

    #[test]
    fn color_table_deserializes_palette() {
        let json = r##"{
            "1": { "background": "#a4bdfc", "foreground": "#1d1d1d" },
            "2": { "background": "#7ae7bf", "foreground": "#1d1d1d" }
        }"##;

        let colors: ColorTable = serde_json::from_str(json).unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.resolve(Some("2")).unwrap().background, "#7ae7bf");
    }
}
