//! Day boundaries and query windows.
//!
//! Calendar queries operate on local calendar days: a day starts at local
//! midnight, and its inclusive end is one second before the next local
//! midnight. Every helper takes the timezone explicitly and returns UTC
//! instants, so callers never depend on the process-wide local zone unless
//! they pass [`chrono::Local`] themselves.

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Returns the instant of local midnight at the start of `date`.
///
/// An ambiguous midnight (clocks turned back) resolves to the earlier
/// instant. A midnight skipped by a DST jump resolves to the first instant
/// that exists after the gap.
pub fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

/// Returns local midnight of the day containing `instant`.
///
/// With the instant at 2019-01-01 10:00 local, this is 2019-01-01 00:00:00.
pub fn day_start<Tz: TimeZone>(tz: &Tz, instant: DateTime<Utc>) -> DateTime<Utc> {
    local_midnight(tz, local_date(tz, instant))
}

/// Returns one second before the local midnight that ends the day
/// containing `instant`.
///
/// With the instant at 2019-01-01 10:00 local, this is 2019-01-01 23:59:59.
/// Stopping a second short keeps events that start exactly at the next
/// midnight out of the day.
pub fn day_end<Tz: TimeZone>(tz: &Tz, instant: DateTime<Utc>) -> DateTime<Utc> {
    let tomorrow = next_day(local_date(tz, instant));
    local_midnight(tz, tomorrow) - Duration::seconds(1)
}

/// Returns the calendar date of `instant` as seen in `tz`.
pub fn local_date<Tz: TimeZone>(tz: &Tz, instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(NaiveDate::MAX)
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // Skipped wall time: reading it with the offset from before the
            // gap lands exactly on the transition instant.
            let before = tz.offset_from_utc_datetime(&(local - Duration::days(1))).fix();
            (local - Duration::seconds(i64::from(before.local_minus_utc()))).and_utc()
        }
    }
}

/// A single local calendar day, as the half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    /// The local calendar date this window covers.
    pub date: NaiveDate,
    /// Local midnight at the start of `date` (inclusive).
    pub start: DateTime<Utc>,
    /// Local midnight at the start of the following date (exclusive).
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Creates the window for `date` in `tz`.
    pub fn for_date<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Self {
        Self {
            date,
            start: local_midnight(tz, date),
            end: local_midnight(tz, next_day(date)),
        }
    }

    /// Returns `count` consecutive day windows starting at `date`.
    ///
    /// Days are stepped on the calendar, not in 24-hour increments, so
    /// month and year rollovers and DST transitions line up with local
    /// midnights.
    pub fn days_from<Tz: TimeZone>(tz: &Tz, date: NaiveDate, count: usize) -> Vec<Self> {
        date.iter_days()
            .take(count)
            .map(|day| Self::for_date(tz, day))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_start_is_local_midnight() {
        let start = day_start(&Utc, utc(2019, 1, 1, 10, 0, 0));
        assert_eq!(start, utc(2019, 1, 1, 0, 0, 0));
    }

    #[test]
    fn day_end_is_one_second_before_next_midnight() {
        let end = day_end(&Utc, utc(2019, 1, 1, 10, 0, 0));
        assert_eq!(end, utc(2019, 1, 1, 23, 59, 59));
    }

    #[test]
    fn day_end_rolls_over_year() {
        let end = day_end(&Utc, utc(2019, 12, 31, 8, 30, 0));
        assert_eq!(end, utc(2019, 12, 31, 23, 59, 59));
        assert_eq!(end + Duration::seconds(1), utc(2020, 1, 1, 0, 0, 0));
    }

    #[test]
    fn boundaries_follow_the_given_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        // 23:30 UTC on Dec 31 is already Jan 1 at +02:00.
        let instant = utc(2018, 12, 31, 23, 30, 0);

        assert_eq!(local_date(&tz, instant), date(2019, 1, 1));
        assert_eq!(day_start(&tz, instant), utc(2018, 12, 31, 22, 0, 0));
        assert_eq!(day_end(&tz, instant), utc(2019, 1, 1, 21, 59, 59));
    }

    #[test]
    fn day_window_is_half_open() {
        let window = DayWindow::for_date(&Utc, date(2024, 3, 15));

        assert_eq!(window.start, utc(2024, 3, 15, 0, 0, 0));
        assert_eq!(window.end, utc(2024, 3, 16, 0, 0, 0));
        assert_eq!(window.end - window.start, Duration::hours(24));
        assert_eq!(window.end, DayWindow::for_date(&Utc, date(2024, 3, 16)).start);
    }

    #[test]
    fn days_from_crosses_month_and_year() {
        let windows = DayWindow::days_from(&Utc, date(2019, 12, 29), 7);

        let dates: Vec<NaiveDate> = windows.iter().map(|w| w.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2019, 12, 29),
                date(2019, 12, 30),
                date(2019, 12, 31),
                date(2020, 1, 1),
                date(2020, 1, 2),
                date(2020, 1, 3),
                date(2020, 1, 4),
            ]
        );
        for pair in windows.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn days_from_handles_leap_day() {
        let windows = DayWindow::days_from(&Utc, date(2024, 2, 28), 3);
        assert_eq!(windows[1].date, date(2024, 2, 29));
        assert_eq!(windows[2].date, date(2024, 3, 1));
    }

    #[test]
    fn skipped_midnight_resolves_to_the_transition_east_of_utc() {
        use chrono_tz::Asia::Beirut;

        // Beirut jumped from 00:00 to 01:00 on 2019-03-31.
        let start = local_midnight(&Beirut, date(2019, 3, 31));
        assert_eq!(start, utc(2019, 3, 30, 22, 0, 0));
        assert_eq!(local_date(&Beirut, start), date(2019, 3, 31));
        assert_eq!(start.with_timezone(&Beirut).hour(), 1);

        let previous = DayWindow::for_date(&Beirut, date(2019, 3, 30));
        assert_eq!(previous.end, start);
        assert_eq!(previous.end - previous.start, Duration::hours(24));
    }

    #[test]
    fn skipped_midnight_resolves_to_the_transition_west_of_utc() {
        use chrono_tz::America::Sao_Paulo;

        // Sao Paulo jumped from 00:00 to 01:00 on 2018-11-04.
        let start = local_midnight(&Sao_Paulo, date(2018, 11, 4));
        assert_eq!(start, utc(2018, 11, 4, 3, 0, 0));
        assert_eq!(local_date(&Sao_Paulo, start), date(2018, 11, 4));

        let window = DayWindow::for_date(&Sao_Paulo, date(2018, 11, 4));
        assert_eq!(window.end - window.start, Duration::hours(23));
    }

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = utc(2019, 1, 1, 10, 0, 0);
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
