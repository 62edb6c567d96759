//! Day-scoped time model.
//!
//! The generator works in whole UTC days.  Within a day, event times are
//! second offsets from midnight in `0..SECONDS_PER_DAY`; they become absolute
//! timestamps only when attached to a [`CrossingEvent`](crate::CrossingEvent).

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveTime, Timelike, Utc};

pub const SECONDS_PER_DAY: u32 = 86_400;

/// Last representable second of a day.
pub const LAST_SECOND: u32 = SECONDS_PER_DAY - 1;

pub const SECONDS_PER_HOUR: u32 = 3_600;

/// Midnight UTC at the start of `day`.
pub fn day_start(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Absolute timestamp `secs` seconds after `start`.
#[inline]
pub fn at_offset(start: DateTime<Utc>, secs: u32) -> DateTime<Utc> {
    start + Duration::seconds(i64::from(secs))
}

/// Seconds since midnight of the timestamp's own UTC day.
pub fn second_of_day(ts: DateTime<Utc>) -> u32 {
    ts.time().num_seconds_from_midnight()
}

/// Monday through Friday.
pub fn is_weekday(day: NaiveDate) -> bool {
    day.weekday().num_days_from_monday() <= 4
}

/// The `n`-th calendar day after `start` (`n = 0` is `start`).
pub fn nth_day(start: NaiveDate, n: u64) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(n))
}
