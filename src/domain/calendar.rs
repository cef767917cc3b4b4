//! Calendar windows
//!
//! Day matching and the week/month windows used by the range queries.
//! All instants are UTC.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, TimeZone, Utc};

/// Inclusive time window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Monday 00:00:00 through Sunday 23:59:59 of the week containing `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        let monday = date + Duration::days(offset_to_monday(date));
        let next_monday = monday + Duration::days(7);
        Self::new(
            start_of_day(monday),
            start_of_day(next_monday) - Duration::seconds(1),
        )
    }

    /// First of the month 00:00:00 through the last second before the next month.
    pub fn month_of(date: NaiveDate) -> Self {
        let first = date - Duration::days(i64::from(date.day0()));
        let next_first = first + Months::new(1);
        Self::new(
            start_of_day(first),
            start_of_day(next_first) - Duration::seconds(1),
        )
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.start && *instant <= self.end
    }
}

/// Days from `date` back to the most recent Monday, always in `-6..=0`.
pub fn offset_to_monday(date: NaiveDate) -> i64 {
    -i64::from(date.weekday().num_days_from_monday())
}

/// Same year and day of year; time of day is ignored.
pub fn same_day(a: &DateTime<Utc>, b: &DateTime<Utc>) -> bool {
    a.year() == b.year() && a.ordinal() == b.ordinal()
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}
