//! Relative date arithmetic for writing readable fixtures.
//!
//! ```
//! use libshapecheck::dates::{CalendarSpan, NumericalDuration, RelativeTime};
//!
//! let yesterday = 1.days().ago();
//! let renewal = 1.years().after(yesterday).unwrap();
//! assert!(renewal > yesterday);
//! ```

use thiserror::Error;
use time::{Date, Duration, Month, OffsetDateTime};

pub use time::ext::NumericalDuration;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("date arithmetic went out of the supported range")]
    OutOfRange,
}

/// A source of "now". Tests that compare relative dates should use a
/// [`FixedClock`] so that two calls agree on the current instant.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Moves an instant by an exact [`Duration`].
///
/// These follow the overflow behavior of `time`'s own operators and panic if
/// the result is out of range.
pub trait RelativeTime {
    fn before(self, instant: OffsetDateTime) -> OffsetDateTime;
    fn after(self, instant: OffsetDateTime) -> OffsetDateTime;

    fn ago_on(self, clock: &impl Clock) -> OffsetDateTime
    where
        Self: Sized,
    {
        self.before(clock.now())
    }

    fn from_now_on(self, clock: &impl Clock) -> OffsetDateTime
    where
        Self: Sized,
    {
        self.after(clock.now())
    }

    fn ago(self) -> OffsetDateTime
    where
        Self: Sized,
    {
        self.ago_on(&SystemClock)
    }

    fn from_now(self) -> OffsetDateTime
    where
        Self: Sized,
    {
        self.from_now_on(&SystemClock)
    }
}

impl RelativeTime for Duration {
    fn before(self, instant: OffsetDateTime) -> OffsetDateTime {
        instant - self
    }

    fn after(self, instant: OffsetDateTime) -> OffsetDateTime {
        instant + self
    }
}

/// A whole number of calendar months. Adding months keeps the time of day
/// and offset, and clamps the day to the length of the target month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarOffset {
    months: i32,
}

impl CalendarOffset {
    pub fn months(&self) -> i32 {
        self.months
    }

    pub fn after(self, instant: OffsetDateTime) -> Result<OffsetDateTime, DateError> {
        let date = shift_months(instant.date(), self.months)?;
        Ok(instant.replace_date(date))
    }

    pub fn before(self, instant: OffsetDateTime) -> Result<OffsetDateTime, DateError> {
        let months = self.months.checked_neg().ok_or(DateError::OutOfRange)?;
        CalendarOffset { months }.after(instant)
    }

    pub fn ago_on(self, clock: &impl Clock) -> Result<OffsetDateTime, DateError> {
        self.before(clock.now())
    }

    pub fn from_now_on(self, clock: &impl Clock) -> Result<OffsetDateTime, DateError> {
        self.after(clock.now())
    }

    pub fn ago(self) -> Result<OffsetDateTime, DateError> {
        self.ago_on(&SystemClock)
    }

    pub fn from_now(self) -> Result<OffsetDateTime, DateError> {
        self.from_now_on(&SystemClock)
    }
}

pub trait CalendarSpan {
    fn months(self) -> CalendarOffset;
    fn years(self) -> CalendarOffset;
}

impl CalendarSpan for i32 {
    fn months(self) -> CalendarOffset {
        CalendarOffset { months: self }
    }

    fn years(self) -> CalendarOffset {
        CalendarOffset {
            months: self.saturating_mul(12),
        }
    }
}

fn shift_months(date: Date, months: i32) -> Result<Date, DateError> {
    let current = i64::from(date.year()) * 12 + i64::from(u8::from(date.month())) - 1;
    let target = current + i64::from(months);

    let year = i32::try_from(target.div_euclid(12)).map_err(|_| DateError::OutOfRange)?;
    // rem_euclid(12) + 1 is always within 1..=12
    let month = Month::try_from((target.rem_euclid(12) + 1) as u8)
        .map_err(|_| DateError::OutOfRange)?;

    let mut day = date.day();
    loop {
        match Date::from_calendar_date(year, month, day) {
            Ok(shifted) => return Ok(shifted),
            Err(_) if day > 28 => day -= 1,
            Err(_) => return Err(DateError::OutOfRange),
        }
    }
}
