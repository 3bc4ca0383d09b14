//! Lazy ranges of dates and date-times.
//!
//! A `DateRange` starts at one value and keeps adding a `RelativeOffset`
//! to it until it reaches its stop value, which never gets returned:
//!
//! ```rust
//! use datedelta::{LocalDate, Month, DateRange};
//! use datedelta::relative::days;
//!
//! let start = LocalDate::ymd(1994, Month::April, 5).unwrap();
//! let stop  = LocalDate::ymd(1994, Month::March, 27).unwrap();
//!
//! let dates: Vec<_> = DateRange::new(start, stop, days(-2)).unwrap()
//!                               .map(|date| date.to_string())
//!                               .collect();
//!
//! assert_eq!(dates, vec![ "1994-04-05", "1994-04-03", "1994-04-01", "1994-03-30", "1994-03-28" ]);
//! ```
//!
//! Whether the range counts upwards or downwards depends only on the
//! step: it’s worked out once, by applying the step to the current time
//! and seeing which way it went.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::iter::FusedIterator;

use crate::cal::{LocalDate, LocalDateTime, Moment};
use crate::clock::{Clock, SystemClock};
use crate::relative::{RelativeOffset, days};


/// A value that a `DateRange` can step through.
pub trait Advance: Copy + Ord + fmt::Debug + fmt::Display {

    /// Returns this value with the step applied.
    fn advance(self, step: &RelativeOffset) -> Self;

    /// Returns the current time as the same kind of value as the given
    /// one, for ranges that begin now.
    fn now_like<C: Clock>(clock: &C, like: &Self) -> Self;

    /// Returns whether stepping by this offset gives back the same kind
    /// of value.
    fn accepts(_step: &RelativeOffset) -> bool {
        true
    }
}

impl Advance for LocalDate {
    fn advance(self, step: &RelativeOffset) -> Self {
        step.apply_to_date(self).date()
    }

    fn now_like<C: Clock>(clock: &C, _like: &Self) -> Self {
        clock.today()
    }

    fn accepts(step: &RelativeOffset) -> bool {
        !step.carries_time()
    }
}

impl Advance for LocalDateTime {
    fn advance(self, step: &RelativeOffset) -> Self {
        step.apply_to_datetime(self)
    }

    fn now_like<C: Clock>(clock: &C, _like: &Self) -> Self {
        clock.now()
    }
}

impl Advance for Moment {
    fn advance(self, step: &RelativeOffset) -> Self {
        step.apply(self)
    }

    fn now_like<C: Clock>(clock: &C, like: &Self) -> Self {
        if like.is_date() { Moment::Date(clock.today()) }
                     else { Moment::DateTime(clock.now()) }
    }
}


/// A lazy sequence of dates or date-times, from a start value up to but
/// not including a stop value, separated by a step.
///
/// Once a range has run out, it stays run out.
#[derive(Clone)]
pub struct DateRange<T> {
    start: T,
    stop: T,
    step: RelativeOffset,
    backwards: bool,
    cursor: Option<T>,
}

impl<T: Advance> DateRange<T> {

    /// Creates a range from `start` to `stop`, using the system clock to
    /// tell which way the step goes.
    pub fn new(start: T, stop: T, step: RelativeOffset) -> Result<Self, Error> {
        Self::with_clock(SystemClock, start, stop, step)
    }

    /// Creates a range from `start` to `stop`, using the given clock to
    /// tell which way the step goes.
    ///
    /// Returns an error if the step does nothing, or if it would turn
    /// dates into date-times.
    pub fn with_clock<C: Clock>(clock: C, start: T, stop: T, step: RelativeOffset) -> Result<Self, Error> {
        if step.is_empty() {
            log_debug!("rejecting range from {} to {} with an empty step", start, stop);
            return Err(Error::ZeroStep);
        }

        if !T::accepts(&step) {
            log_debug!("rejecting range from {} to {} stepping by {}", start, stop, step);
            return Err(Error::TimeStep);
        }

        let now = clock.now();
        let backwards = step.apply_to_datetime(now) < now;

        log_trace!("new range from {} to {} stepping by {} ({})", start, stop, step,
                   if backwards { "backwards" } else { "forwards" });

        Ok(Self { start, stop, step, backwards, cursor: Some(start) })
    }

    /// Creates a range from `start` to `stop` that steps forwards by one
    /// day.
    pub fn between(start: T, stop: T) -> Self {
        Self { start, stop, step: days(1), backwards: false, cursor: Some(start) }
    }

    /// Creates a range that steps forwards by one day from the current
    /// date or time, read from the system clock, to `stop`.
    pub fn until(stop: T) -> Self {
        Self::until_with(SystemClock, stop)
    }

    /// Creates a range that steps forwards by one day from the current
    /// date or time, read from the given clock, to `stop`. The start is
    /// a date if `stop` is a date, and a date-time otherwise.
    ///
    /// ```rust
    /// use datedelta::{DateRange, FixedClock, LocalDate, Month};
    ///
    /// let clock = FixedClock(LocalDate::ymd(2000, Month::December, 30).unwrap().midnight());
    /// let stop = LocalDate::ymd(2001, Month::January, 2).unwrap();
    ///
    /// assert_eq!(DateRange::until_with(clock, stop).count(), 3);
    /// ```
    pub fn until_with<C: Clock>(clock: C, stop: T) -> Self {
        let start = T::now_like(&clock, &stop);
        Self::between(start, stop)
    }

    /// Returns the value this range started at.
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the value this range stops before reaching.
    pub fn stop(&self) -> T {
        self.stop
    }

    /// Returns the offset between one value and the next.
    pub fn step(&self) -> &RelativeOffset {
        &self.step
    }

    /// Returns whether this range counts downwards.
    pub fn is_backwards(&self) -> bool {
        self.backwards
    }

    fn has_passed(&self, value: T) -> bool {
        if self.backwards { value <= self.stop }
                     else { value >= self.stop }
    }
}

/// Creates a range from `start` to `stop`, stepping by `step`. This is
/// the same as `DateRange::new`.
pub fn drange<T: Advance>(start: T, stop: T, step: RelativeOffset) -> Result<DateRange<T>, Error> {
    DateRange::new(start, stop, step)
}

impl<T: Advance> Iterator for DateRange<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.cursor?;

        if self.has_passed(current) {
            log_trace!("range to {} finished at {}", self.stop, current);
            self.cursor = None;
            return None;
        }

        let next = current.advance(&self.step);
        let progressed = if self.backwards { next < current } else { next > current };

        self.cursor = if progressed {
            Some(next)
        }
        else {
            // A step made only of replacements can land on the same value
            // again, which would repeat forever.
            log_debug!("range step {} went from {} to {}, stopping", self.step, current, next);
            None
        };

        Some(current)
    }
}

impl<T: Advance> FusedIterator for DateRange<T> {}

impl<T: Advance> fmt::Debug for DateRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DateRange({}, {}, {})", self.start, self.stop, self.step)
    }
}


/// Errors that can occur when creating a range.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Error {

    /// The step does nothing, so the range would never get anywhere.
    ZeroStep,

    /// The step carries a time of day, so stepping through dates would
    /// produce date-times. Use a range of `Moment` or `LocalDateTime`
    /// values instead.
    TimeStep,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ZeroStep => write!(f, "step must be non-zero"),
            Error::TimeStep => write!(f, "a step with a time of day cannot be used to step through dates"),
        }
    }
}

impl ErrorTrait for Error {
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::Month;
    use crate::clock::FixedClock;
    use crate::relative::{hours, day, year};

    fn clock() -> FixedClock {
        FixedClock(LocalDate::ymd(2020, Month::June, 1).unwrap().midnight())
    }

    fn date(year: i64, month: Month, day: i8) -> LocalDate {
        LocalDate::ymd(year, month, day).unwrap()
    }

    #[test]
    fn direction() {
        let start = date(2000, Month::January, 1);
        assert!(!DateRange::with_clock(clock(), start, start, days(1)).unwrap().is_backwards());
        assert!(DateRange::with_clock(clock(), start, start, days(-1)).unwrap().is_backwards());
        assert!(DateRange::with_clock(clock(), start, start, year(1990)).unwrap().is_backwards());
    }

    #[test]
    fn zero_step() {
        let start = date(2000, Month::January, 1);
        let result = DateRange::with_clock(clock(), start, start, days(0));
        assert_eq!(result.unwrap_err(), Error::ZeroStep);
    }

    #[test]
    fn time_step_on_dates() {
        let start = date(2000, Month::January, 1);
        let result = DateRange::with_clock(clock(), start, start, hours(12));
        assert_eq!(result.unwrap_err(), Error::TimeStep);
    }

    #[test]
    fn empty_when_start_is_past_stop() {
        let start = date(2000, Month::January, 10);
        let stop = date(2000, Month::January, 1);
        assert_eq!(DateRange::with_clock(clock(), start, stop, days(1)).unwrap().count(), 0);
    }

    #[test]
    fn stops_when_a_step_goes_nowhere() {
        let start = date(2000, Month::January, 10);
        let stop = date(2000, Month::March, 1);
        let range = DateRange::with_clock(clock(), start, stop, day(1).unwrap()).unwrap();
        assert_eq!(range.collect::<Vec<_>>(), vec![ start ]);
    }

    #[test]
    fn fused() {
        let start = date(2000, Month::January, 1);
        let mut range = DateRange::between(start, start.add_days(1));
        assert_eq!(range.next(), Some(start));
        assert_eq!(range.next(), None);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn debug() {
        let range = DateRange::between(date(1994, Month::March, 27), date(1994, Month::April, 5));
        assert_eq!(format!("{:?}", range), "DateRange(1994-03-27, 1994-04-05, days=+1)");
    }
}
