//! Calendar-aware relative offsets.
//!
//! A `RelativeOffset` is a displacement measured in calendar units. Unlike
//! a `Duration`, its effect depends on the date it gets applied to: one
//! month after the 31st of January is the last day of February, whatever
//! length February happens to have that year.
//!
//! Offsets are built from the unit functions in this module, and combined
//! by adding them together:
//!
//! ```rust
//! use datedelta::{LocalDate, Month};
//! use datedelta::relative::{days, months, years};
//!
//! let date = LocalDate::ymd(1995, Month::October, 5).unwrap();
//! let offset = days(2) + months(10) - years(3);
//!
//! assert_eq!(date + offset, LocalDate::ymd(1993, Month::August, 7).unwrap());
//! ```
//!
//! An offset holds three kinds of component, which get applied in this
//! order:
//!
//! 1. **Counts** of years, months, days, hours, minutes, seconds, and
//!    microseconds, which get added. Years and months go first, with the
//!    day clamped to the end of the month afterwards; the rest is a
//!    linear length of time.
//! 2. **Replacements**, such as `month(Month::May)` or `yearday(255)`,
//!    which overwrite one field of the date or time.
//! 3. **Weekday resolutions**, such as `MO.nth(2)`, which move to the
//!    second Monday after the date.

use std::error::Error as ErrorTrait;
use std::fmt;

use crate::cal::{Month, Weekday};

mod apply;
mod units;

pub use self::units::{Unit, Multiplier};
pub use self::units::{years, months, weeks, days, hours, minutes, seconds, microseconds};
pub use self::units::{year, month, day, hour, minute, second, microsecond, yearday, nlyearday};
pub use self::units::{leapday, leapdays};
pub use self::units::{MO, TU, WE, TH, FR, SA, SU};


/// A calendar-aware displacement, made up of signed counts of units,
/// field replacements, and weekday resolutions.
///
/// Offsets are values: combining two of them produces a third, and
/// applying one to a date never changes the offset.
#[derive(PartialEq, Eq, Clone, Default)]
pub struct RelativeOffset {
    years:        i64,
    months:       i64,
    days:         i64,
    leapdays:     i64,
    hours:        i64,
    minutes:      i64,
    seconds:      i64,
    microseconds: i64,

    replacements: Vec<Replacement>,
    weekdays:     Vec<NthWeekday>,

    /// Whether an explicit time unit or time replacement went into this
    /// offset. Fractions of days turn into hours without setting this.
    carries_time: bool,
}

/// An absolute value that replaces one field of a date or time.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Replacement {
    Year(i64),
    Month(Month),
    Day(i8),
    Hour(i8),
    Minute(i8),
    Second(i8),
    Microsecond(i32),

    /// The day of the year, counted against the actual length of the
    /// year, so day 60 is the 29th of February in a leap year.
    YearDay(i16),

    /// The day of the year, counted as though the year had 365 days, so
    /// day 60 is always the 1st of March.
    NonLeapYearDay(i16),
}

impl Replacement {

    /// Whether this replacement sets part of the time of day.
    fn is_time(self) -> bool {
        match self {
            Replacement::Hour(_) | Replacement::Minute(_)
          | Replacement::Second(_) | Replacement::Microsecond(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Replacement::Year(y)           => write!(f, "year={}", y),
            Replacement::Month(m)          => write!(f, "month={}", m as i8),
            Replacement::Day(d)            => write!(f, "day={}", d),
            Replacement::Hour(h)           => write!(f, "hour={}", h),
            Replacement::Minute(m)         => write!(f, "minute={}", m),
            Replacement::Second(s)         => write!(f, "second={}", s),
            Replacement::Microsecond(us)   => write!(f, "microsecond={}", us),
            Replacement::YearDay(n)        => write!(f, "yearday={}", n),
            Replacement::NonLeapYearDay(n) => write!(f, "nlyearday={}", n),
        }
    }
}


/// The *n*th occurrence of a weekday, counting from the day after a date
/// when `n` is positive, or from the day before it when `n` is negative.
///
/// An `n` of zero picks the date itself if it already falls on the
/// weekday, and the next occurrence otherwise.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct NthWeekday {
    pub weekday: Weekday,
    pub n: i64,
}

impl NthWeekday {

    /// Returns the same weekday with a different occurrence count.
    ///
    /// ```rust
    /// use datedelta::{LocalDate, Month};
    /// use datedelta::relative::MO;
    ///
    /// let thursday = LocalDate::ymd(2018, Month::March, 29).unwrap();
    /// assert_eq!(thursday + MO.nth(2), LocalDate::ymd(2018, Month::April, 9).unwrap());
    /// ```
    pub fn nth(self, n: i64) -> Self {
        Self { n, ..self }
    }
}

impl fmt::Display for NthWeekday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({:+})", self.weekday.short_name(), self.n)
    }
}

impl Weekday {

    /// Returns an offset that moves to the *n*th occurrence of this
    /// weekday.
    pub fn nth(self, n: i64) -> NthWeekday {
        NthWeekday { weekday: self, n }
    }
}

impl From<NthWeekday> for RelativeOffset {
    fn from(nth: NthWeekday) -> Self {
        Self { weekdays: vec![ nth ], ..Self::default() }
    }
}


impl RelativeOffset {

    /// Returns whether this offset does nothing at all, such as one built
    /// from zero days.
    ///
    /// ```rust
    /// use datedelta::relative::{days, hours};
    ///
    /// assert!(days(0).is_empty());
    /// assert!((days(1) - hours(24)).is_empty());
    /// assert!(!days(1).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0 && self.leapdays == 0
            && self.is_time_empty()
            && self.replacements.is_empty() && self.weekdays.is_empty()
    }

    fn is_time_empty(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.microseconds == 0
    }

    /// Returns whether applying this offset to a date produces a
    /// date-time, which happens when it was built with any time unit or
    /// time replacement.
    pub fn carries_time(&self) -> bool {
        self.carries_time
    }

    /// Returns the field replacements, in the order they get applied.
    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    /// Returns the weekday resolutions, in the order they get applied.
    pub fn weekdays(&self) -> &[NthWeekday] {
        &self.weekdays
    }

    /// Returns the counts of years and months, after any twelve months
    /// have been carried into a year.
    pub fn years_and_months(&self) -> (i64, i64) {
        (self.years, self.months)
    }

    /// Returns the counts of days, hours, minutes, seconds, and
    /// microseconds, after any overflow has been carried upwards.
    pub fn time_counts(&self) -> (i64, i64, i64, i64, i64) {
        (self.days, self.hours, self.minutes, self.seconds, self.microseconds)
    }

    /// Returns this offset pointing the other way.
    ///
    /// Every count changes sign, and every weekday resolution counts in
    /// the opposite direction. A replacement has no opposite, so negating
    /// an offset that contains one is an error.
    ///
    /// ```rust
    /// use datedelta::relative::{days, month, Error};
    /// use datedelta::Month;
    ///
    /// assert_eq!(days(3).try_neg(), Ok(days(-3)));
    /// assert_eq!((days(3) + month(Month::May)).try_neg(), Err(Error::NegatedReplacement));
    /// ```
    pub fn try_neg(&self) -> Result<Self, Error> {
        if !self.replacements.is_empty() {
            log_debug!("refusing to negate {:?}", self);
            return Err(Error::NegatedReplacement);
        }

        Ok(Self {
            years:        -self.years,
            months:       -self.months,
            days:         -self.days,
            leapdays:     -self.leapdays,
            hours:        -self.hours,
            minutes:      -self.minutes,
            seconds:      -self.seconds,
            microseconds: -self.microseconds,
            replacements: Vec::new(),
            weekdays:     self.weekdays.iter().map(|w| w.nth(-w.n)).collect(),
            carries_time: self.carries_time,
        })
    }

    /// Returns the sum of this offset and another one.
    ///
    /// Counts get added field by field. Replacements and weekday
    /// resolutions don’t add up: the other offset’s ones get applied after
    /// this one’s.
    pub fn combine(&self, other: &Self) -> Self {
        let mut replacements = self.replacements.clone();
        replacements.extend_from_slice(&other.replacements);

        let mut weekdays = self.weekdays.clone();
        weekdays.extend_from_slice(&other.weekdays);

        Self {
            years:        self.years + other.years,
            months:       self.months + other.months,
            days:         self.days + other.days,
            leapdays:     self.leapdays + other.leapdays,
            hours:        self.hours + other.hours,
            minutes:      self.minutes + other.minutes,
            seconds:      self.seconds + other.seconds,
            microseconds: self.microseconds + other.microseconds,
            replacements,
            weekdays,
            carries_time: self.carries_time || other.carries_time,
        }.normalised()
    }

    /// Carries overflowing counts into the next coarser unit, keeping the
    /// sign of each field: 90 minutes become 1 hour and 30 minutes, and
    /// 14 months become 1 year and 2 months.
    fn normalised(mut self) -> Self {
        let (up, rest) = carry(self.microseconds, 1_000_000);
        self.seconds += up;
        self.microseconds = rest;

        let (up, rest) = carry(self.seconds, 60);
        self.minutes += up;
        self.seconds = rest;

        let (up, rest) = carry(self.minutes, 60);
        self.hours += up;
        self.minutes = rest;

        let (up, rest) = carry(self.hours, 24);
        self.days += up;
        self.hours = rest;

        let (up, rest) = carry(self.months, 12);
        self.years += up;
        self.months = rest;

        self
    }
}

/// Splits a count into a number of whole cycles and what’s left over,
/// both with the sign of the count.
fn carry(count: i64, cycle_length: i64) -> (i64, i64) {
    (count / cycle_length, count % cycle_length)
}

impl fmt::Display for RelativeOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let counts = [
            ("years",        self.years),
            ("months",       self.months),
            ("days",         self.days),
            ("leapdays",     self.leapdays),
            ("hours",        self.hours),
            ("minutes",      self.minutes),
            ("seconds",      self.seconds),
            ("microseconds", self.microseconds),
        ];

        let mut first = true;
        let mut separate = |f: &mut fmt::Formatter| {
            if first { first = false; Ok(()) }
                else { f.write_str(", ") }
        };

        for &(name, count) in counts.iter().filter(|c| c.1 != 0) {
            separate(f)?;
            write!(f, "{}={:+}", name, count)?;
        }

        for replacement in &self.replacements {
            separate(f)?;
            write!(f, "{}", replacement)?;
        }

        for nth in &self.weekdays {
            separate(f)?;
            write!(f, "weekday={}", nth)?;
        }

        Ok(())
    }
}

impl fmt::Debug for RelativeOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RelativeOffset({})", self)
    }
}


/// Errors that can occur when building or negating an offset.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// The multiplier given to a unit was not a finite number that fits in
    /// the range of whole units. Holds the offending value as text.
    NotANumber(String),

    /// A fractional number of months was asked for, which has no fixed
    /// length. Holds the offending value as text.
    AmbiguousFraction(String),

    /// A replacement value lies outside its field’s range.
    OutOfRange(Replacement),

    /// An offset containing a replacement was negated.
    NegatedReplacement,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NotANumber(ref value)        => write!(f, "unit multiplier must be a finite number, not {}", value),
            Error::AmbiguousFraction(ref value) => write!(f, "fractional months are ambiguous: {}", value),
            Error::OutOfRange(replacement)      => write!(f, "replacement out of range: {}", replacement),
            Error::NegatedReplacement           => write!(f, "an offset with replacement fields cannot be negated"),
        }
    }
}

impl ErrorTrait for Error {
}
