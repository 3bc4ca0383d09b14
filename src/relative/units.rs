//! The functions that build single-unit offsets.

use num_traits::ToPrimitive;

use crate::cal::{Month, Weekday};
use crate::util::RangeExt;
use super::{RelativeOffset, Replacement, NthWeekday, Error};


/// One of the units an offset can count in.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Microseconds,
}

impl Unit {

    /// Returns an offset of `n` of this unit. Integer multipliers always
    /// succeed; floating-point ones return a `Result`.
    ///
    /// ```rust
    /// use datedelta::relative::{Unit, hours, minutes};
    ///
    /// assert_eq!(Unit::Hours.times(2), hours(2));
    /// assert_eq!(Unit::Hours.times(1.5), Ok(hours(1) + minutes(30)));
    /// ```
    pub fn times<N: Multiplier>(self, n: N) -> N::Output {
        n.scale(self)
    }

    /// Whether this unit measures less than a day.
    pub fn is_time(self) -> bool {
        match self {
            Unit::Hours | Unit::Minutes | Unit::Seconds | Unit::Microseconds => true,
            _ => false,
        }
    }

    /// The fixed length of this unit in microseconds, which months and
    /// years do not have.
    fn length_in_micros(self) -> Option<i64> {
        match self {
            Unit::Years | Unit::Months => None,
            Unit::Weeks         => Some(7 * 86_400_000_000),
            Unit::Days          => Some(86_400_000_000),
            Unit::Hours         => Some(3_600_000_000),
            Unit::Minutes       => Some(60_000_000),
            Unit::Seconds       => Some(1_000_000),
            Unit::Microseconds  => Some(1),
        }
    }

    /// Returns an offset of a whole number of this unit.
    ///
    /// # Panics
    ///
    /// Panics if a number of weeks has more days than fit in an `i64`.
    fn whole(self, n: i64) -> RelativeOffset {
        match self.checked_whole(n) {
            Some(offset) => offset,
            None         => panic!("{} {:?} overflows an offset", n, self),
        }
    }

    /// Returns an offset of a whole number of this unit, or `None` if
    /// the number of days overflows.
    fn checked_whole(self, n: i64) -> Option<RelativeOffset> {
        let mut offset = RelativeOffset::default();

        match self {
            Unit::Years         => offset.years = n,
            Unit::Months        => offset.months = n,
            Unit::Weeks         => offset.days = n.checked_mul(7)?,
            Unit::Days          => offset.days = n,
            Unit::Hours         => offset.hours = n,
            Unit::Minutes       => offset.minutes = n,
            Unit::Seconds       => offset.seconds = n,
            Unit::Microseconds  => offset.microseconds = n,
        }

        offset.carries_time = self.is_time() && n != 0;
        Some(offset.normalised())
    }

    /// Returns an offset of a possibly-fractional number of this unit.
    ///
    /// The whole part is counted exactly. The fractional part becomes
    /// microseconds, rounded to the nearest one, except for years, where
    /// it has to come out as a whole number of months.
    fn fractional(self, n: f64) -> Result<RelativeOffset, Error> {
        let not_a_number = || {
            log_debug!("rejecting {} as a multiplier of {:?}", n, self);
            Error::NotANumber(n.to_string())
        };

        if !n.is_finite() {
            return Err(not_a_number());
        }

        let whole = n.trunc().to_i64().ok_or_else(not_a_number)?;
        let fraction = n.fract();

        let mut offset = self.checked_whole(whole).ok_or_else(not_a_number)?;
        let mut remainder = 0;

        match self.length_in_micros() {
            Some(micros) => {
                remainder = (fraction * micros as f64).round() as i64;
                offset.microseconds = offset.microseconds.checked_add(remainder).ok_or_else(not_a_number)?;
            }

            None if self == Unit::Years => {
                let months = fraction * 12.0;
                if (months - months.round()).abs() > 1e-9 {
                    log_debug!("{} years is not a whole number of months", n);
                    return Err(Error::AmbiguousFraction(n.to_string()));
                }

                offset.months += months.round() as i64;
            }

            None => {
                if fraction != 0.0 {
                    log_debug!("{} months has no fixed length", n);
                    return Err(Error::AmbiguousFraction(n.to_string()));
                }
            }
        }

        offset.carries_time = self.is_time() && (whole != 0 || remainder != 0);
        Ok(offset.normalised())
    }
}


/// A number that an offset unit can be multiplied by.
///
/// Whole numbers are `i64`, so multiplying by one returns the offset
/// directly. Fractional numbers are `f64`, which may be infinite, not a
/// number, or a fractional number of months, so multiplying by one
/// returns a `Result`. Other numeric types convert into one of these two
/// with `from`.
pub trait Multiplier: Copy {

    /// What multiplying a unit by this number produces.
    type Output;

    /// Returns an offset of this many of the given unit.
    fn scale(self, unit: Unit) -> Self::Output;
}

impl Multiplier for i64 {
    type Output = RelativeOffset;

    fn scale(self, unit: Unit) -> RelativeOffset {
        unit.whole(self)
    }
}

impl Multiplier for f64 {
    type Output = Result<RelativeOffset, Error>;

    fn scale(self, unit: Unit) -> Self::Output {
        unit.fractional(self)
    }
}


/// Returns an offset of `n` years. Fractions of a year must come out as a
/// whole number of months.
///
/// ```rust
/// use datedelta::relative::{years, months};
///
/// assert_eq!(years(1.5), Ok(years(1) + months(6)));
/// assert!(years(1.1).is_err());
/// ```
pub fn years<N: Multiplier>(n: N) -> N::Output {
    Unit::Years.times(n)
}

/// Returns an offset of `n` months. A month has no fixed length, so only
/// whole months are allowed.
pub fn months<N: Multiplier>(n: N) -> N::Output {
    Unit::Months.times(n)
}

/// Returns an offset of `n` weeks, which get counted as seven days each.
pub fn weeks<N: Multiplier>(n: N) -> N::Output {
    Unit::Weeks.times(n)
}

/// Returns an offset of `n` days.
///
/// Fractions of a day get counted in hours, minutes, and so on, but they
/// do not turn a date into a date-time: adding half a day to a date
/// leaves it on the same date.
pub fn days<N: Multiplier>(n: N) -> N::Output {
    Unit::Days.times(n)
}

/// Returns an offset of `n` hours.
pub fn hours<N: Multiplier>(n: N) -> N::Output {
    Unit::Hours.times(n)
}

/// Returns an offset of `n` minutes.
pub fn minutes<N: Multiplier>(n: N) -> N::Output {
    Unit::Minutes.times(n)
}

/// Returns an offset of `n` seconds.
pub fn seconds<N: Multiplier>(n: N) -> N::Output {
    Unit::Seconds.times(n)
}

/// Returns an offset of `n` microseconds. Fractions get rounded to the
/// nearest microsecond.
pub fn microseconds<N: Multiplier>(n: N) -> N::Output {
    Unit::Microseconds.times(n)
}


impl From<Replacement> for RelativeOffset {
    fn from(replacement: Replacement) -> Self {
        Self {
            replacements: vec![ replacement ],
            carries_time: replacement.is_time(),
            ..Self::default()
        }
    }
}

fn checked(replacement: Replacement, valid: bool) -> Result<RelativeOffset, Error> {
    if valid {
        Ok(replacement.into())
    }
    else {
        log_debug!("replacement {} is out of range", replacement);
        Err(Error::OutOfRange(replacement))
    }
}

/// Returns an offset that sets the year.
pub fn year(year: i64) -> RelativeOffset {
    Replacement::Year(year).into()
}

/// Returns an offset that sets the month. If the day is past the end of
/// the new month, it gets moved back to the month’s last day.
pub fn month(month: Month) -> RelativeOffset {
    Replacement::Month(month).into()
}

/// Returns an offset that sets the day of the month, from 1 to 31. A day
/// past the end of the month means its last day.
///
/// ```rust
/// use datedelta::{LocalDate, Month};
/// use datedelta::relative::day;
///
/// let date = LocalDate::ymd(2019, Month::February, 3).unwrap();
/// assert_eq!(date + day(31).unwrap(), LocalDate::ymd(2019, Month::February, 28).unwrap());
/// assert!(day(32).is_err());
/// ```
pub fn day(day: i8) -> Result<RelativeOffset, Error> {
    checked(Replacement::Day(day), day.is_within(1..32))
}

/// Returns an offset that sets the hour, from 0 to 23.
pub fn hour(hour: i8) -> Result<RelativeOffset, Error> {
    checked(Replacement::Hour(hour), hour.is_within(0..24))
}

/// Returns an offset that sets the minute, from 0 to 59.
pub fn minute(minute: i8) -> Result<RelativeOffset, Error> {
    checked(Replacement::Minute(minute), minute.is_within(0..60))
}

/// Returns an offset that sets the second, from 0 to 59.
pub fn second(second: i8) -> Result<RelativeOffset, Error> {
    checked(Replacement::Second(second), second.is_within(0..60))
}

/// Returns an offset that sets the microsecond, from 0 to 999,999.
pub fn microsecond(microsecond: i32) -> Result<RelativeOffset, Error> {
    checked(Replacement::Microsecond(microsecond), microsecond.is_within(0..1_000_000))
}

/// Returns an offset that moves to the given day of the year, from 1 to
/// 366, counting the 29th of February in leap years. Day 366 of a common
/// year is its last day.
///
/// ```rust
/// use datedelta::{LocalDate, Month};
/// use datedelta::relative::yearday;
///
/// let date = LocalDate::ymd(1996, Month::February, 25).unwrap();
/// assert_eq!(date + yearday(255).unwrap(), LocalDate::ymd(1996, Month::September, 11).unwrap());
/// ```
pub fn yearday(yearday: i16) -> Result<RelativeOffset, Error> {
    checked(Replacement::YearDay(yearday), yearday.is_within(1..367))
}

/// Returns an offset that moves to the given day of the year, from 1 to
/// 365, counted as though the year had no 29th of February.
///
/// ```rust
/// use datedelta::{LocalDate, Month};
/// use datedelta::relative::nlyearday;
///
/// let date = LocalDate::ymd(1996, Month::February, 25).unwrap();
/// assert_eq!(date + nlyearday(255).unwrap(), LocalDate::ymd(1996, Month::September, 12).unwrap());
/// ```
pub fn nlyearday(nlyearday: i16) -> Result<RelativeOffset, Error> {
    checked(Replacement::NonLeapYearDay(nlyearday), nlyearday.is_within(1..366))
}

/// Returns an offset of one leap day, which adds a day only when the
/// date it gets applied to is in a leap year and after February.
///
/// The check happens after the years and months of the same offset have
/// been added, but before its days. So a leap day combined with other
/// days can give a different result from adding the two one after the
/// other:
///
/// ```rust
/// use datedelta::{LocalDate, Month};
/// use datedelta::relative::{days, leapday};
///
/// let date = LocalDate::ymd(1996, Month::February, 25).unwrap();
/// assert_eq!(date + (days(10) + leapday()), LocalDate::ymd(1996, Month::March, 6).unwrap());
/// assert_eq!(date + days(10) + leapday(), LocalDate::ymd(1996, Month::March, 7).unwrap());
/// ```
pub fn leapday() -> RelativeOffset {
    leapdays(1)
}

/// Returns an offset of `n` leap days. See `leapday`.
pub fn leapdays(n: i64) -> RelativeOffset {
    RelativeOffset { leapdays: n, ..RelativeOffset::default() }
}


/// The next Monday.
pub const MO: NthWeekday = NthWeekday { weekday: Weekday::Monday,    n: 1 };

/// The next Tuesday.
pub const TU: NthWeekday = NthWeekday { weekday: Weekday::Tuesday,   n: 1 };

/// The next Wednesday.
pub const WE: NthWeekday = NthWeekday { weekday: Weekday::Wednesday, n: 1 };

/// The next Thursday.
pub const TH: NthWeekday = NthWeekday { weekday: Weekday::Thursday,  n: 1 };

/// The next Friday.
pub const FR: NthWeekday = NthWeekday { weekday: Weekday::Friday,    n: 1 };

/// The next Saturday.
pub const SA: NthWeekday = NthWeekday { weekday: Weekday::Saturday,  n: 1 };

/// The next Sunday.
pub const SU: NthWeekday = NthWeekday { weekday: Weekday::Sunday,    n: 1 };
