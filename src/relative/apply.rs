//! Applying offsets to dates and date-times.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::cal::{DatePiece, TimePiece, LocalDate, LocalDateTime, LocalTime, Month, Moment, Year};
use crate::cal::datetime::{MONTHS, SECONDS_IN_DAY};
use crate::util::split_cycles;
use super::{RelativeOffset, Replacement, NthWeekday, Error};


const MICROS_IN_SECOND: i64 = 1_000_000;


/// The fields of a date-time while replacements are being applied to
/// it. The day is the one asked for, which may not exist in the month;
/// it only gets clamped once every replacement has been applied.
#[derive(Debug, Clone, Copy)]
struct Fields {
    year: i64,
    month: Month,
    day: i8,
    time: LocalTime,
}

impl Fields {
    fn of(local: LocalDateTime) -> Self {
        Self {
            year:  local.year(),
            month: local.month(),
            day:   local.day(),
            time:  local.time(),
        }
    }

    fn replace(&mut self, replacement: Replacement) {
        match replacement {
            Replacement::Year(year)          => self.year = year,
            Replacement::Month(month)        => self.month = month,
            Replacement::Day(day)            => self.day = day,
            Replacement::Hour(hour)          => self.time = self.time.with_hour(hour),
            Replacement::Minute(minute)      => self.time = self.time.with_minute(minute),
            Replacement::Second(second)      => self.time = self.time.with_second(second),
            Replacement::Microsecond(us)     => self.time = self.time.with_microsecond(us),
            Replacement::YearDay(n)          => self.set_date(exact_yearday(self.year, n)),
            Replacement::NonLeapYearDay(n)   => self.set_date(non_leap_yearday(self.year, n)),
        }
    }

    fn set_date(&mut self, date: LocalDate) {
        self.year = date.year();
        self.month = date.month();
        self.day = date.day();
    }

    fn finish(self) -> LocalDateTime {
        let date = Year(self.year).month(self.month).clamped_day(self.day);
        LocalDateTime::new(date, self.time)
    }
}

/// Returns the *n*th day of the year, with day 366 of a common year
/// meaning its last day.
fn exact_yearday(year: i64, n: i16) -> LocalDate {
    let n = n.min(Year(year).day_count());
    Year(year).month(Month::January).clamped_day(1).add_days(i64::from(n) - 1)
}

/// Returns the *n*th day of the year, counting as though February always
/// had 28 days.
fn non_leap_yearday(year: i64, n: i16) -> LocalDate {
    let month = MONTHS.iter()
                      .rev()
                      .find(|m| m.days_before_start() < n)
                      .cloned()
                      .unwrap_or(Month::January);

    Year(year).month(month).clamped_day((n - month.days_before_start()) as i8)
}

/// Returns the number of days to move to reach the *n*th occurrence of
/// the target weekday.
fn weekday_shift(date: LocalDate, nth: NthWeekday) -> i64 {
    let current = i64::from(date.weekday().days_from_monday_as_one());
    let target = i64::from(nth.weekday.days_from_monday_as_one());

    if nth.n >= 0 {
        let ahead = split_cycles(target - current, 7).1;
        if nth.n == 0 { ahead }
        else if ahead == 0 { 7 * nth.n }
        else { ahead + 7 * (nth.n - 1) }
    }
    else {
        let behind = split_cycles(current - target, 7).1;
        let behind = if behind == 0 { 7 } else { behind };
        -(behind + 7 * (-nth.n - 1))
    }
}


impl RelativeOffset {

    /// Applies this offset to a date-time.
    ///
    /// The counts of years and months go first, with the day clamped to
    /// the end of the month once both have been added. Leap days get added
    /// next, if the date is in a leap year after February. Then the rest
    /// of the counts get added as one linear length of time, followed by
    /// the replacements in order, and the weekday resolutions in order.
    pub fn apply_to_datetime(&self, local: LocalDateTime) -> LocalDateTime {
        let mut date = local.date();

        if self.years != 0 || self.months != 0 {
            let months_since_zero = date.year() * 12 + date.month().months_from_january() as i64
                                  + self.years * 12 + self.months;
            let (year, month) = split_cycles(months_since_zero, 12);

            let month = MONTHS[month as usize];
            date = Year(year).month(month).clamped_day(date.day());
        }

        if self.leapdays != 0 && date.year_month().year.is_leap_year() && date.month() > Month::February {
            date = date.add_days(self.leapdays);
        }

        // The time counts are each less than a day once normalised, so
        // only the days need to go through the calendar.
        let seconds = self.hours * 3600 + self.minutes * 60 + self.seconds;
        let micros = (local.time().to_seconds() + seconds) * MICROS_IN_SECOND
                   + i64::from(local.microsecond()) + self.microseconds;
        let (extra_days, micros) = split_cycles(micros, SECONDS_IN_DAY * MICROS_IN_SECOND);
        let time = LocalTime::from_seconds_and_microseconds_since_midnight(
            micros / MICROS_IN_SECOND, (micros % MICROS_IN_SECOND) as i32);
        let mut local = LocalDateTime::new(date.add_days(self.days + extra_days), time);

        if !self.replacements.is_empty() {
            let mut fields = Fields::of(local);
            for replacement in &self.replacements {
                fields.replace(*replacement);
            }
            local = fields.finish();
        }

        for nth in &self.weekdays {
            let date = local.date().add_days(weekday_shift(local.date(), *nth));
            local = LocalDateTime::new(date, local.time());
        }

        log_trace!("applied {:?} to get {:?}", self, local);
        local
    }

    /// Applies this offset to a date.
    ///
    /// The result is a date-time only if this offset carries a time.
    /// Otherwise, the offset gets applied at midnight and the date of the
    /// result is kept, which drops any part of a day left over from a
    /// fractional number of days.
    pub fn apply_to_date(&self, date: LocalDate) -> Moment {
        let local = self.apply_to_datetime(date.midnight());

        if self.carries_time() { Moment::DateTime(local) }
                          else { Moment::Date(local.date()) }
    }

    /// Applies this offset to a date or a date-time.
    pub fn apply(&self, moment: Moment) -> Moment {
        match moment {
            Moment::Date(date)      => self.apply_to_date(date),
            Moment::DateTime(local) => Moment::DateTime(self.apply_to_datetime(local)),
        }
    }
}


// Offsets that contain a replacement cannot be negated, so subtracting
// one panics. This has a checked version that returns the error.
macro_rules! checked_sub {
    ($target:ty => $output:ty, $apply:ident) => {
        impl $target {

            /// Subtracts an offset, returning an error if the offset
            /// contains a replacement and so cannot be negated.
            pub fn checked_sub(self, offset: &RelativeOffset) -> Result<$output, Error> {
                offset.try_neg().map(|negated| negated.$apply(self))
            }
        }
    };
}

macro_rules! offset_arithmetic {
    ($target:ty => $output:ty, $apply:ident) => {
        impl Add<RelativeOffset> for $target {
            type Output = $output;

            fn add(self, offset: RelativeOffset) -> $output {
                offset.$apply(self)
            }
        }

        impl<'a> Add<&'a RelativeOffset> for $target {
            type Output = $output;

            fn add(self, offset: &'a RelativeOffset) -> $output {
                offset.$apply(self)
            }
        }

        impl Sub<RelativeOffset> for $target {
            type Output = $output;

            fn sub(self, offset: RelativeOffset) -> $output {
                (-offset).$apply(self)
            }
        }

        impl Add<NthWeekday> for $target {
            type Output = $output;

            fn add(self, nth: NthWeekday) -> $output {
                RelativeOffset::from(nth).$apply(self)
            }
        }

        impl Sub<NthWeekday> for $target {
            type Output = $output;

            fn sub(self, nth: NthWeekday) -> $output {
                RelativeOffset::from(-nth).$apply(self)
            }
        }

        checked_sub!($target => $output, $apply);
    };
}

offset_arithmetic!(LocalDate     => Moment,        apply_to_date);
offset_arithmetic!(LocalDateTime => LocalDateTime, apply_to_datetime);
offset_arithmetic!(Moment        => Moment,        apply);

impl AddAssign<RelativeOffset> for LocalDateTime {
    fn add_assign(&mut self, offset: RelativeOffset) {
        *self = offset.apply_to_datetime(*self);
    }
}

impl SubAssign<RelativeOffset> for LocalDateTime {
    fn sub_assign(&mut self, offset: RelativeOffset) {
        *self = (-offset).apply_to_datetime(*self);
    }
}

impl AddAssign<RelativeOffset> for Moment {
    fn add_assign(&mut self, offset: RelativeOffset) {
        *self = offset.apply(*self);
    }
}

impl SubAssign<RelativeOffset> for Moment {
    fn sub_assign(&mut self, offset: RelativeOffset) {
        *self = (-offset).apply(*self);
    }
}


impl Add<RelativeOffset> for RelativeOffset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

impl Sub<RelativeOffset> for RelativeOffset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.combine(&-rhs)
    }
}

impl Add<NthWeekday> for RelativeOffset {
    type Output = Self;

    fn add(self, nth: NthWeekday) -> Self {
        self.combine(&nth.into())
    }
}

impl Sub<NthWeekday> for RelativeOffset {
    type Output = Self;

    fn sub(self, nth: NthWeekday) -> Self {
        self.combine(&(-nth).into())
    }
}

impl Add<RelativeOffset> for NthWeekday {
    type Output = RelativeOffset;

    fn add(self, offset: RelativeOffset) -> RelativeOffset {
        RelativeOffset::from(self).combine(&offset)
    }
}

impl Add<NthWeekday> for NthWeekday {
    type Output = RelativeOffset;

    fn add(self, nth: NthWeekday) -> RelativeOffset {
        RelativeOffset::from(self).combine(&nth.into())
    }
}

impl AddAssign<RelativeOffset> for RelativeOffset {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.combine(&rhs);
    }
}

impl SubAssign<RelativeOffset> for RelativeOffset {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.combine(&-rhs);
    }
}

impl AddAssign<NthWeekday> for RelativeOffset {
    fn add_assign(&mut self, nth: NthWeekday) {
        *self = self.combine(&nth.into());
    }
}

/// Panics if the offset contains a replacement, as those have no
/// opposite. Use `try_neg` to get the error back instead.
impl Neg for RelativeOffset {
    type Output = Self;

    fn neg(self) -> Self {
        match self.try_neg() {
            Ok(negated) => negated,
            Err(e)      => panic!("{}", e),
        }
    }
}

impl Neg for NthWeekday {
    type Output = Self;

    fn neg(self) -> Self {
        self.nth(-self.n)
    }
}
