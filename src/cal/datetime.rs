//! Dates, times, datetimes, months, and weekdays.

use std::cmp::{self, Ordering, PartialOrd};
use std::error::Error as ErrorTrait;
use std::fmt;
use std::ops::{Add, Deref, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::fmt::ISO;
use crate::duration::Duration;
use crate::system::sys_time;
use crate::util::{split_cycles, RangeExt};

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use datedelta::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// Returns the number of days in this year: 366 in a leap year, and
    /// 365 otherwise.
    pub fn day_count(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Returns a year-month, pairing this year with the given month.
    ///
    /// ### Examples
    ///
    /// ```
    /// use datedelta::{Year, Month};
    ///
    /// let expiry_date = Year(2017).month(Month::February);
    /// assert_eq!(*expiry_date.year, 2017);
    /// assert_eq!(expiry_date.month, Month::February);
    /// ```
    pub fn month(self, month: Month) -> YearMonth {
        YearMonth {
            year: self,
            month,
        }
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed prior to this year;
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;

        // This calculation is the reverse of LocalDate::from_days_since_epoch.
        let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

        // Standard leap-year calculations, performed on the remainder
        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}

impl Deref for Year {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


/// A month-year pair.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct YearMonth {
    pub year: Year,
    pub month: Month,
}

impl YearMonth {

    /// Returns the number of days in this month. This can be definitely
    /// known, as the paired year determines whether it’s a leap year, so
    /// there’s no chance of being caught out by February.
    ///
    /// ### Examples
    ///
    /// ```
    /// use datedelta::Year;
    /// use datedelta::Month::February;
    ///
    /// assert_eq!(Year(2000).month(February).day_count(), 29);
    /// assert_eq!(Year(1900).month(February).day_count(), 28);
    /// ```
    pub fn day_count(&self) -> i8 {
        self.month.days_in_month(self.year.is_leap_year())
    }

    /// Returns a `LocalDate` based on the day of this month.
    ///
    /// This is just a short-cut for the `LocalDate::ymd` constructor.
    pub fn day(&self, day: i8) -> Result<LocalDate, Error> {
        LocalDate::ymd(self.year.0, self.month, day)
    }

    /// Returns the date on the given day of this month, or on the last
    /// day of the month if the month is too short to have that day.
    pub(crate) fn clamped_day(&self, day: i8) -> LocalDate {
        let day = cmp::max(1, cmp::min(day, self.day_count()));
        let ymd = YMD { year: self.year.0, month: self.month, day };
        LocalDate::from_days_since_1970(ymd.days_since_1970())
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;


/// Number of days between  **1st January, 1970** and **1st March, 2000**.
///
/// By having the reference point immediately after a possible leap-year
/// day, the maths needed to calculate the day/week/month of a day count
/// comes out a lot simpler. The Gregorian calendar operates on a 400-year
/// cycle, and 2000 is a multiple of 400 with its leap day at the very end
/// of the previous cycle, so the calculations reduce to simple division.
///
/// Many people assume the Unix epoch to be midnight on the 1st January
/// 1970, so this value (and any functions that depend on it) aren’t
/// exposed to users of this library.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.


/// An array of the number of days elapsed at the end of each month,
/// starting at the beginning of March (the first month after the EPOCH
/// above), going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March



/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
///
/// Adding a `RelativeOffset` to one yields a `Moment`, which stays a date
/// unless the offset carries a time of day.
#[derive(Eq, Clone, Copy)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*, with microsecond precision.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    microsecond: i32,
}

/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use datedelta::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        YMD { year, month, day }
            .to_days_since_epoch()
            .map(Self::from_days_since_1970)
    }

    /// Creates a new local date from numeric day, month, and year values,
    /// in that order.
    ///
    /// ```rust
    /// use datedelta::{LocalDate, Month};
    ///
    /// assert_eq!(LocalDate::dmy(16, 10, 1995), LocalDate::ymd(1995, Month::October, 16));
    /// assert!(LocalDate::dmy(31, 4, 1995).is_err());
    /// ```
    pub fn dmy(day: i8, month: i8, year: i64) -> Result<Self, Error> {
        Self::ymd(year, Month::from_one(month)?, day)
    }

    /// Creates a new local date from numeric month, day, and year values,
    /// in that order.
    pub fn mdy(month: i8, day: i8, year: i64) -> Result<Self, Error> {
        Self::ymd(year, Month::from_one(month)?, day)
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use datedelta::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2015, 0x100).unwrap();
    /// assert_eq!(date.year(), 2015);
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    /// ```
    ///
    /// Remember that on leap years, the number of days in a year changes:
    ///
    /// ```rust
    /// use datedelta::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2016, 268).unwrap();
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 24);  // not the 25th!
    ///
    /// assert!(LocalDate::yd(2015, 366).is_err());
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        if yearday.is_within(1 .. i64::from(Year(year).day_count()) + 1) {
            let jan_1 = YMD { year, month: January, day: 1 };
            Ok(Self::from_days_since_1970(jan_1.days_since_1970() + yearday - 1))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Computes a LocalDate - year, month, day, weekday, and yearday -
    /// given the number of days that have passed since the 1st of March,
    /// 2000.
    ///
    /// This is used by all the other constructor functions.
    fn from_days_since_epoch(days: i64) -> Self {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after.
        //
        // This calculation works by finding the number of 400-year,
        // 100-year, and 4-year cycles, then constantly subtracting the
        // number of leftover days.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        // Calculate the numbers of 100-year cycles, 4-year cycles, and
        // leftover years, continually reducing the number of days left to
        // think about.
        let num_100y_cycles = cmp::min(remainder / DAYS_IN_100Y, 3);
        remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

        let mut years = cmp::min(remainder / 365, 3);
        remainder -= years * 365;  // remainder is now days left in this year

        // Leap year calculation goes thusly:
        //
        // 1. If the year is a multiple of 400, it’s a leap year.
        // 2. Else, if the year is a multiple of 100, it’s *not* a leap year.
        // 3. Else, if the year is a multiple of 4, it’s a leap year again!
        //
        // We already have the values for the numbers of multiples at this
        // point, and it’s safe to re-use them.
        let days_this_year =
            if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                      else { 365 };

        // Find out which number day of the year it is.
        // The 306 here refers to the number of days in a year excluding
        // January and February (which are excluded because of the EPOCH)
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;  // wrap around for January and February
        }

        // Turn all those cycles into an actual number of years.
        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // Work out the month and number of days into the month by scanning
        // the time triangle, finding the month that has the correct number
        // of days elapsed at the end of it.
        // (it’s “11 - index” below because the triangle goes backwards)
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None => (0, remainder),  // No month found? Then it’s February.
        };

        // Need to add 2 to the month in order to compensate for the EPOCH
        // being in March.
        month += 2;

        if month >= 12 {
            years += 1;   // wrap around for January and February
            month -= 12;  // (yes, again)
        }

        // Finally, adjust the day numbers for human reasons: the first day
        // of the month is the 1st, rather than the 0th, and the year needs
        // to be adjusted relative to the EPOCH.
        Self {
            yearday: (day_of_year + 1) as i16,
            weekday: days_to_weekday(days),
            ymd: YMD {
                year:  years + 2000,
                month: MONTHS[month],
                day:   (month_days + 1) as i8,
            },
        }
    }

    /// Computes a LocalDate given the number of days that have passed
    /// since the 1st of January, 1970.
    pub(crate) fn from_days_since_1970(days: i64) -> Self {
        Self::from_days_since_epoch(days - EPOCH_DIFFERENCE)
    }

    /// Returns the number of days that have passed since the 1st of
    /// January, 1970. Dates before then give a negative number.
    pub(crate) fn days_since_1970(&self) -> i64 {
        self.ymd.days_since_1970()
    }

    /// Returns the date the given number of days after this one, or
    /// before it if the number is negative.
    ///
    /// ```rust
    /// use datedelta::{LocalDate, Month};
    ///
    /// let date = LocalDate::ymd(1996, Month::February, 25).unwrap();
    /// assert_eq!(date.add_days(10), LocalDate::ymd(1996, Month::March, 6).unwrap());
    /// assert_eq!(date.add_days(-56), LocalDate::ymd(1995, Month::December, 31).unwrap());
    /// ```
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_days_since_1970(self.days_since_1970() + days)
    }

    /// Returns the year-month pair this date falls in.
    pub fn year_month(&self) -> YearMonth {
        Year(self.ymd.year).month(self.ymd.month)
    }

    /// Returns the date-time at midnight at the start of this date.
    pub fn midnight(&self) -> LocalDateTime {
        LocalDateTime::new(*self, LocalTime::midnight())
    }

    /// Extends this date into a date-time on the given hour, with the
    /// minute and second set to zero.
    pub fn at_hour(&self, hour: i8) -> Result<LocalDateTime, Error> {
        self.at_hms(hour, 0, 0)
    }

    /// Extends this date into a date-time on the given hour and minute,
    /// with the second set to zero.
    pub fn at_hm(&self, hour: i8, minute: i8) -> Result<LocalDateTime, Error> {
        self.at_hms(hour, minute, 0)
    }

    /// Extends this date into a date-time at the given hour, minute, and
    /// second.
    ///
    /// ```rust
    /// use datedelta::{LocalDate, Month, TimePiece};
    ///
    /// let date = LocalDate::ymd(1995, Month::October, 16).unwrap();
    /// let datetime = date.at_hms(23, 14, 10).unwrap();
    /// assert_eq!(datetime.date(), date);
    /// assert_eq!(datetime.minute(), 14);
    ///
    /// assert!(date.at_hour(24).is_err());
    /// ```
    pub fn at_hms(&self, hour: i8, minute: i8, second: i8) -> Result<LocalDateTime, Error> {
        LocalTime::hms(hour, minute, second)
            .map(|time| LocalDateTime::new(*self, time))
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self.iso())
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.iso_format(f)
    }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}


impl LocalTime {

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight, and sets the
    /// microsecond of the second.
    pub fn from_seconds_and_microseconds_since_midnight(seconds: i64, microsecond_of_second: i32) -> Self {
        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            microsecond: microsecond_of_second,
        }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, microsecond: 0 }
    }

    /// Creates a new timestamp instance with the given hour and minute
    /// fields. The second and microsecond fields are set to 0.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::hms_us(hour, minute, 0, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields. The microsecond field is set to 0.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_us(hour, minute, second, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and microsecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms_us(hour: i8, minute: i8, second: i8, microsecond: i32) -> Result<Self, Error> {
        if hour.is_within(0..24)   && minute.is_within(0..60)
        && second.is_within(0..60) && microsecond.is_within(0..1_000_000)
        {
            Ok(Self { hour, minute, second, microsecond })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring microseconds.
    pub fn to_seconds(self) -> i64 {
        i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    // The setters below are only used after their arguments have been
    // range-checked.

    pub(crate) fn with_hour(self, hour: i8) -> Self {
        Self { hour, ..self }
    }

    pub(crate) fn with_minute(self, minute: i8) -> Self {
        Self { minute, ..self }
    }

    pub(crate) fn with_second(self, second: i8) -> Self {
        Self { second, ..self }
    }

    pub(crate) fn with_microsecond(self, microsecond: i32) -> Self {
        Self { microsecond, ..self }
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn microsecond(&self) -> i32 { self.microsecond }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self.iso())
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.iso_format(f)
    }
}


impl LocalDateTime {

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, setting the
    /// number of microseconds to 0.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        Self::at_us(seconds_since_1970_epoch, 0)
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, and the
    /// microsecond of that second.
    pub fn at_us(seconds_since_1970_epoch: i64, microsecond_of_second: i32) -> Self {

        // Just split the input value into days and seconds, and let
        // LocalDate and LocalTime do all the hard work.
        let (days, secs) = split_cycles(seconds_since_1970_epoch, SECONDS_IN_DAY);

        Self {
            date: LocalDate::from_days_since_1970(days),
            time: LocalTime::from_seconds_and_microseconds_since_midnight(secs, microsecond_of_second),
        }
    }

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self {
            date,
            time,
        }
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Creates a new date-time stamp set to the current time.
    #[cfg_attr(target_os = "redox", allow(unused_unsafe))]
    pub fn now() -> Self {
        let (s, us) = unsafe { sys_time() };
        Self::at_us(s, us)
    }

    /// Returns the number of seconds since **midnight, 1st January,
    /// 1970**, along with the microsecond of that second, as a duration.
    pub fn to_duration_since_1970(&self) -> Duration {
        let seconds = self.date.days_since_1970() * SECONDS_IN_DAY + self.time.to_seconds();
        Duration::of_us(seconds, i64::from(self.time.microsecond))
    }

    fn from_duration_since_1970(duration: Duration) -> Self {
        let (seconds, microseconds) = duration.lengths();
        Self::at_us(seconds, microseconds)
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn yearday(&self) -> i16 { self.date.yearday }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn microsecond(&self) -> i32 { self.time.microsecond }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self.iso())
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.iso_format(f)
    }
}

impl Add<Duration> for LocalDateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        Self::from_duration_since_1970(self.to_duration_since_1970() + duration)
    }
}

impl Sub<Duration> for LocalDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self::from_duration_since_1970(self.to_duration_since_1970() - duration)
    }
}


/// A **YMD** is an implementation detail of `LocalDate`. It provides
/// helper methods relating to the construction of `LocalDate` instances.
///
/// The main difference is that while all `LocalDate` values get checked
/// for validity before they are used, there is no such check for `YMD`.
/// The interface to `LocalDate` ensures that it should be impossible to
/// create an instance of the 74th of March, for example, but you’re
/// free to create such an instance of `YMD`. For this reason, it is not
/// exposed to implementors of this library.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970. Returns the number of days if this datestamp is
    /// valid; an error otherwise.
    fn to_days_since_epoch(&self) -> Result<i64, Error> {
        if self.is_valid(Year(self.year).is_leap_year()) {
            Ok(self.days_since_1970())
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970, without checking whether the day exists.
    fn days_since_1970(&self) -> i64 {
        let years = self.year - 2000;
        let (leap_days_elapsed, is_leap_year) = Year(self.year).leap_year_calculations();

        // Work out the number of days from the start of 1970 to now,
        // which is a multiple of the number of years...
        years * 365

            // Plus the number of days between the start of 2000 and the
            // start of 1970, to make up the difference because our
            // dates start at 2000 and day counts start at 1970...
            + 10958

            // Plus the number of leap years that have elapsed between
            // now and the start of 2000...
            + leap_days_elapsed

            // Plus the number of days in all the months leading up to
            // the current month...
            + i64::from(self.month.days_before_start())

            // Plus an extra leap day for *this* year...
            + if is_leap_year && self.month >= March { 1 } else { 0 }

            // Plus the number of days in the month so far! (Days are
            // 1-indexed, so we make them 0-indexed here)
            + i64::from(self.day - 1)
    }

    /// Returns whether this datestamp is valid, which basically means
    /// whether the day is in the range allowed by the month.
    fn is_valid(&self, is_leap_year: bool) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(is_leap_year)
    }
}

/// Computes the weekday, given the number of days that have passed
/// since the EPOCH.
fn days_to_weekday(days: i64) -> Weekday {
    // March 1st, 2000 was a Wednesday, so add 3 to the number of days.
    WEEKDAYS[(days + 3).rem_euclid(7) as usize]
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "datetime field out of range")
    }
}

impl ErrorTrait for Error {
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

pub(crate) static MONTHS: &[Month] = &[
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    pub(crate) fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use datedelta::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1..13) {
            Ok(MONTHS[month as usize - 1])
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use datedelta::Month;
    /// assert_eq!(Month::from_zero(5), Ok(Month::June));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        if month.is_within(0..12) {
            Ok(MONTHS[month as usize])
        }
        else {
            Err(Error::OutOfRange)
        }
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

static WEEKDAYS: &[Weekday] = &[
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];

// Sunday is Day 0. As you can’t compare weekdays, this is only visible
// through `from_zero`. There’s no real standard as to whether Sunday
// should come before Monday, or the other way around, so weekdays have no
// Ord instance; the field is ignored when comparing LocalDates.

impl Weekday {

    /// Returns the ISO-8601 number of this weekday, with Monday as Day 1
    /// and Sunday as Day 7.
    pub fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Returns the two-letter abbreviation used when rendering weekday
    /// offsets.
    pub fn short_name(self) -> &'static str {
        match self {
            Sunday   => "SU",  Monday    => "MO",
            Tuesday  => "TU",  Wednesday => "WE",
            Thursday => "TH",  Friday    => "FR",
            Saturday => "SA",
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use datedelta::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(0..7) {
            Ok(WEEKDAYS[weekday as usize])
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Return the weekday based on a number, with Monday as Day 1 and
    /// Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        match weekday {
            7      => Ok(Sunday),
            1..=6  => Ok(WEEKDAYS[weekday as usize]),
            _      => Err(Error::OutOfRange),
        }
    }
}


/// Misc tests that don’t seem to fit anywhere.
#[cfg(test)]
mod test {
    pub(crate) use super::{LocalDateTime, LocalDate, LocalTime, Month, Weekday};
    use super::YMD;
    use crate::cal::DatePiece;


    #[test]
    fn some_leap_years() {
        for year in [2004,2008,2012,2016].iter() {
            assert!(LocalDate::ymd(*year, Month::February, 29).is_ok());
            assert!(LocalDate::ymd(*year + 1, Month::February, 29).is_err());
        }
        assert!(LocalDate::ymd(1600,Month::February,29).is_ok());
        assert!(LocalDate::ymd(1601,Month::February,29).is_err());
        assert!(LocalDate::ymd(1602,Month::February,29).is_err());
    }

    #[test]
    fn new() {
        for year in 1..3000 {
            assert!(LocalDate::dmy(32,  1, year).is_err()); assert!(LocalDate::dmy(30,  2, year).is_err()); assert!(LocalDate::dmy(32,  3, year).is_err());
            assert!(LocalDate::dmy(31,  4, year).is_err()); assert!(LocalDate::dmy(32,  5, year).is_err()); assert!(LocalDate::dmy(31,  6, year).is_err());
            assert!(LocalDate::dmy(32,  7, year).is_err()); assert!(LocalDate::dmy(32,  8, year).is_err()); assert!(LocalDate::dmy(31,  9, year).is_err());
            assert!(LocalDate::dmy(32, 10, year).is_err()); assert!(LocalDate::dmy(31, 11, year).is_err()); assert!(LocalDate::dmy(32, 12, year).is_err());
        }
    }

    #[test]
    fn to_from_days_since_1970() {
        for date in  vec![
            LocalDate::dmy( 1,  1, 1970).unwrap(),
            LocalDate::dmy( 1,  1,    1).unwrap(),
            LocalDate::dmy( 1,  1, 1971).unwrap(),
            LocalDate::dmy( 1,  1, 1973).unwrap(),
            LocalDate::dmy( 1,  1, 1977).unwrap(),
            LocalDate::dmy(10, 11, 1989).unwrap(),
            LocalDate::dmy( 8,  7, 1990).unwrap(),
            LocalDate::dmy(13,  7, 2014).unwrap(),
            LocalDate::dmy( 3,  2, 2001).unwrap(),
            LocalDate::dmy(29,  2, 2000).unwrap(),
            LocalDate::dmy(31, 12, 2100).unwrap(),
        ]{
            assert_eq!(date, LocalDate::from_days_since_1970(date.days_since_1970()));
        }
    }

    #[test]
    fn the_unix_epoch_is_day_zero() {
        let date = LocalDate::ymd(1970, Month::January, 1).unwrap();
        assert_eq!(date.days_since_1970(), 0);
        assert_eq!(date.weekday(), Weekday::Thursday);
    }

    #[test]
    fn clamped_day_on_short_month() {
        let ym = LocalDate::ymd(1996, Month::February, 1).unwrap().year_month();
        assert_eq!(ym.clamped_day(31), LocalDate::ymd(1996, Month::February, 29).unwrap());
        assert_eq!(ym.clamped_day(0), LocalDate::ymd(1996, Month::February, 1).unwrap());
    }

    #[test]
    fn unchecked_days_agree_with_checked() {
        let ymd = YMD { year: 2018, month: Month::March, day: 29 };
        assert_eq!(ymd.to_days_since_epoch(), Ok(ymd.days_since_1970()));
    }

    #[test]
    fn yearday_out_of_range() {
        assert!(LocalDate::yd(2016, 366).is_ok());
        assert!(LocalDate::yd(2017, 366).is_err());
        assert!(LocalDate::yd(2017, 0).is_err());
    }

    #[test]
    fn weekday_numbers() {
        assert_eq!(Weekday::from_one(7), Ok(Weekday::Sunday));
        assert_eq!(Weekday::from_one(1), Ok(Weekday::Monday));
        assert!(Weekday::from_one(0).is_err());
        assert!(Weekday::from_one(8).is_err());
    }

    #[test]
    fn time_rejects_hour_twenty_four() {
        assert!(LocalTime::hms(24, 0, 0).is_err());
        assert!(LocalTime::hms_us(23, 59, 59, 999_999).is_ok());
        assert!(LocalTime::hms_us(23, 59, 59, 1_000_000).is_err());
    }

    mod debug {
        use super::*;

        #[test]
        fn recently() {
            let date = LocalDate::ymd(1600, Month::February, 28).unwrap();
            let debugged = format!("{:?}", date);

            assert_eq!(debugged, "LocalDate(1600-02-28)");
        }

        #[test]
        fn just_then() {
            let date = LocalDate::ymd(-753, Month::December, 1).unwrap();
            let debugged = format!("{:?}", date);

            assert_eq!(debugged, "LocalDate(-0753-12-01)");
        }

        #[test]
        fn far_far_future() {
            let date = LocalDate::ymd(10601, Month::January, 31).unwrap();
            let debugged = format!("{:?}", date);

            assert_eq!(debugged, "LocalDate(+10601-01-31)");
        }

        #[test]
        fn midday() {
            let time = LocalTime::hms(12, 0, 0).unwrap();
            let debugged = format!("{:?}", time);

            assert_eq!(debugged, "LocalTime(12:00:00.000000)");
        }

        #[test]
        fn ascending() {
            let then = LocalDateTime::new(
                        LocalDate::ymd(2009, Month::February, 13).unwrap(),
                        LocalTime::hms(23, 31, 30).unwrap());
            let debugged = format!("{:?}", then);

            assert_eq!(debugged, "LocalDateTime(2009-02-13T23:31:30.000000)");
        }
    }
}
