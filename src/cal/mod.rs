//! Proleptic Gregorian calendar values: dates, times, date-times, and the
//! `Moment` that holds either a date or a date-time.

pub(crate) mod datetime;
pub(crate) mod fmt;
pub(crate) mod moment;
pub mod build;

pub use self::datetime::{LocalDate, LocalTime, LocalDateTime, Year, YearMonth, Weekday, Month, Error};
pub use self::moment::Moment;
pub use self::fmt::ISO;


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year() % 100 }

    /// The year number, relative to the year 2000.
    fn years_from_2000(&self) -> i64 { self.year() - 2000 }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The microsecond of the second, from 0 to 999,999.
    fn microsecond(&self) -> i32;

    /// The millisecond of the second, rounded down.
    fn millisecond(&self) -> i16 { (self.microsecond() / 1000) as i16 }
}
