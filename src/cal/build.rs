//! Building dates out of three numbers given in a chosen order.
//!
//! A `DateOrder` says which of the three numbers is the day, the month,
//! and the year. The numbers can be supplied all at once with
//! `DateOrder::date`, or one at a time through a `PartialDate`, which
//! reports when it has collected enough to finish:
//!
//! ```rust
//! use datedelta::build::{Build, DateOrder};
//! use datedelta::{LocalDate, Month};
//!
//! let partial = DateOrder::DMY.begin(22).push(10);
//! let date = match partial {
//!     Build::Partial(partial) => partial.push(2000),
//!     Build::Complete(_)      => unreachable!(),
//! };
//!
//! assert_eq!(date.complete(), Some(LocalDate::ymd(2000, Month::October, 22)));
//! ```

use std::fmt;

use crate::cal::{LocalDate, Month, Error};
use crate::util::RangeExt;


/// The order in which the day, month, and year of a date are written.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum DateOrder {
    DMY,
    MDY,
    YMD,
    YDM,
}

impl DateOrder {

    /// Builds a date from three numbers given in this order.
    ///
    /// ```rust
    /// use datedelta::build::DateOrder;
    /// use datedelta::{LocalDate, Month};
    ///
    /// assert_eq!(DateOrder::MDY.date(9, 23, 1996), LocalDate::ymd(1996, Month::September, 23));
    /// assert!(DateOrder::DMY.date(9, 23, 1996).is_err());
    /// ```
    pub fn date(self, first: i64, second: i64, third: i64) -> Result<LocalDate, Error> {
        let (year, month, day) = match self {
            DateOrder::DMY => (third,  second, first),
            DateOrder::MDY => (third,  first,  second),
            DateOrder::YMD => (first,  second, third),
            DateOrder::YDM => (first,  third,  second),
        };

        if !month.is_within(1..13) || !day.is_within(1..32) {
            return Err(Error::OutOfRange);
        }

        LocalDate::ymd(year, Month::from_one(month as i8)?, day as i8)
    }

    /// Starts building a date in this order, beginning with its first
    /// number.
    pub fn begin(self, first: i64) -> PartialDate {
        PartialDate { order: self, values: Collected::One(first) }
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}


/// A date that has had one or two of its three numbers supplied.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct PartialDate {
    order: DateOrder,
    values: Collected,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum Collected {
    One(i64),
    Two(i64, i64),
}

/// The result of pushing a number into a `PartialDate`: either another
/// partial date, or, once the third number arrives, the finished date.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Build {
    Partial(PartialDate),
    Complete(Result<LocalDate, Error>),
}

impl PartialDate {

    /// Returns the order the numbers are being collected in.
    pub fn order(&self) -> DateOrder {
        self.order
    }

    /// Supplies the next number.
    pub fn push(self, value: i64) -> Build {
        match self.values {
            Collected::One(first) => {
                Build::Partial(Self { values: Collected::Two(first, value), ..self })
            }
            Collected::Two(first, second) => {
                Build::Complete(self.order.date(first, second, value))
            }
        }
    }
}

impl Build {

    /// Supplies the next number, if the date is still being built. A
    /// completed build ignores any further numbers.
    pub fn push(self, value: i64) -> Self {
        match self {
            Build::Partial(partial) => partial.push(value),
            complete                => complete,
        }
    }

    /// Returns the finished date, or `None` if more numbers are needed.
    pub fn complete(self) -> Option<Result<LocalDate, Error>> {
        match self {
            Build::Partial(_)       => None,
            Build::Complete(result) => Some(result),
        }
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.values {
            Collected::One(first)         => write!(f, "{}", first),
            Collected::Two(first, second) => write!(f, "{}/{}", first, second),
        }
    }
}

impl fmt::Debug for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PartialDate({})", self)
    }
}
