//! A date or a date-time, decided at run time.

use std::cmp::Ordering;
use std::fmt;

use crate::cal::{DatePiece, LocalDate, LocalDateTime, Month, Weekday};
use crate::cal::fmt::ISO;


/// A **moment** is either a `LocalDate` or a `LocalDateTime`.
///
/// It is what you get back from adding a `RelativeOffset` to a date: the
/// result stays a date unless the offset carries a time of day, and the
/// variant records which of the two it is. A date never silently turns
/// into a date-time or back.
///
/// Moments are ordered chronologically, with a date sorting as its
/// midnight. A date and the date-time at its midnight are different
/// values, so the date sorts first.
#[derive(PartialEq, Eq, Clone, Copy)]
pub enum Moment {
    Date(LocalDate),
    DateTime(LocalDateTime),
}

impl Moment {

    /// Returns whether this moment is a date without a time of day.
    pub fn is_date(&self) -> bool {
        match *self {
            Moment::Date(_)     => true,
            Moment::DateTime(_) => false,
        }
    }

    /// Returns the date, if this moment has no time of day.
    pub fn as_date(&self) -> Option<LocalDate> {
        match *self {
            Moment::Date(date)  => Some(date),
            Moment::DateTime(_) => None,
        }
    }

    /// Returns the date-time, if this moment has a time of day.
    pub fn as_datetime(&self) -> Option<LocalDateTime> {
        match *self {
            Moment::Date(_)         => None,
            Moment::DateTime(local) => Some(local),
        }
    }

    /// Returns the date portion of this moment.
    pub fn date(&self) -> LocalDate {
        match *self {
            Moment::Date(date)      => date,
            Moment::DateTime(local) => local.date(),
        }
    }

    /// Returns this moment as a date-time, treating a date as its
    /// midnight.
    pub fn to_datetime(&self) -> LocalDateTime {
        match *self {
            Moment::Date(date)      => date.midnight(),
            Moment::DateTime(local) => local,
        }
    }
}

impl From<LocalDate> for Moment {
    fn from(date: LocalDate) -> Self {
        Moment::Date(date)
    }
}

impl From<LocalDateTime> for Moment {
    fn from(local: LocalDateTime) -> Self {
        Moment::DateTime(local)
    }
}

impl DatePiece for Moment {
    fn year(&self) -> i64 { self.date().year() }
    fn month(&self) -> Month { self.date().month() }
    fn day(&self) -> i8 { self.date().day() }
    fn yearday(&self) -> i16 { self.date().yearday() }
    fn weekday(&self) -> Weekday { self.date().weekday() }
}

impl PartialOrd for Moment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Moment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_datetime().cmp(&other.to_datetime())
            .then_with(|| other.is_date().cmp(&self.is_date()))
    }
}

impl PartialEq<LocalDate> for Moment {
    fn eq(&self, other: &LocalDate) -> bool {
        self.as_date() == Some(*other)
    }
}

impl PartialEq<LocalDateTime> for Moment {
    fn eq(&self, other: &LocalDateTime) -> bool {
        self.as_datetime() == Some(*other)
    }
}

impl PartialEq<Moment> for LocalDate {
    fn eq(&self, other: &Moment) -> bool {
        other == self
    }
}

impl PartialEq<Moment> for LocalDateTime {
    fn eq(&self, other: &Moment) -> bool {
        other == self
    }
}

impl fmt::Debug for Moment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Moment::Date(ref date)      => fmt::Debug::fmt(date, f),
            Moment::DateTime(ref local) => fmt::Debug::fmt(local, f),
        }
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Moment::Date(ref date)      => date.iso_format(f),
            Moment::DateTime(ref local) => local.iso_format(f),
        }
    }
}


#[cfg(test)]
mod test {
    use super::Moment;
    use crate::cal::{LocalDate, LocalTime, LocalDateTime, Month};

    fn oct_16() -> LocalDate {
        LocalDate::ymd(1995, Month::October, 16).unwrap()
    }

    #[test]
    fn kinds() {
        let date = Moment::from(oct_16());
        assert!(date.is_date());
        assert_eq!(date.as_date(), Some(oct_16()));
        assert_eq!(date.as_datetime(), None);

        let local = Moment::from(oct_16().midnight());
        assert!(!local.is_date());
        assert_eq!(local.date(), oct_16());
    }

    #[test]
    fn a_date_is_not_its_midnight() {
        assert_ne!(Moment::from(oct_16()), Moment::from(oct_16().midnight()));
        assert!(Moment::from(oct_16()) < Moment::from(oct_16().midnight()));
    }

    #[test]
    fn chronological_across_kinds() {
        let late_evening = LocalDateTime::new(oct_16(), LocalTime::hms(23, 0, 0).unwrap());
        let next_day = LocalDate::ymd(1995, Month::October, 17).unwrap();
        assert!(Moment::from(late_evening) < Moment::from(next_day));
    }

    #[test]
    fn compares_with_plain_values() {
        assert_eq!(Moment::from(oct_16()), oct_16());
        assert_eq!(oct_16(), Moment::from(oct_16()));
        assert!(Moment::from(oct_16().midnight()) != oct_16());
    }

    #[test]
    fn display() {
        assert_eq!(Moment::from(oct_16()).to_string(), "1995-10-16");
        assert_eq!(Moment::from(oct_16().midnight()).to_string(), "1995-10-16T00:00:00.000000");
    }

    #[test]
    fn debug_shows_the_inner_value() {
        assert_eq!(format!("{:?}", Moment::from(oct_16())), "LocalDate(1995-10-16)");
    }
}
