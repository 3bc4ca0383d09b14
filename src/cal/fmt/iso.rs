use std::fmt;

use crate::cal::{LocalDate, LocalTime, LocalDateTime, DatePiece, TimePiece};
use crate::util::RangeExt;


/// Values that can be rendered in their ISO-8601 extended form.
pub trait ISO: Sized {

    /// Writes this value in ISO-8601 form to the formatter.
    fn iso_format(&self, f: &mut fmt::Formatter) -> fmt::Result;

    /// Returns a wrapper that displays this value in ISO-8601 form.
    fn iso(&self) -> ISOString<Self> {
        ISOString(self)
    }
}

/// The `Display` adaptor returned by `ISO::iso`.
#[derive(Debug)]
pub struct ISOString<'a, T: 'a>(&'a T);

impl<'a, T: ISO> fmt::Display for ISOString<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.iso_format(f)
    }
}

impl ISO for LocalDate {
    fn iso_format(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.year();
        if year.is_within(0 .. 10000) {
            write!(f, "{:04}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
        else {
            write!(f, "{:+05}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
    }
}

impl ISO for LocalTime {
    fn iso_format(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}.{:06}", self.hour(), self.minute(), self.second(), self.microsecond())
    }
}

impl ISO for LocalDateTime {
    fn iso_format(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date().iso(), self.time().iso())
    }
}


#[cfg(test)]
mod test {
    use super::ISO;
    use crate::cal::{LocalDate, LocalTime, LocalDateTime, Month};

    #[test]
    fn date() {
        let date = LocalDate::ymd(1995, Month::October, 16).unwrap();
        assert_eq!(date.iso().to_string(), "1995-10-16");
    }

    #[test]
    fn year_ten_thousand_gets_a_sign() {
        let date = LocalDate::ymd(10000, Month::January, 1).unwrap();
        assert_eq!(date.iso().to_string(), "+10000-01-01");
    }

    #[test]
    fn datetime_with_microseconds() {
        let then = LocalDateTime::new(
                    LocalDate::ymd(1995, Month::October, 16).unwrap(),
                    LocalTime::hms_us(1, 2, 3, 25).unwrap());
        assert_eq!(then.iso().to_string(), "1995-10-16T01:02:03.000025");
    }
}
