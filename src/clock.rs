//! Sources of the current date and time.

use crate::cal::{LocalDate, LocalDateTime};


/// Something that can say what the time is now.
///
/// Ranges that leave out their start begin from the clock’s current
/// time, and every range asks a clock which way its step goes. Passing a
/// `FixedClock` makes both of those repeatable.
pub trait Clock {

    /// Returns the current date and time.
    fn now(&self) -> LocalDateTime;

    /// Returns the current date.
    fn today(&self) -> LocalDate {
        self.now().date()
    }
}

impl<'a, C: Clock + ?Sized> Clock for &'a C {
    fn now(&self) -> LocalDateTime {
        (**self).now()
    }
}


/// The operating system’s wall clock.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> LocalDateTime {
        LocalDateTime::now()
    }
}


/// A clock that is stuck at one instant.
///
/// ```rust
/// use datedelta::{Clock, FixedClock, LocalDate, Month};
///
/// let noon = LocalDate::ymd(1994, Month::March, 27).unwrap().at_hour(12).unwrap();
/// let clock = FixedClock(noon);
///
/// assert_eq!(clock.now(), noon);
/// assert_eq!(clock.today(), LocalDate::ymd(1994, Month::March, 27).unwrap());
/// ```
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct FixedClock(pub LocalDateTime);

impl Clock for FixedClock {
    fn now(&self) -> LocalDateTime {
        self.0
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::DatePiece;

    #[test]
    fn system_clock_is_recent() {
        assert!(SystemClock.today().year() >= 2020);
    }

    #[test]
    fn references_are_clocks() {
        fn today_from<C: Clock>(clock: C) -> LocalDate {
            clock.today()
        }

        let clock = FixedClock(LocalDateTime::at(0));
        assert_eq!(today_from(&clock), LocalDate::from_days_since_1970(0));
    }
}
