#![crate_name = "datedelta"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Calendar-aware date arithmetic, with relative offsets that know about
//! month lengths and leap years, and lazy ranges of dates.
//!
//! # Examples
//!
//! ```
//! use datedelta::{LocalDate, Month, DateRange};
//! use datedelta::relative::{days, months, years, MO};
//!
//! let date = LocalDate::ymd(2018, Month::March, 29).unwrap();
//!
//! // One month after the 31st of January is the end of February.
//! let jan_31 = LocalDate::ymd(2019, Month::January, 31).unwrap();
//! assert_eq!(jan_31 + months(1), LocalDate::ymd(2019, Month::February, 28).unwrap());
//!
//! // Offsets add up before being applied.
//! assert_eq!(date + (years(1) - days(2)), LocalDate::ymd(2019, Month::March, 27).unwrap());
//!
//! // The Monday after.
//! assert_eq!(date + MO, LocalDate::ymd(2018, Month::April, 2).unwrap());
//!
//! // Every other day, going backwards.
//! let stop = LocalDate::ymd(2018, Month::March, 24).unwrap();
//! let range = DateRange::new(date, stop, days(-2)).unwrap();
//! assert_eq!(range.count(), 3);
//! ```


/// Logs at trace level, if logging is turned on.
macro_rules! log_trace {
    ($($args:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($args)+);
    };
}

/// Logs at debug level, if logging is turned on.
macro_rules! log_debug {
    ($($args:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($args)+);
    };
}


mod cal;
mod util;
mod system;

pub mod clock;
pub mod duration;
pub mod range;
pub mod relative;

pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::{LocalDate, LocalTime, LocalDateTime, Moment};
pub use crate::cal::{Year, YearMonth, Month, Weekday};
pub use crate::cal::Error;
pub use crate::cal::ISO;
pub use crate::cal::build;

pub use crate::clock::{Clock, SystemClock, FixedClock};
pub use crate::duration::Duration;
pub use crate::range::{DateRange, drange};
pub use crate::relative::RelativeOffset;
