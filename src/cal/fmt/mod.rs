//! Datetime-to-string routines.

mod iso;

pub use self::iso::{ISO, ISOString};
