//! Lengths of time on the timeline.

use std::ops::{Add, Sub, Mul, Neg};

use crate::util::split_cycles;


/// Number of microseconds in one second.
const MICROS_IN_SECOND: i64 = 1_000_000;


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with microsecond precision.
///
/// The microsecond portion is always between 0 and 999,999, so negative
/// durations carry their sign in the seconds portion: minus half a second
/// is stored as −1 seconds plus 500,000 microseconds.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Copy)]
pub struct Duration {
    seconds: i64,
    microseconds: i32,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, microseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, microseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// microseconds long. Microsecond values outside of a single second
    /// get carried into the seconds portion.
    ///
    /// ```rust
    /// use datedelta::Duration;
    ///
    /// assert_eq!(Duration::of_us(1, -250_000), Duration::of_us(0, 750_000));
    /// assert_eq!(Duration::of_us(0, 2_500_000).lengths(), (2, 500_000));
    /// ```
    pub fn of_us(seconds: i64, microseconds: i64) -> Self {
        let (carry, microseconds) = split_cycles(microseconds, MICROS_IN_SECOND);
        Self { seconds: seconds + carry, microseconds: microseconds as i32 }
    }

    /// Create a new duration that’s the given total number of
    /// microseconds long.
    pub fn of_micros(microseconds: i64) -> Self {
        Self::of_us(0, microseconds)
    }

    /// Return the seconds and microseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i32) {
        (self.seconds, self.microseconds)
    }

    // This returns both portions at once instead of having separate
    // seconds() and microseconds() functions, because people could think
    // that microseconds() returns the *total* length in microseconds,
    // rather than just this particular portion.

    /// Returns the entire length of this duration in microseconds.
    pub fn total_micros(&self) -> i64 {
        self.seconds * MICROS_IN_SECOND + i64::from(self.microseconds)
    }

    /// Returns whether this duration is shorter than zero.
    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    /// Returns whether this duration has zero length.
    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.microseconds == 0
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::of_us(self.seconds + rhs.seconds, i64::from(self.microseconds) + i64::from(rhs.microseconds))
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::of_us(self.seconds - rhs.seconds, i64::from(self.microseconds) - i64::from(rhs.microseconds))
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        Self::of_us(self.seconds * amount, i64::from(self.microseconds) * amount)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::of_us(-self.seconds, -i64::from(self.microseconds))
    }
}
