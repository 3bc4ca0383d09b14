//! Misc stuff.

use std::ops::Range;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given range of values.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

// Define RangeExt on *anything* that can be compared, though it’s only
// really ever used for numeric ranges...

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        range.contains(self)
    }
}


/// Split a number of years into a number of year-cycles, and the number
/// of years left over that don’t fit into a cycle. This is also used
/// for day-cycles and second-cycles.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    (number_of_periods.div_euclid(cycle_length), number_of_periods.rem_euclid(cycle_length))
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn within() {
        assert!(5.is_within(0..10));
        assert!(!10.is_within(0..10));
        assert!(!(-1).is_within(0..10));
    }

    #[test]
    fn cycles_positive() {
        assert_eq!(split_cycles(803, 400), (2, 3));
    }

    #[test]
    fn cycles_negative_wrap_around() {
        assert_eq!(split_cycles(-1, 7), (-1, 6));
        assert_eq!(split_cycles(-14, 7), (-2, 0));
    }
}
