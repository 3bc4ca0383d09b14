use datedelta::{LocalDate, LocalDateTime, LocalTime, Month, Moment};
use datedelta::relative::{self, Error, Replacement};
use datedelta::relative::{year, month, day, hour, minute, second, microsecond, days};


fn oct_16() -> LocalDateTime {
    LocalDate::ymd(1995, Month::October, 16).unwrap().at_hms(1, 2, 3).unwrap()
}

fn datetime(year: i64, month: Month, day: i8, hour: i8, minute: i8, second: i8, microsecond: i32) -> LocalDateTime {
    LocalDateTime::new(LocalDate::ymd(year, month, day).unwrap(),
                       LocalTime::hms_us(hour, minute, second, microsecond).unwrap())
}


#[test]
fn date_fields() {
    assert_eq!(oct_16() + day(5).unwrap(),      datetime(1995, Month::October, 5,  1, 2, 3, 0));
    assert_eq!(oct_16() + month(Month::March),  datetime(1995, Month::March,   16, 1, 2, 3, 0));
    assert_eq!(oct_16() + year(1998),           datetime(1998, Month::October, 16, 1, 2, 3, 0));
}

#[test]
fn time_fields() {
    assert_eq!(oct_16() + microsecond(25).unwrap(), datetime(1995, Month::October, 16,  1,  2,  3, 25));
    assert_eq!(oct_16() + second(55).unwrap(),      datetime(1995, Month::October, 16,  1,  2, 55, 0));
    assert_eq!(oct_16() + minute(56).unwrap(),      datetime(1995, Month::October, 16,  1, 56,  3, 0));
    assert_eq!(oct_16() + hour(22).unwrap(),        datetime(1995, Month::October, 16, 22,  2,  3, 0));
}

#[test]
fn every_field_one_after_another() {
    let result = oct_16() + year(1919) + month(Month::May) + day(4).unwrap()
                          + hour(23).unwrap() + minute(41).unwrap() + second(34).unwrap();
    assert_eq!(result, datetime(1919, Month::May, 4, 23, 41, 34, 0));
}

#[test]
fn every_field_summed() {
    let mut local = oct_16();
    local += year(1919) + month(Month::May) + day(4).unwrap()
           + hour(23).unwrap() + minute(41).unwrap() + second(34).unwrap();
    assert_eq!(local, datetime(1919, Month::May, 4, 23, 41, 34, 0));
}

#[test]
fn month_clamps_the_day() {
    let jan_30 = LocalDate::ymd(1996, Month::January, 30).unwrap();
    assert_eq!(jan_30 + month(Month::February), LocalDate::ymd(1996, Month::February, 29).unwrap());
}

#[test]
fn year_clamps_the_leap_day() {
    let leap_day = LocalDate::ymd(1996, Month::February, 29).unwrap();
    assert_eq!(leap_day + year(1997), LocalDate::ymd(1997, Month::February, 28).unwrap());
}

#[test]
fn replacements_come_after_counts() {
    let date = LocalDate::ymd(1995, Month::October, 16).unwrap();
    assert_eq!(date + (day(1).unwrap() + days(3)), LocalDate::ymd(1995, Month::October, 1).unwrap());
}

#[test]
fn date_setters_keep_dates() {
    let date = LocalDate::ymd(1995, Month::October, 16).unwrap();
    assert!((date + day(1).unwrap()).is_date());
}

#[test]
fn time_setters_make_datetimes() {
    let date = LocalDate::ymd(1995, Month::October, 16).unwrap();
    let result = date + hour(9).unwrap();
    assert_eq!(result, Moment::DateTime(date.at_hour(9).unwrap()));
}

#[test]
fn out_of_range() {
    assert_eq!(day(32), Err(Error::OutOfRange(Replacement::Day(32))));
    assert_eq!(hour(-1), Err(Error::OutOfRange(Replacement::Hour(-1))));
    assert!(relative::yearday(0).is_err());
}

#[test]
fn cannot_be_subtracted() {
    let local = oct_16();
    assert_eq!(local.checked_sub(&year(1990)), Err(Error::NegatedReplacement));
}

#[test]
#[should_panic(expected = "an offset with replacement fields cannot be negated")]
fn subtracting_panics() {
    let _ = oct_16() - month(Month::May);
}
