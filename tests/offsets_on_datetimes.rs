use datedelta::{LocalDate, LocalDateTime, LocalTime, Month};
use datedelta::relative::{days, hours, minutes, seconds, microseconds};


fn datetime(day: i8, hour: i8, minute: i8, second: i8, microsecond: i32) -> LocalDateTime {
    let date = LocalDate::ymd(1995, Month::October, day).unwrap();
    LocalDateTime::new(date, LocalTime::hms_us(hour, minute, second, microsecond).unwrap())
}

fn oct_16() -> LocalDateTime {
    LocalDate::ymd(1995, Month::October, 16).unwrap().at_hms(1, 2, 3).unwrap()
}


#[test]
fn adding_microseconds() {
    assert_eq!(oct_16() + microseconds(25),        datetime(16, 1, 2, 3, 25));
    assert_eq!(oct_16() - microseconds(600_000),   datetime(16, 1, 2, 2, 400_000));
    assert_eq!(oct_16() + microseconds(1_000_000), datetime(16, 1, 2, 4, 0));
}

#[test]
fn adding_seconds() {
    assert_eq!(oct_16() + seconds(25), datetime(16, 1, 2, 28, 0));
    assert_eq!(oct_16() + seconds(65), datetime(16, 1, 3,  8, 0));
    assert_eq!(oct_16() - seconds(50), datetime(16, 1, 1, 13, 0));
}

#[test]
fn half_a_second() {
    assert_eq!(oct_16() + seconds(0.5).unwrap(), datetime(16, 1, 2, 3, 500_000));
}

#[test]
fn adding_minutes() {
    assert_eq!(oct_16() + minutes(13), datetime(16, 1, 15, 3, 0));
    assert_eq!(oct_16() + minutes(65), datetime(16, 2,  7, 3, 0));
    assert_eq!(oct_16() - minutes(20), datetime(16, 0, 42, 3, 0));
}

#[test]
fn sixth_of_a_minute() {
    assert_eq!(oct_16() + minutes(1.0 / 6.0).unwrap(), datetime(16, 1, 2, 13, 0));
}

#[test]
fn adding_hours() {
    assert_eq!(oct_16() + hours(2),  datetime(16,  3, 2, 3, 0));
    assert_eq!(oct_16() + hours(30), datetime(17,  7, 2, 3, 0));
    assert_eq!(oct_16() - hours(13), datetime(15, 12, 2, 3, 0));
}

#[test]
fn quarter_of_an_hour() {
    assert_eq!(oct_16() + hours(0.25).unwrap(), datetime(16, 1, 17, 3, 0));
}

#[test]
fn half_a_day_on_a_datetime() {
    assert_eq!(oct_16() + days(0.5).unwrap(), datetime(16, 13, 2, 3, 0));
}

#[test]
fn mixed_units() {
    assert_eq!(oct_16() + hours(3) + minutes(5) - seconds(25), datetime(16, 4, 6, 38, 0));
    assert_eq!(oct_16() + (hours(3) + minutes(5) - seconds(25)), datetime(16, 4, 6, 38, 0));
}

#[test]
fn add_assign() {
    let mut local = oct_16();
    local += hours(3) + minutes(5) - seconds(25);
    assert_eq!(local, datetime(16, 4, 6, 38, 0));
}

#[test]
fn across_midnight() {
    let late = datetime(16, 23, 59, 59, 999_999);
    assert_eq!(late + microseconds(1), datetime(17, 0, 0, 0, 0));
    assert_eq!(datetime(17, 0, 0, 0, 0) - microseconds(1), late);
}
