use datedelta::{LocalDate, Month, Moment};
use datedelta::relative::{years, months, weeks, days, leapday, yearday, nlyearday};


fn date(day: i8, month: Month, year: i64) -> LocalDate {
    LocalDate::ymd(year, month, day).unwrap()
}

fn oct_5() -> LocalDate {
    date(5, Month::October, 1995)
}


mod days_and_weeks {
    use super::*;

    #[test]
    fn adding_days() {
        assert_eq!(oct_5() + days(5),  date(10, Month::October,   1995));
        assert_eq!(oct_5() - days(10), date(25, Month::September, 1995));
        assert_eq!(oct_5() + days(27), date( 1, Month::November,  1995));
    }

    #[test]
    fn half_a_day_stays_on_the_date() {
        assert_eq!(oct_5() + days(0.5).unwrap(), date(5, Month::October, 1995));
    }

    #[test]
    fn negative_half_a_day_is_the_day_before() {
        assert_eq!(oct_5() + days(-0.5).unwrap(), date(4, Month::October, 1995));
    }

    #[test]
    fn adding_weeks() {
        assert_eq!(oct_5() + weeks(3), date(26, Month::October,   1995));
        assert_eq!(oct_5() - weeks(2), date(21, Month::September, 1995));
        assert_eq!(oct_5() + weeks(7), date(23, Month::November,  1995));
    }

    #[test]
    fn three_sevenths_of_a_week() {
        assert_eq!(oct_5() + weeks(3.0 / 7.0).unwrap(), date(8, Month::October, 1995));
    }

    #[test]
    fn round_trip() {
        for n in -800 .. 800 {
            assert_eq!((oct_5() + days(n)) - days(n), oct_5());
        }
    }
}


mod months_and_years {
    use super::*;

    #[test]
    fn adding_months() {
        assert_eq!(oct_5() + months(2), date(5, Month::December, 1995));
        assert_eq!(oct_5() - months(4), date(5, Month::June,     1995));
        assert_eq!(oct_5() + months(5), date(5, Month::March,    1996));
    }

    #[test]
    fn adding_years() {
        assert_eq!(oct_5() + years(3),  date(5, Month::October, 1998));
        assert_eq!(oct_5() + years(10), date(5, Month::October, 2005));
    }

    #[test]
    fn fractional_years() {
        assert_eq!(oct_5() + years(1.5).unwrap(), date(5, Month::April, 1997));
    }

    #[test]
    fn applied_one_after_another() {
        let result = oct_5() + days(2) + months(10) - years(3);
        assert_eq!(result, date(7, Month::August, 1993));
    }

    #[test]
    fn summed_before_applying() {
        assert_eq!(oct_5() + (days(2) + months(10) - years(3)), date(7, Month::August, 1993));
    }
}


mod month_ends {
    use super::*;

    fn oct_31() -> LocalDate {
        date(31, Month::October, 1995)
    }

    #[test]
    fn shorter_month() {
        assert_eq!(oct_31() + months(1), date(30, Month::November, 1995));
    }

    #[test]
    fn leap_february() {
        assert_eq!(oct_31() + months(4), date(29, Month::February, 1996));
    }

    #[test]
    fn clamping_is_not_undone() {
        assert_eq!(oct_31() + months(4) + years(1), date(28, Month::February, 1997));
    }

    #[test]
    fn clamping_happens_once() {
        assert_eq!(oct_31() + (months(4) + years(1)), date(28, Month::February, 1997));
        assert_eq!(oct_31() + (months(1) + months(1)), date(31, Month::December, 1995));
    }

    #[test]
    fn end_of_january_every_year() {
        for year in 1990 .. 2030 {
            let result = date(31, Month::January, year) + months(1);
            let last_day = if year % 4 == 0 { 29 } else { 28 };
            assert_eq!(result, date(last_day, Month::February, year));
        }
    }
}


mod leap_days_and_yeardays {
    use super::*;

    fn feb_25(year: i64) -> LocalDate {
        date(25, Month::February, year)
    }

    #[test]
    fn leapday_after_days() {
        assert_eq!(feb_25(1996) + days(10) + leapday(), date(7, Month::March, 1996));
    }

    #[test]
    fn leapday_combined_with_days() {
        assert_eq!(feb_25(1996) + (days(10) + leapday()), date(6, Month::March, 1996));
        assert_eq!(feb_25(1996) + (months(1) + leapday()), date(26, Month::March, 1996));
    }

    #[test]
    fn leapday_in_a_common_year() {
        assert_eq!(feb_25(1995) + days(10) + leapday(), date(7, Month::March, 1995));
    }

    #[test]
    fn exact_yearday() {
        assert_eq!(feb_25(1996) + yearday(255).unwrap(), date(11, Month::September, 1996));
        assert_eq!(feb_25(1995) + yearday(255).unwrap(), date(12, Month::September, 1995));
    }

    #[test]
    fn non_leap_yearday() {
        assert_eq!(feb_25(1996) + nlyearday(255).unwrap(), date(12, Month::September, 1996));
        assert_eq!(feb_25(1995) + nlyearday(255).unwrap(), date(12, Month::September, 1995));
    }

    #[test]
    fn yeardays_agree_before_march() {
        assert_eq!(feb_25(1996) + yearday(59).unwrap(), feb_25(1996) + nlyearday(59).unwrap());
    }
}


#[test]
fn results_stay_dates() {
    let result = oct_5() + days(1) + months(1) + years(1) + weeks(1);
    assert_eq!(result, Moment::Date(date(13, Month::November, 1996)));
}
