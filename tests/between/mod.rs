use calperiod::{
    civil::{date, Calendar, Date},
    Period, ToPeriod,
};

use crate::Logger;

fn between(start: Date, end: Date) -> (i32, i32, i32) {
    let p = Period::between(start, end);
    assert_eq!(p.without_date_fields(), Period::ZERO);
    (p.get_years(), p.get_months(), p.get_days())
}

#[test]
fn same_date() {
    let _ = Logger::init();

    assert_eq!(between(date(2010, 1, 1), date(2010, 1, 1)), (0, 0, 0));
    assert_eq!(between(Date::MAX, Date::MAX), (0, 0, 0));
}

#[test]
fn leap_years() {
    let _ = Logger::init();

    let tests = [
        ((2012, 2, 29), (2016, 2, 29), (4, 0, 0)),
        ((2016, 2, 29), (2012, 2, 29), (-4, 0, 0)),
        // January is the month borrowed from.
        ((2012, 2, 29), (2013, 2, 28), (0, 11, 30)),
        // February 2012 is the month given back.
        ((2013, 2, 28), (2012, 2, 29), (0, -11, -28)),
        ((-1, 3, 1), (0, 3, 1), (1, 0, 0)),
        ((2000, 2, 28), (2000, 3, 28), (0, 1, 0)),
    ];
    for ((y1, m1, d1), (y2, m2, d2), want) in tests {
        let (start, end) = (date(y1, m1, d1), date(y2, m2, d2));
        assert_eq!(between(start, end), want, "between({start}, {end})");
    }
}

#[test]
fn month_ends() {
    let _ = Logger::init();

    let tests = [
        ((2024, 1, 31), (2024, 2, 29), (0, 0, 29)),
        ((2024, 2, 29), (2024, 1, 31), (0, 0, -29)),
        ((2023, 12, 31), (2024, 1, 1), (0, 0, 1)),
        ((2024, 1, 1), (2023, 12, 31), (0, 0, -1)),
        // The borrowed month can be too short to make the days
        // non-negative. Only one month is ever borrowed.
        ((2023, 1, 31), (2023, 3, 1), (0, 1, -2)),
        ((1999, 12, 31), (2000, 3, 1), (0, 2, -1)),
        ((1899, 12, 31), (1900, 3, 1), (0, 2, -2)),
    ];
    for ((y1, m1, d1), (y2, m2, d2), want) in tests {
        let (start, end) = (date(y1, m1, d1), date(y2, m2, d2));
        assert_eq!(between(start, end), want, "between({start}, {end})");
    }
}

#[test]
fn asymmetry() {
    let (d1, d2) = (date(2024, 1, 15), date(2024, 3, 1));
    assert_eq!(Period::between(d1, d2), 1.month().days(15));
    assert_eq!(Period::between(d2, d1), -1.month().days(17));
    assert_ne!(-Period::between(d1, d2), Period::between(d2, d1));
}

#[test]
fn extremes() {
    assert_eq!(
        Period::between(Date::MIN, Date::MAX),
        19_998.years().months(11).days(30),
    );
    assert_eq!(
        Period::between(Date::MAX, Date::MIN),
        -19_998.years().months(11).days(30),
    );
}

#[test]
fn reconstructs_end() {
    let starts = [
        date(2024, 1, 28),
        date(2023, 2, 1),
        date(1999, 12, 15),
        date(-44, 3, 15),
    ];
    let ends = [
        date(2024, 3, 31),
        date(2024, 2, 29),
        date(2023, 1, 1),
        date(2000, 1, 31),
        date(-44, 3, 14),
    ];
    for start in starts {
        for end in ends {
            let p = Period::between(start, end);
            assert_eq!(start.checked_add(p).unwrap(), end, "{start} + {p}");
        }
    }
}

#[test]
fn reconstruction_fails_past_month_end() {
    let (start, end) = (date(2024, 1, 31), date(2024, 3, 1));
    let p = Period::between(start, end);
    assert_eq!(p, 1.month().days(-1));
    // Adding a month clamps to 2024-02-29 before the day is removed.
    assert_eq!(start.checked_add(p).unwrap(), date(2024, 2, 28));
}

#[test]
fn custom_calendar() {
    let _ = Logger::init();

    /// A calendar where every month has 30 days.
    struct Thirty;

    impl Calendar for Thirty {
        fn is_leap_year(&self, _: i16) -> bool {
            false
        }

        fn length_of_month(&self, _: i16, _: i8) -> i8 {
            30
        }
    }

    let (start, end) = (date(2024, 1, 31), date(2024, 3, 1));
    assert_eq!(Period::between_with(&Thirty, start, end), 1.month());
    assert_eq!(Period::between(start, end), 1.month().days(-1));

    let calendar: &dyn Calendar = &Thirty;
    assert_eq!(
        Period::between_with(calendar, date(2023, 11, 30), date(2024, 1, 1)),
        1.month().days(1),
    );
}

#[test]
fn date_operators() {
    let (d1, d2) = (date(2020, 2, 29), date(2021, 2, 28));
    assert_eq!(d2 - d1, 11.months().days(30));
    assert_eq!(d1.until(d2), d2.since(d1));
    assert_eq!(d1 + (d2 - d1), d2);
}
