/*!
Calendar dates, and the calendar arithmetic periods are computed with.

This module provides a [`Date`] in the proleptic Gregorian calendar
(the ISO 8601 calendar) and the [`Calendar`] trait that computes how long
months are. The calendar is only consulted when computing the period between
two dates, where a month's worth of days may need to be borrowed. See
[`Period::between_with`](crate::Period::between_with).
*/

use crate::{util::common, Period};

pub use self::date::Date;

mod date;

/// A calendar system, as far as periods are concerned.
///
/// A calendar is used to determine the length of a month when a period
/// between two dates borrows from months to make its days non-negative (or
/// non-positive). The month given is always in the range `1..=12`.
///
/// # Example
///
/// This shows a toy calendar where every month has 30 days, and how that
/// changes the period between two dates.
///
/// ```
/// use calperiod::{civil::{date, Calendar}, Period, ToPeriod};
///
/// struct ThirtyDays;
///
/// impl Calendar for ThirtyDays {
///     fn is_leap_year(&self, _year: i16) -> bool {
///         false
///     }
///
///     fn length_of_month(&self, _year: i16, _month: i8) -> i8 {
///         30
///     }
/// }
///
/// let (start, end) = (date(2024, 1, 31), date(2024, 3, 1));
/// // February 2024 has 29 days.
/// assert_eq!(Period::between(start, end), 1.month().days(-1));
/// assert_eq!(Period::between_with(&ThirtyDays, start, end), 1.month());
/// ```
pub trait Calendar {
    /// Returns true when the given year is a leap year.
    fn is_leap_year(&self, year: i16) -> bool;

    /// Returns the number of days in the given month of the given year.
    fn length_of_month(&self, year: i16, month: i8) -> i8;
}

impl<'a, C: Calendar + ?Sized> Calendar for &'a C {
    #[inline]
    fn is_leap_year(&self, year: i16) -> bool {
        (**self).is_leap_year(year)
    }

    #[inline]
    fn length_of_month(&self, year: i16, month: i8) -> i8 {
        (**self).length_of_month(year, month)
    }
}

/// The ISO 8601 calendar, i.e., the proleptic Gregorian calendar.
///
/// Every year divisible by 4 is a leap year, except for years divisible by
/// 100 but not by 400. In a leap year, February has 29 days.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Iso;

impl Calendar for Iso {
    #[inline]
    fn is_leap_year(&self, year: i16) -> bool {
        common::is_leap_year(year)
    }

    #[inline]
    fn length_of_month(&self, year: i16, month: i8) -> i8 {
        common::days_in_month(year, month)
    }
}

/// Creates a new `Date` value in a `const` context.
///
/// This is a convenience free function for [`Date::constant`].
///
/// # Panics
///
/// When the year, month and day given do not make a valid date.
///
/// # Example
///
/// ```
/// use calperiod::civil::date;
///
/// let d = date(2024, 2, 29);
/// assert_eq!(d.to_string(), "2024-02-29");
/// ```
#[inline]
pub const fn date(year: i16, month: i8, day: i8) -> Date {
    Date::constant(year, month, day)
}

/// Computes the years, months and days between two dates.
///
/// Days never have a sign opposite to the months. When they would, a month
/// is borrowed or given back and converted into days with the length of a
/// month taken from `calendar`:
///
/// * Going forward, the month borrowed is the one immediately before the
/// month of `end`.
/// * Going backward, the month given back is the month of `end`.
///
/// This means `between(a, b)` is not always the negation of `between(b, a)`.
pub(crate) fn between<C: Calendar + ?Sized>(
    calendar: &C,
    start: Date,
    end: Date,
) -> Period {
    let mut months = end.total_months() - start.total_months();
    let mut days = i32::from(end.day()) - i32::from(start.day());
    if months > 0 && days < 0 {
        let (year, month) = if end.month() == 1 {
            (end.year() - 1, 12)
        } else {
            (end.year(), end.month() - 1)
        };
        let len = calendar.length_of_month(year, month);
        trace!(
            "between {start} and {end}: borrowed {len} days \
             from {year:04}-{month:02}",
        );
        months -= 1;
        days += i32::from(len);
    } else if months < 0 && days > 0 {
        let len = calendar.length_of_month(end.year(), end.month());
        trace!(
            "between {start} and {end}: gave back {len} days \
             to {year:04}-{month:02}",
            year = end.year(),
            month = end.month(),
        );
        months += 1;
        days -= i32::from(len);
    }
    // Both truncate toward zero, so years and months share a sign.
    Period::from_date_fields(months / 12, months % 12, days)
}

#[cfg(test)]
mod tests {
    use crate::ToPeriod;

    use super::*;

    #[test]
    fn iso_calendar() {
        assert!(Iso.is_leap_year(2024));
        assert!(Iso.is_leap_year(2000));
        assert!(!Iso.is_leap_year(1900));
        assert!(!Iso.is_leap_year(2023));
        assert_eq!(Iso.length_of_month(2024, 2), 29);
        assert_eq!(Iso.length_of_month(2023, 2), 28);
        assert_eq!(Iso.length_of_month(2023, 4), 30);
        assert_eq!(Iso.length_of_month(2023, 12), 31);
    }

    #[test]
    fn between_same_date() {
        let d = date(2010, 1, 1);
        assert!(between(&Iso, d, d).is_zero());
    }

    #[test]
    fn between_whole_years() {
        let p = between(&Iso, date(2012, 2, 29), date(2016, 2, 29));
        assert_eq!(p, 4.years());
        let p = between(&Iso, date(2016, 2, 29), date(2012, 2, 29));
        assert_eq!(p, (-4).years());
    }

    #[test]
    fn between_borrows_from_previous_month() {
        // February 2023 has 28 days.
        let p = between(&Iso, date(2023, 1, 31), date(2023, 3, 1));
        assert_eq!(p, 1.month().days(-2));
        let p = between(&Iso, date(2024, 1, 31), date(2024, 3, 1));
        assert_eq!(p, 1.month().days(-1));
        // December of the prior year is used for January.
        let p = between(&Iso, date(2023, 11, 30), date(2024, 1, 1));
        assert_eq!(p, 1.month().days(2));
    }

    #[test]
    fn between_gives_back_end_month() {
        // March has 31 days.
        let p = between(&Iso, date(2024, 4, 1), date(2024, 3, 31));
        assert_eq!(p, Period::from_date_fields(0, 0, -1));
        let p = between(&Iso, date(2024, 5, 1), date(2024, 3, 31));
        assert_eq!(p, (-1).month().days(-1));
        let p = between(&Iso, date(2025, 3, 1), date(2024, 2, 29));
        assert_eq!(p, Period::from_date_fields(-1, 0, -1));
    }

    #[test]
    fn between_with_custom_calendar() {
        struct Thirty;

        impl Calendar for Thirty {
            fn is_leap_year(&self, _: i16) -> bool {
                false
            }

            fn length_of_month(&self, _: i16, _: i8) -> i8 {
                30
            }
        }

        let p = between(&Thirty, date(2023, 1, 31), date(2023, 3, 1));
        assert_eq!(p, 1.month());
        let calendar: &dyn Calendar = &Thirty;
        let p = between(calendar, date(2023, 3, 1), date(2023, 1, 31));
        assert_eq!(p, Period::from_date_fields(0, -1, 0));
    }
}
