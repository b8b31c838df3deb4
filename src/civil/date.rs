use crate::{
    civil::{self, Calendar, Iso},
    error::{civil::Error as E, Error, ErrorContext},
    fmt::{util::DecimalFormatter, StdFmtWrite, Write, WriteExt},
    period::Period,
    util::common,
    Unit,
};

/// A representation of a civil date in the ISO 8601 calendar.
///
/// A `Date` value corresponds to a triple of year, month and day. Every
/// `Date` value is guaranteed to be a valid date. The year is in the range
/// `-9999..=9999`, where the year `0` is 1 BCE.
///
/// Dates are the anchors that give periods a concrete meaning. The period
/// between two dates is computed with [`Date::until`] (or
/// [`Period::between`]), and a period is applied to a date with
/// [`Date::checked_add`].
///
/// # Example
///
/// ```
/// use calperiod::{civil::date, ToPeriod};
///
/// let d1 = date(2024, 1, 15);
/// let d2 = date(2024, 3, 1);
/// assert_eq!(d2 - d1, 1.month().days(15));
/// assert_eq!(d1.checked_add(1.month().days(15))?, d2);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Date {
    year: i16,
    month: i8,
    day: i8,
}

impl Date {
    /// The minimum representable date.
    pub const MIN: Date = Date::constant(-9999, 1, 1);

    /// The maximum representable date.
    pub const MAX: Date = Date::constant(9999, 12, 31);

    /// Creates a new `Date` value from its year, month and day.
    ///
    /// # Errors
    ///
    /// When the year is outside `-9999..=9999`, when the month is outside
    /// `1..=12` or when the day is outside `1..=N`, where `N` is the number
    /// of days in the month.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::civil::Date;
    ///
    /// assert!(Date::new(2024, 2, 29).is_ok());
    /// let err = Date::new(2023, 2, 29).unwrap_err();
    /// assert!(err.is_range());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "parameter 'day' with value 29 is not in the required range of 1..=28",
    /// );
    /// ```
    pub fn new(year: i16, month: i8, day: i8) -> Result<Date, Error> {
        if !(Date::MIN.year..=Date::MAX.year).contains(&year) {
            return Err(Error::range(
                "year",
                year,
                Date::MIN.year,
                Date::MAX.year,
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::range("month", month, 1, 12));
        }
        let max_day = common::days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(Error::range("day", day, 1, max_day));
        }
        Ok(Date { year, month, day })
    }

    /// Creates a new `Date` value in a `const` context.
    ///
    /// # Panics
    ///
    /// When [`Date::new`] would return an error.
    pub const fn constant(year: i16, month: i8, day: i8) -> Date {
        if year < -9999 || year > 9999 {
            panic!("invalid year");
        }
        if month < 1 || month > 12 {
            panic!("invalid month");
        }
        if day < 1 || day > common::days_in_month(year, month) {
            panic!("invalid day");
        }
        Date { year, month, day }
    }

    /// Returns the year of this date.
    #[inline]
    pub fn year(self) -> i16 {
        self.year
    }

    /// Returns the month of this date, in the range `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Returns the day of the month of this date, starting at `1`.
    #[inline]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Returns the number of days in the month of this date.
    #[inline]
    pub fn days_in_month(self) -> i8 {
        Iso.length_of_month(self.year, self.month)
    }

    /// Returns true when the year of this date is a leap year.
    #[inline]
    pub fn in_leap_year(self) -> bool {
        Iso.is_leap_year(self.year)
    }

    /// Returns the period from this date until the one given.
    ///
    /// This is the same as `Period::between(self, other)`.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{civil::date, ToPeriod};
    ///
    /// let d = date(2020, 2, 29);
    /// assert_eq!(d.until(date(2021, 2, 28)), 11.months().days(30));
    /// assert_eq!(d.until(date(2024, 2, 29)), 4.years());
    /// ```
    #[inline]
    pub fn until(self, other: Date) -> Period {
        civil::between(&Iso, self, other)
    }

    /// Returns the period since the date given until this one.
    ///
    /// This is the same as `Period::between(other, self)`. It is also
    /// available through the `-` operator.
    #[inline]
    pub fn since(self, other: Date) -> Period {
        civil::between(&Iso, other, self)
    }

    /// Adds a period to this date.
    ///
    /// Years and months are added first. If the day of this date doesn't
    /// exist in the month arrived at, then it is clamped to the last day of
    /// that month. Days are added after that.
    ///
    /// # Errors
    ///
    /// When the period has non-zero hours, minutes, seconds or nanoseconds.
    /// Or when the result is outside the range of a `Date`.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{civil::date, ToPeriod};
    ///
    /// let d = date(2024, 1, 31);
    /// assert_eq!(d.checked_add(1.month())?, date(2024, 2, 29));
    /// assert_eq!(d.checked_add(1.month().days(1))?, date(2024, 3, 1));
    /// assert_eq!(d.checked_add((-1).year().days(-31))?, date(2022, 12, 31));
    ///
    /// let err = d.checked_add(1.hour()).unwrap_err();
    /// assert!(err.is_invalid_argument());
    ///
    /// assert!(d.checked_add(8000.years()).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add(self, period: Period) -> Result<Date, Error> {
        self.checked_add_imp(period).context(E::FailedAddPeriod)
    }

    /// Subtracts a period from this date.
    ///
    /// This is the same as adding the negation of the period, so years and
    /// months are still applied before days.
    ///
    /// # Errors
    ///
    /// When the period has non-zero hours, minutes, seconds or nanoseconds,
    /// when negating the period overflows, or when the result is outside the
    /// range of a `Date`.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{civil::date, ToPeriod};
    ///
    /// let d = date(2024, 3, 31);
    /// assert_eq!(d.checked_sub(1.month())?, date(2024, 2, 29));
    /// assert_eq!(d.checked_sub(1.month().days(1))?, date(2024, 2, 28));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_sub(self, period: Period) -> Result<Date, Error> {
        period
            .checked_neg()
            .and_then(|period| self.checked_add_imp(period))
            .context(E::FailedSubPeriod)
    }

    fn checked_add_imp(self, period: Period) -> Result<Date, Error> {
        let time = period.time_fields();
        if !time.is_zero() {
            let unit = if time.hours != 0 {
                Unit::Hour
            } else if time.minutes != 0 {
                Unit::Minute
            } else if time.seconds != 0 {
                Unit::Second
            } else {
                Unit::Nanosecond
            };
            return Err(E::TimeFieldsNotAllowed { unit }.into());
        }
        let fields = period.date_fields();

        let months = i64::from(self.total_months())
            + i64::from(fields.years) * 12
            + i64::from(fields.months);
        let year = months.div_euclid(12);
        let month = (months.rem_euclid(12) + 1) as i8;
        let year = i16::try_from(year)
            .ok()
            .filter(|y| (Date::MIN.year..=Date::MAX.year).contains(y))
            .ok_or_else(|| {
                Error::range("year", year, Date::MIN.year, Date::MAX.year)
            })?;
        let max_day = common::days_in_month(year, month);
        let day = if self.day > max_day {
            debug!(
                "clamped day {day} to {max_day} in {year:04}-{month:02}",
                day = self.day,
            );
            max_day
        } else {
            self.day
        };
        if fields.days == 0 {
            return Ok(Date { year, month, day });
        }

        let epoch_day = i64::from(common::to_epoch_day(year, month, day))
            + i64::from(fields.days);
        let (min, max) = (Date::MIN.to_epoch_day(), Date::MAX.to_epoch_day());
        if !(i64::from(min)..=i64::from(max)).contains(&epoch_day) {
            return Err(Error::range("epoch day", epoch_day, min, max));
        }
        // In range of a `Date`, so it fits an `i32`.
        let (year, month, day) = common::from_epoch_day(epoch_day as i32);
        Ok(Date { year, month, day })
    }

    /// The number of months since the year `0`, used when computing the
    /// difference between dates.
    pub(crate) fn total_months(self) -> i32 {
        i32::from(self.year) * 12 + i32::from(self.month) - 1
    }

    fn to_epoch_day(self) -> i32 {
        common::to_epoch_day(self.year, self.month, self.day)
    }

    /// Prints this date as `YYYY-MM-DD`.
    fn print<W: Write>(&self, mut wtr: W) -> Result<(), Error> {
        static FMT_YEAR: DecimalFormatter = DecimalFormatter::new().padding(4);
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);

        wtr.write_int(&FMT_YEAR, self.year)?;
        wtr.write_str("-")?;
        wtr.write_int(&FMT_TWO, self.month)?;
        wtr.write_str("-")?;
        wtr.write_int(&FMT_TWO, self.day)
    }
}

impl Default for Date {
    /// Returns `0000-01-01`.
    fn default() -> Date {
        Date { year: 0, month: 1, day: 1 }
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.print(StdFmtWrite(f)).map_err(|_| core::fmt::Error)
    }
}

impl core::fmt::Debug for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

/// Adds a period to a date.
///
/// This panics on error. To handle errors, use [`Date::checked_add`].
impl core::ops::Add<Period> for Date {
    type Output = Date;

    #[inline]
    fn add(self, rhs: Period) -> Date {
        self.checked_add(rhs).expect("adding period to date failed")
    }
}

/// Subtracts a period from a date.
///
/// This panics on error. To handle errors, use [`Date::checked_sub`].
impl core::ops::Sub<Period> for Date {
    type Output = Date;

    #[inline]
    fn sub(self, rhs: Period) -> Date {
        self.checked_sub(rhs).expect("subtracting period from date failed")
    }
}

/// Computes the period between two dates.
///
/// This returns a negative period when the date being subtracted is
/// greater.
impl core::ops::Sub for Date {
    type Output = Period;

    #[inline]
    fn sub(self, rhs: Date) -> Period {
        self.since(rhs)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Date {
    fn arbitrary(g: &mut quickcheck::Gen) -> Date {
        let year = <i16 as quickcheck::Arbitrary>::arbitrary(g);
        let year = year.rem_euclid(10_000);
        let negate = <bool as quickcheck::Arbitrary>::arbitrary(g);
        let year = if negate { -year } else { year };
        let mut byte = || <u8 as quickcheck::Arbitrary>::arbitrary(g);
        let month = (byte() % 12 + 1) as i8;
        let day = (byte() % 31 + 1) as i8;
        let day = day.min(common::days_in_month(year, month));
        Date { year, month, day }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Date>> {
        let fields = (self.year, self.month, self.day);
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&fields)
                .filter_map(|(y, m, d)| Date::new(y, m, d).ok()),
        )
    }
}
