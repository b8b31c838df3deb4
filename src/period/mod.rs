use crate::{
    civil::{self, Calendar, Date},
    error::{period::Error as E, Error, ErrorContext},
    fmt::{
        iso8601::{DEFAULT_PERIOD_PARSER, DEFAULT_PERIOD_PRINTER},
        StdFmtWrite,
    },
    util::math::{self, SafeInt},
    Unit,
};

use self::fields::{DateFields, TimeFields};

pub(crate) mod fields;
mod total;

/// The seven units stored in a period, from biggest to smallest.
const STORED_UNITS: [Unit; 7] = [
    Unit::Year,
    Unit::Month,
    Unit::Day,
    Unit::Hour,
    Unit::Minute,
    Unit::Second,
    Unit::Nanosecond,
];

/// An immutable amount of calendar and clock time.
///
/// A period is made of seven independently signed fields: years, months,
/// days, hours, minutes, seconds and nanoseconds. The fields are never
/// carried into one another implicitly. For example, a period of 25 hours
/// is distinct from a period of 1 day and 1 hour, and a period of 1 year
/// and -2 months is distinct from a period of 10 months. Carrying is
/// explicit through [`Period::normalized`] and
/// [`Period::normalized_with_24_hour_days`].
///
/// Years, months and days do not have a fixed length. Their length depends
/// on where they are applied on a calendar. Hours, minutes, seconds and
/// nanoseconds always have a fixed length. Consequently, only periods
/// without years or months can be converted to a fixed length
/// [`Duration`](crate::Duration).
///
/// The nanoseconds field is an `i64` and is not restricted to less than one
/// second. It only gets reduced by normalization.
///
/// # Creating periods
///
/// The simplest way is through the [`ToPeriod`] trait:
///
/// ```
/// use calperiod::ToPeriod;
///
/// let period = 1.year().months(2).days(3);
/// assert_eq!(period.to_string(), "P1Y2M3D");
/// ```
///
/// Or with the builder methods on a zero period:
///
/// ```
/// use calperiod::Period;
///
/// let period = Period::new().hours(4).minutes(30);
/// assert_eq!(period.to_string(), "PT4H30M");
/// ```
///
/// Or by parsing an ISO 8601 duration:
///
/// ```
/// use calperiod::Period;
///
/// let period: Period = "P1Y2M3DT4H5M6.7S".parse()?;
/// assert_eq!(period.get_years(), 1);
/// assert_eq!(period.get_nanoseconds(), 700_000_000);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Or as the calendar difference between two dates:
///
/// ```
/// use calperiod::{civil::date, Period, ToPeriod};
///
/// let period = Period::between(date(2024, 1, 15), date(2024, 3, 1));
/// assert_eq!(period, 1.month().days(15));
/// ```
///
/// # Equality
///
/// Two periods are equal when all seven of their fields are equal. This is
/// not the same as representing the same amount of time:
///
/// ```
/// use calperiod::ToPeriod;
///
/// assert_ne!(1.day(), 24.hours());
/// assert_ne!(60.seconds(), 1.minute());
/// assert_eq!(60.seconds().normalized()?, 1.minute());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Period {
    date: DateFields,
    time: TimeFields,
}

/// Infallible routines for creating and inspecting periods.
impl Period {
    /// A period with every field set to zero.
    ///
    /// This prints as `PT0S`.
    pub const ZERO: Period =
        Period { date: DateFields::ZERO, time: TimeFields::ZERO };

    /// Creates a new period with every field set to zero.
    ///
    /// This is the same as [`Period::ZERO`] and is meant to start a chain of
    /// builder methods.
    #[inline]
    pub const fn new() -> Period {
        Period::ZERO
    }

    /// Creates a period from all seven of its fields.
    ///
    /// This is a `const` function. It cannot fail since every field accepts
    /// its full integer range.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::Period;
    ///
    /// const P: Period = Period::constant(1, 2, 3, 4, 5, 6, 999_999_999);
    /// assert_eq!(P.to_string(), "P1Y2M3DT4H5M6.999999999S");
    /// ```
    #[inline]
    pub const fn constant(
        years: i32,
        months: i32,
        days: i32,
        hours: i32,
        minutes: i32,
        seconds: i32,
        nanoseconds: i64,
    ) -> Period {
        Period {
            date: DateFields { years, months, days },
            time: TimeFields { hours, minutes, seconds, nanoseconds },
        }
    }

    /// Creates a period with only date fields.
    #[inline]
    pub const fn from_date_fields(
        years: i32,
        months: i32,
        days: i32,
    ) -> Period {
        Period::constant(years, months, days, 0, 0, 0, 0)
    }

    /// Creates a period with only time fields.
    #[inline]
    pub const fn from_time_fields(
        hours: i32,
        minutes: i32,
        seconds: i32,
        nanoseconds: i64,
    ) -> Period {
        Period::constant(0, 0, 0, hours, minutes, seconds, nanoseconds)
    }

    /// Set the number of years on this period.
    ///
    /// # Panics
    ///
    /// When the given value does not fit in an `i32`. Use
    /// [`Period::try_years`] to handle that case.
    #[inline]
    pub fn years<I: Into<i64>>(self, years: I) -> Period {
        self.try_years(years).expect("value for years is out of bounds")
    }

    /// Set the number of months on this period.
    ///
    /// # Panics
    ///
    /// When the given value does not fit in an `i32`.
    #[inline]
    pub fn months<I: Into<i64>>(self, months: I) -> Period {
        self.try_months(months).expect("value for months is out of bounds")
    }

    /// Set the number of days on this period.
    ///
    /// # Panics
    ///
    /// When the given value does not fit in an `i32`.
    #[inline]
    pub fn days<I: Into<i64>>(self, days: I) -> Period {
        self.try_days(days).expect("value for days is out of bounds")
    }

    /// Set the number of hours on this period.
    ///
    /// # Panics
    ///
    /// When the given value does not fit in an `i32`.
    #[inline]
    pub fn hours<I: Into<i64>>(self, hours: I) -> Period {
        self.try_hours(hours).expect("value for hours is out of bounds")
    }

    /// Set the number of minutes on this period.
    ///
    /// # Panics
    ///
    /// When the given value does not fit in an `i32`.
    #[inline]
    pub fn minutes<I: Into<i64>>(self, minutes: I) -> Period {
        self.try_minutes(minutes)
            .expect("value for minutes is out of bounds")
    }

    /// Set the number of seconds on this period.
    ///
    /// # Panics
    ///
    /// When the given value does not fit in an `i32`.
    #[inline]
    pub fn seconds<I: Into<i64>>(self, seconds: I) -> Period {
        self.try_seconds(seconds)
            .expect("value for seconds is out of bounds")
    }

    /// Set the number of nanoseconds on this period.
    ///
    /// This never panics since the nanoseconds field accepts any `i64`.
    #[inline]
    pub fn nanoseconds<I: Into<i64>>(self, nanoseconds: I) -> Period {
        let nanoseconds = nanoseconds.into();
        Period { time: TimeFields { nanoseconds, ..self.time }, ..self }
    }

    /// Returns the number of years in this period.
    #[inline]
    pub fn get_years(&self) -> i32 {
        self.date.years
    }

    /// Returns the number of months in this period.
    #[inline]
    pub fn get_months(&self) -> i32 {
        self.date.months
    }

    /// Returns the number of days in this period.
    #[inline]
    pub fn get_days(&self) -> i32 {
        self.date.days
    }

    /// Returns the number of hours in this period.
    #[inline]
    pub fn get_hours(&self) -> i32 {
        self.time.hours
    }

    /// Returns the number of minutes in this period.
    #[inline]
    pub fn get_minutes(&self) -> i32 {
        self.time.minutes
    }

    /// Returns the number of seconds in this period.
    #[inline]
    pub fn get_seconds(&self) -> i32 {
        self.time.seconds
    }

    /// Returns the number of nanoseconds in this period.
    ///
    /// Unless this period is normalized, this may be bigger than one
    /// second's worth of nanoseconds.
    #[inline]
    pub fn get_nanoseconds(&self) -> i64 {
        self.time.nanoseconds
    }

    /// Returns this period with its hours, minutes, seconds and nanoseconds
    /// set to zero.
    #[inline]
    pub fn without_time_fields(self) -> Period {
        Period { time: TimeFields::ZERO, ..self }
    }

    /// Returns this period with its years, months and days set to zero.
    #[inline]
    pub fn without_date_fields(self) -> Period {
        Period { date: DateFields::ZERO, ..self }
    }

    /// Returns true when every field in this period is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.date.is_zero() && self.time.is_zero()
    }

    /// Returns true when at least one field is non-zero and no field is
    /// negative.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{Period, ToPeriod};
    ///
    /// assert!(1.year().days(2).is_positive());
    /// assert!(!1.year().days(-2).is_positive());
    /// assert!(!Period::ZERO.is_positive());
    /// ```
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.is_positive_or_zero()
    }

    /// Returns true when no field is negative.
    ///
    /// Unlike [`Period::is_positive`], this returns true for a zero period.
    #[inline]
    pub fn is_positive_or_zero(&self) -> bool {
        STORED_UNITS.iter().all(|&unit| self.get_stored(unit) >= 0)
    }

    /// Returns the calendar difference between the two dates given, in
    /// years, months and days.
    ///
    /// When `end` is before `start`, the period returned is negative.
    ///
    /// This is calendar aware. When `end` is after `start` but its day of
    /// month is smaller, a month is borrowed and converted into days using
    /// the length of the month immediately before the month of `end`. When
    /// `end` is before `start` but its day of month is bigger, a month is
    /// given back using the length of the month of `end`. For this reason,
    /// swapping the arguments does not always negate the result:
    ///
    /// ```
    /// use calperiod::{civil::date, Period, ToPeriod};
    ///
    /// let (d1, d2) = (date(2024, 1, 15), date(2024, 3, 1));
    /// // February 2024 has 29 days.
    /// assert_eq!(Period::between(d1, d2), 1.month().days(15));
    /// // January has 31 days.
    /// assert_eq!(Period::between(d2, d1), -1.month().days(17));
    /// ```
    ///
    /// Adding the result to `start` reconstructs `end` except when doing so
    /// requires clamping to the end of a month.
    pub fn between(start: Date, end: Date) -> Period {
        Period::between_with(&civil::Iso, start, end)
    }

    /// Like [`Period::between`], but uses the given calendar to determine
    /// the length of each month.
    pub fn between_with<C: Calendar + ?Sized>(
        calendar: &C,
        start: Date,
        end: Date,
    ) -> Period {
        civil::between(calendar, start, end)
    }
}

/// Fallible routines for creating periods.
impl Period {
    /// Creates a period from a single amount of the given unit.
    ///
    /// Units that aren't stored in a period directly are converted to one
    /// that is: microseconds and milliseconds become nanoseconds, half-days
    /// become hours, weeks become days, quarters and half-years become
    /// months and decades, centuries and millennia become years.
    ///
    /// # Errors
    ///
    /// When the converted amount overflows its field.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{Period, ToPeriod, Unit};
    ///
    /// assert_eq!(Period::of(2, Unit::Week)?, 14.days());
    /// assert_eq!(Period::of(3, Unit::Quarter)?, 9.months());
    /// assert_eq!(Period::of(5, Unit::Millisecond)?, 5_000_000.nanoseconds());
    /// assert!(Period::of(3_000_000, Unit::Millennium).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of(amount: i64, unit: Unit) -> Result<Period, Error> {
        let (stored, factor) = unit.stored();
        let value = amount
            .safe_mul(i64::from(factor))
            .and_then(|value| Period::ZERO.with_stored(stored, value))
            .with_context(|| E::FailedOf { unit })?;
        if factor != 1 {
            trace!(
                "converted {amount} {unit} into {factor}x {stored}",
                unit = unit.plural(),
                stored = stored.plural(),
            );
        }
        Ok(value)
    }

    /// Set the number of years on this period.
    ///
    /// # Errors
    ///
    /// When the given value does not fit in an `i32`.
    #[inline]
    pub fn try_years<I: Into<i64>>(self, years: I) -> Result<Period, Error> {
        let years = field_i32("years", years.into())?;
        Ok(Period { date: DateFields { years, ..self.date }, ..self })
    }

    /// Set the number of months on this period.
    ///
    /// # Errors
    ///
    /// When the given value does not fit in an `i32`.
    #[inline]
    pub fn try_months<I: Into<i64>>(
        self,
        months: I,
    ) -> Result<Period, Error> {
        let months = field_i32("months", months.into())?;
        Ok(Period { date: DateFields { months, ..self.date }, ..self })
    }

    /// Set the number of days on this period.
    ///
    /// # Errors
    ///
    /// When the given value does not fit in an `i32`.
    #[inline]
    pub fn try_days<I: Into<i64>>(self, days: I) -> Result<Period, Error> {
        let days = field_i32("days", days.into())?;
        Ok(Period { date: DateFields { days, ..self.date }, ..self })
    }

    /// Set the number of hours on this period.
    ///
    /// # Errors
    ///
    /// When the given value does not fit in an `i32`.
    #[inline]
    pub fn try_hours<I: Into<i64>>(self, hours: I) -> Result<Period, Error> {
        let hours = field_i32("hours", hours.into())?;
        Ok(Period { time: TimeFields { hours, ..self.time }, ..self })
    }

    /// Set the number of minutes on this period.
    ///
    /// # Errors
    ///
    /// When the given value does not fit in an `i32`.
    #[inline]
    pub fn try_minutes<I: Into<i64>>(
        self,
        minutes: I,
    ) -> Result<Period, Error> {
        let minutes = field_i32("minutes", minutes.into())?;
        Ok(Period { time: TimeFields { minutes, ..self.time }, ..self })
    }

    /// Set the number of seconds on this period.
    ///
    /// # Errors
    ///
    /// When the given value does not fit in an `i32`.
    #[inline]
    pub fn try_seconds<I: Into<i64>>(
        self,
        seconds: I,
    ) -> Result<Period, Error> {
        let seconds = field_i32("seconds", seconds.into())?;
        Ok(Period { time: TimeFields { seconds, ..self.time }, ..self })
    }
}

/// Routines for arithmetic on periods.
impl Period {
    /// Adds a period or a single unit amount to this one, field by field.
    ///
    /// Fields are never carried into one another. Use
    /// [`Period::normalized`] on the result for that.
    ///
    /// # Errors
    ///
    /// When any field overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{ToPeriod, Unit};
    ///
    /// let p = 1.year().months(11);
    /// assert_eq!(p.checked_add(2.months())?, 1.year().months(13));
    /// assert_eq!(p.checked_add((Unit::Quarter, 1))?, 1.year().months(14));
    /// assert_eq!(p.checked_add(&p)?, 2.years().months(22));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn checked_add<A: Into<PeriodArithmetic>>(
        self,
        rhs: A,
    ) -> Result<Period, Error> {
        let rhs = rhs.into().to_period()?;
        self.combine(rhs, i64::safe_add, |unit| E::FailedAdd { unit })
    }

    /// Subtracts a period or a single unit amount from this one, field by
    /// field.
    ///
    /// # Errors
    ///
    /// When any field overflows.
    #[inline]
    pub fn checked_sub<A: Into<PeriodArithmetic>>(
        self,
        rhs: A,
    ) -> Result<Period, Error> {
        let rhs = rhs.into().to_period()?;
        self.combine(rhs, i64::safe_sub, |unit| E::FailedSubtract { unit })
    }

    /// Multiplies every field in this period by the given scalar.
    ///
    /// # Errors
    ///
    /// When any field overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::ToPeriod;
    ///
    /// let p = 1.year().hours(-2).nanoseconds(3);
    /// assert_eq!(p.checked_mul(3)?, 3.years().hours(-6).nanoseconds(9));
    /// assert!(p.checked_mul(0)?.is_zero());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_mul(self, scalar: i32) -> Result<Period, Error> {
        if scalar == 0 || self.is_zero() {
            return Ok(Period::ZERO);
        }
        if scalar == 1 {
            return Ok(self);
        }
        Ok(Period {
            date: self.date.checked_mul(scalar).context(E::FailedMultiply)?,
            time: self.time.checked_mul(scalar).context(E::FailedMultiply)?,
        })
    }

    /// Divides every field in this period by the given divisor.
    ///
    /// Each field is divided independently and truncated toward zero. No
    /// remainder is carried into smaller fields, so the result is generally
    /// not the total amount of time divided by `divisor`.
    ///
    /// # Errors
    ///
    /// When `divisor` is zero, even if this period is zero. Also when
    /// dividing a field equal to `i32::MIN` by `-1`.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::Period;
    ///
    /// let p = Period::constant(12, 12, 12, 12, 12, 11, 9);
    /// assert_eq!(p.checked_div(2)?, Period::constant(6, 6, 6, 6, 6, 5, 4));
    /// assert!(Period::ZERO.checked_div(0).unwrap_err().is_division_by_zero());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_div(self, divisor: i32) -> Result<Period, Error> {
        Ok(Period {
            date: self.date.checked_div(divisor).context(E::FailedDivide)?,
            time: self.time.checked_div(divisor).context(E::FailedDivide)?,
        })
    }

    /// Negates every field in this period.
    ///
    /// # Errors
    ///
    /// When any `i32` field is `i32::MIN` or nanoseconds is `i64::MIN`.
    pub fn checked_neg(self) -> Result<Period, Error> {
        Ok(Period {
            date: self.date.checked_neg().context(E::FailedNegate)?,
            time: self.time.checked_neg().context(E::FailedNegate)?,
        })
    }

    /// Returns a period with carries applied from smaller fields to bigger
    /// ones.
    ///
    /// Nanoseconds are carried into seconds such that the remaining
    /// nanoseconds are in the range `[0, 1_000_000_000)`. Then seconds are
    /// carried into minutes and minutes into hours, leaving each with the
    /// same sign it had after carrying. Independently, months are carried
    /// into years.
    ///
    /// Hours are never carried into days, since days do not have a fixed
    /// length. See [`Period::normalized_with_24_hour_days`]. Days are never
    /// carried into months either.
    ///
    /// # Errors
    ///
    /// When a carry overflows the field it is carried into.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{Period, ToPeriod};
    ///
    /// let p = Period::constant(1, 2, 3, 4, 5, 6, 999_999_999);
    /// assert_eq!(p.normalized()?, p);
    /// let p = p.checked_add(1.nanosecond())?;
    /// assert_eq!(p.normalized()?, Period::constant(1, 2, 3, 4, 5, 7, 0));
    ///
    /// let p = 14.months().hours(23).minutes(59).seconds(60);
    /// assert_eq!(p.normalized()?, 1.year().months(2).hours(24));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn normalized(self) -> Result<Period, Error> {
        if self.is_zero() {
            return Ok(Period::ZERO);
        }
        Ok(Period {
            date: self.date.normalized().context(E::FailedNormalize)?,
            time: self.time.normalized().context(E::FailedNormalize)?,
        })
    }

    /// Like [`Period::normalized`], but also carries hours into days by
    /// treating every day as exactly 24 hours.
    ///
    /// # Errors
    ///
    /// When a carry overflows the field it is carried into.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::ToPeriod;
    ///
    /// let p = 1.day().hours(47).minutes(60);
    /// assert_eq!(p.normalized_with_24_hour_days()?, 3.days());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn normalized_with_24_hour_days(self) -> Result<Period, Error> {
        if self.is_zero() {
            return Ok(Period::ZERO);
        }
        let (extra_days, time) = self
            .time
            .normalized_with_24_hour_days()
            .context(E::FailedNormalize)?;
        let mut date = self.date.normalized().context(E::FailedNormalize)?;
        date.days = i64::from(date.days)
            .safe_add(extra_days)
            .and_then(|days| math::to_i32(days))
            .context(E::FailedNormalize)?;
        Ok(Period { date, time })
    }

    /// Applies `op` to each pair of corresponding fields.
    fn combine(
        self,
        rhs: Period,
        op: fn(i64, i64) -> Result<i64, Error>,
        context: fn(Unit) -> E,
    ) -> Result<Period, Error> {
        let mut result = self;
        for unit in STORED_UNITS {
            let delta = rhs.get_stored(unit);
            if delta == 0 {
                continue;
            }
            result = op(self.get_stored(unit), delta)
                .and_then(|value| result.with_stored(unit, value))
                .with_context(|| context(unit))?;
        }
        Ok(result)
    }

    /// Returns the value of the field for the given stored unit.
    pub(crate) fn get_stored(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Year => self.date.years.into(),
            Unit::Month => self.date.months.into(),
            Unit::Day => self.date.days.into(),
            Unit::Hour => self.time.hours.into(),
            Unit::Minute => self.time.minutes.into(),
            Unit::Second => self.time.seconds.into(),
            Unit::Nanosecond => self.time.nanoseconds,
            unit => unreachable!("{unit:?} is not stored in a period"),
        }
    }

    /// Sets the field for the given stored unit, failing with an overflow
    /// error if it doesn't fit.
    fn with_stored(mut self, unit: Unit, value: i64) -> Result<Period, Error> {
        match unit {
            Unit::Year => self.date.years = math::to_i32(value)?,
            Unit::Month => self.date.months = math::to_i32(value)?,
            Unit::Day => self.date.days = math::to_i32(value)?,
            Unit::Hour => self.time.hours = math::to_i32(value)?,
            Unit::Minute => self.time.minutes = math::to_i32(value)?,
            Unit::Second => self.time.seconds = math::to_i32(value)?,
            Unit::Nanosecond => self.time.nanoseconds = value,
            unit => unreachable!("{unit:?} is not stored in a period"),
        }
        Ok(self)
    }

    pub(crate) fn date_fields(&self) -> DateFields {
        self.date
    }

    pub(crate) fn time_fields(&self) -> TimeFields {
        self.time
    }
}

fn field_i32(what: &'static str, value: i64) -> Result<i32, Error> {
    i32::try_from(value)
        .map_err(|_| Error::range(what, value, i32::MIN, i32::MAX))
}

impl core::fmt::Debug for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Period")
            .field("years", &self.date.years)
            .field("months", &self.date.months)
            .field("days", &self.date.days)
            .field("hours", &self.time.hours)
            .field("minutes", &self.time.minutes)
            .field("seconds", &self.time.seconds)
            .field("nanoseconds", &self.time.nanoseconds)
            .finish()
    }
}

impl core::fmt::Display for Period {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_PERIOD_PRINTER
            .print_period(self, StdFmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for Period {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<Period, Error> {
        DEFAULT_PERIOD_PARSER.parse_period(string)
    }
}

/// This negates every field of a period.
///
/// This panics on overflow. For checked arithmetic, use
/// [`Period::checked_neg`].
impl core::ops::Neg for Period {
    type Output = Period;

    #[inline]
    fn neg(self) -> Period {
        self.checked_neg().expect("negating `Period` overflowed")
    }
}

/// This multiplies every field of a period by an integer.
///
/// This panics on overflow. For checked arithmetic, use
/// [`Period::checked_mul`].
impl core::ops::Mul<i32> for Period {
    type Output = Period;

    #[inline]
    fn mul(self, rhs: i32) -> Period {
        self.checked_mul(rhs)
            .expect("multiplying `Period` by a scalar overflowed")
    }
}

/// This multiplies every field of a period by an integer.
///
/// This panics on overflow. For checked arithmetic, use
/// [`Period::checked_mul`].
impl core::ops::Mul<Period> for i32 {
    type Output = Period;

    #[inline]
    fn mul(self, rhs: Period) -> Period {
        rhs.checked_mul(self)
            .expect("multiplying `Period` by a scalar overflowed")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Period {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Period {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Period, D::Error> {
        use serde::de;

        struct PeriodVisitor;

        impl<'de> de::Visitor<'de> for PeriodVisitor {
            type Value = Period;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an ISO 8601 period string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Period, E> {
                DEFAULT_PERIOD_PARSER
                    .parse_period(value)
                    .map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<Period, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_bytes(PeriodVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Period {
    fn arbitrary(g: &mut quickcheck::Gen) -> Period {
        let mut field = || <i32 as quickcheck::Arbitrary>::arbitrary(g);
        let (y, mo, d, h, mi, s) =
            (field(), field(), field(), field(), field(), field());
        let ns = <i64 as quickcheck::Arbitrary>::arbitrary(g);
        Period::constant(y, mo, d, h, mi, s, ns)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        let fields = (
            (self.date.years, self.date.months, self.date.days),
            (self.time.hours, self.time.minutes, self.time.seconds),
            self.time.nanoseconds,
        );
        alloc::boxed::Box::new(quickcheck::Arbitrary::shrink(&fields).map(
            |((y, mo, d), (h, mi, s), ns)| {
                Period::constant(y, mo, d, h, mi, s, ns)
            },
        ))
    }
}

/// An argument to [`Period::checked_add`] and [`Period::checked_sub`].
///
/// This is either a period, or a single amount of some [`Unit`]. Values are
/// built through `From` impls, so one generally never names this type:
///
/// ```
/// use calperiod::{ToPeriod, Unit};
///
/// let p = 1.day();
/// assert_eq!(p.checked_add((Unit::Week, 1))?, 8.days());
/// assert_eq!(p.checked_sub(&p)?, 0.days());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PeriodArithmetic {
    kind: PeriodArithmeticKind,
}

#[derive(Clone, Copy, Debug)]
enum PeriodArithmeticKind {
    Period(Period),
    Unit(Unit, i64),
}

impl PeriodArithmetic {
    #[inline]
    fn to_period(self) -> Result<Period, Error> {
        match self.kind {
            PeriodArithmeticKind::Period(period) => Ok(period),
            PeriodArithmeticKind::Unit(unit, amount) => Period::of(amount, unit),
        }
    }
}

impl From<Period> for PeriodArithmetic {
    #[inline]
    fn from(period: Period) -> PeriodArithmetic {
        PeriodArithmetic { kind: PeriodArithmeticKind::Period(period) }
    }
}

impl<'a> From<&'a Period> for PeriodArithmetic {
    #[inline]
    fn from(period: &'a Period) -> PeriodArithmetic {
        PeriodArithmetic::from(*period)
    }
}

impl From<(Unit, i64)> for PeriodArithmetic {
    #[inline]
    fn from((unit, amount): (Unit, i64)) -> PeriodArithmetic {
        PeriodArithmetic { kind: PeriodArithmeticKind::Unit(unit, amount) }
    }
}

/// A trait for creating periods from integers.
///
/// This is implemented for `i8`, `i16`, `i32` and `i64`. Each method creates
/// a period with a single unit set. Further units can be set with the
/// builder methods on [`Period`].
///
/// # Example
///
/// ```
/// use calperiod::ToPeriod;
///
/// assert_eq!(5.days().to_string(), "P5D");
/// assert_eq!(5.days().hours(10).to_string(), "P5DT10H");
/// assert_eq!((-5.days()).to_string(), "P-5D");
/// assert_eq!(2.weeks().to_string(), "P14D");
/// ```
pub trait ToPeriod: Sized {
    /// Create a new period from this integer in units of years.
    ///
    /// # Panics
    ///
    /// When `Period::new().years(self)` would panic.
    fn years(self) -> Period;

    /// Create a new period from this integer in units of months.
    ///
    /// # Panics
    ///
    /// When `Period::new().months(self)` would panic.
    fn months(self) -> Period;

    /// Create a new period from this integer in units of weeks. This sets
    /// the days field to 7 times this integer.
    ///
    /// # Panics
    ///
    /// When the number of days overflows an `i32`.
    fn weeks(self) -> Period;

    /// Create a new period from this integer in units of days.
    ///
    /// # Panics
    ///
    /// When `Period::new().days(self)` would panic.
    fn days(self) -> Period;

    /// Create a new period from this integer in units of hours.
    ///
    /// # Panics
    ///
    /// When `Period::new().hours(self)` would panic.
    fn hours(self) -> Period;

    /// Create a new period from this integer in units of minutes.
    ///
    /// # Panics
    ///
    /// When `Period::new().minutes(self)` would panic.
    fn minutes(self) -> Period;

    /// Create a new period from this integer in units of seconds.
    ///
    /// # Panics
    ///
    /// When `Period::new().seconds(self)` would panic.
    fn seconds(self) -> Period;

    /// Create a new period from this integer in units of milliseconds.
    ///
    /// # Panics
    ///
    /// When the number of nanoseconds overflows an `i64`.
    fn milliseconds(self) -> Period;

    /// Create a new period from this integer in units of microseconds.
    ///
    /// # Panics
    ///
    /// When the number of nanoseconds overflows an `i64`.
    fn microseconds(self) -> Period;

    /// Create a new period from this integer in units of nanoseconds.
    fn nanoseconds(self) -> Period;

    /// Equivalent to `years()`, but reads better for singular units.
    #[inline]
    fn year(self) -> Period {
        self.years()
    }

    /// Equivalent to `months()`, but reads better for singular units.
    #[inline]
    fn month(self) -> Period {
        self.months()
    }

    /// Equivalent to `weeks()`, but reads better for singular units.
    #[inline]
    fn week(self) -> Period {
        self.weeks()
    }

    /// Equivalent to `days()`, but reads better for singular units.
    #[inline]
    fn day(self) -> Period {
        self.days()
    }

    /// Equivalent to `hours()`, but reads better for singular units.
    #[inline]
    fn hour(self) -> Period {
        self.hours()
    }

    /// Equivalent to `minutes()`, but reads better for singular units.
    #[inline]
    fn minute(self) -> Period {
        self.minutes()
    }

    /// Equivalent to `seconds()`, but reads better for singular units.
    #[inline]
    fn second(self) -> Period {
        self.seconds()
    }

    /// Equivalent to `milliseconds()`, but reads better for singular units.
    #[inline]
    fn millisecond(self) -> Period {
        self.milliseconds()
    }

    /// Equivalent to `microseconds()`, but reads better for singular units.
    #[inline]
    fn microsecond(self) -> Period {
        self.microseconds()
    }

    /// Equivalent to `nanoseconds()`, but reads better for singular units.
    #[inline]
    fn nanosecond(self) -> Period {
        self.nanoseconds()
    }
}

macro_rules! impl_to_period {
    ($ty:ty) => {
        impl ToPeriod for $ty {
            #[inline]
            fn years(self) -> Period {
                Period::new().years(self)
            }
            #[inline]
            fn months(self) -> Period {
                Period::new().months(self)
            }
            #[inline]
            fn weeks(self) -> Period {
                Period::of(i64::from(self), Unit::Week)
                    .expect("value for weeks is out of bounds")
            }
            #[inline]
            fn days(self) -> Period {
                Period::new().days(self)
            }
            #[inline]
            fn hours(self) -> Period {
                Period::new().hours(self)
            }
            #[inline]
            fn minutes(self) -> Period {
                Period::new().minutes(self)
            }
            #[inline]
            fn seconds(self) -> Period {
                Period::new().seconds(self)
            }
            #[inline]
            fn milliseconds(self) -> Period {
                Period::of(i64::from(self), Unit::Millisecond)
                    .expect("value for milliseconds is out of bounds")
            }
            #[inline]
            fn microseconds(self) -> Period {
                Period::of(i64::from(self), Unit::Microsecond)
                    .expect("value for microseconds is out of bounds")
            }
            #[inline]
            fn nanoseconds(self) -> Period {
                Period::new().nanoseconds(self)
            }
        }
    };
}

impl_to_period!(i8);
impl_to_period!(i16);
impl_to_period!(i32);
impl_to_period!(i64);
