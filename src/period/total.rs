use crate::{
    error::{period::Error as E, Error, ErrorContext},
    period::{
        fields::{
            HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR,
            NANOS_PER_SECOND, SECONDS_PER_MINUTE,
        },
        Period,
    },
    util::math,
    Duration, Unit,
};

const NANOS_PER_MINUTE: i128 =
    NANOS_PER_SECOND as i128 * SECONDS_PER_MINUTE as i128;
const NANOS_PER_HOUR: i128 = NANOS_PER_MINUTE * MINUTES_PER_HOUR as i128;
const NANOS_PER_DAY: i128 = NANOS_PER_HOUR * HOURS_PER_DAY as i128;

/// Routines for converting periods to fixed length amounts of time.
///
/// All of these compute with 128-bit integers internally, so the only
/// failure mode (besides a non-fixed unit being present) is when the final
/// result doesn't fit into its return type.
impl Period {
    /// Converts this period to a fixed length duration.
    ///
    /// Days are treated as exactly 24 hours.
    ///
    /// # Errors
    ///
    /// When this period has non-zero years or months, since they do not have
    /// a fixed length. Or when the number of seconds overflows an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{Duration, Period, ToPeriod};
    ///
    /// let p = Period::constant(0, 0, 1, 4, 5, 6, 7);
    /// assert_eq!(p.to_duration()?, Duration::new(101_106, 7));
    ///
    /// let p = (-1).second().nanoseconds(-500_000_000);
    /// let d = p.to_duration()?;
    /// assert_eq!((d.as_secs(), d.subsec_nanos()), (-2, 500_000_000));
    ///
    /// assert!(1.year().to_duration().unwrap_err().is_non_fixed_unit());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_duration(&self) -> Result<Duration, Error> {
        let nanos = self.fixed_nanoseconds(true)?;
        let secs = nanos.div_euclid(NANOS_PER_SECOND.into());
        let subsec = nanos.rem_euclid(NANOS_PER_SECOND.into());
        let secs = math::to_i64(secs).context(E::FailedToDuration)?;
        // Always in `[0, 1_000_000_000)` from the Euclidean remainder.
        let subsec = math::to_i32(subsec).context(E::FailedToDuration)?;
        Ok(Duration::new_unchecked(secs, subsec))
    }

    /// Returns the total number of years in this period.
    ///
    /// This is the years field plus the months field divided by 12,
    /// truncated toward zero. All other fields are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::ToPeriod;
    ///
    /// assert_eq!(1.year().months(23).total_years()?, 2);
    /// assert_eq!(1.year().months(-23).total_years()?, 0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn total_years(&self) -> Result<i64, Error> {
        let months = i128::from(self.date.months);
        let years = i128::from(self.date.years) + months / MONTHS_PER_YEAR as i128;
        math::to_i64(years).context(E::FailedTotal { unit: Unit::Year })
    }

    /// Returns the total number of months in this period.
    ///
    /// This is the years field times 12 plus the months field. All other
    /// fields are ignored.
    pub fn total_months(&self) -> Result<i64, Error> {
        let months = i128::from(self.date.years) * MONTHS_PER_YEAR as i128
            + i128::from(self.date.months);
        math::to_i64(months).context(E::FailedTotal { unit: Unit::Month })
    }

    /// Returns the total number of days in this period, treating every day
    /// as 24 hours, truncated toward zero.
    ///
    /// # Errors
    ///
    /// When this period has non-zero years or months.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::ToPeriod;
    ///
    /// assert_eq!(1.day().hours(47).total_days_with_24_hour_days()?, 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn total_days_with_24_hour_days(&self) -> Result<i64, Error> {
        self.total(Unit::Day, NANOS_PER_DAY, true)
    }

    /// Returns the total number of hours in this period, truncated toward
    /// zero.
    ///
    /// # Errors
    ///
    /// When this period has non-zero years, months or days.
    pub fn total_hours(&self) -> Result<i64, Error> {
        self.total(Unit::Hour, NANOS_PER_HOUR, false)
    }

    /// Returns the total number of hours in this period, treating every day
    /// as 24 hours, truncated toward zero.
    ///
    /// # Errors
    ///
    /// When this period has non-zero years or months.
    pub fn total_hours_with_24_hour_days(&self) -> Result<i64, Error> {
        self.total(Unit::Hour, NANOS_PER_HOUR, true)
    }

    /// Returns the total number of minutes in this period, truncated toward
    /// zero.
    ///
    /// # Errors
    ///
    /// When this period has non-zero years, months or days.
    pub fn total_minutes(&self) -> Result<i64, Error> {
        self.total(Unit::Minute, NANOS_PER_MINUTE, false)
    }

    /// Returns the total number of minutes in this period, treating every
    /// day as 24 hours, truncated toward zero.
    ///
    /// # Errors
    ///
    /// When this period has non-zero years or months.
    pub fn total_minutes_with_24_hour_days(&self) -> Result<i64, Error> {
        self.total(Unit::Minute, NANOS_PER_MINUTE, true)
    }

    /// Returns the total number of seconds in this period, truncated toward
    /// zero.
    ///
    /// # Errors
    ///
    /// When this period has non-zero years, months or days.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::ToPeriod;
    ///
    /// let p = 1.hour().seconds(-1).nanoseconds(-999_999_999);
    /// assert_eq!(p.total_seconds()?, 3_598);
    /// assert!(1.day().total_seconds().unwrap_err().is_non_fixed_unit());
    /// assert_eq!(1.day().total_seconds_with_24_hour_days()?, 86_400);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn total_seconds(&self) -> Result<i64, Error> {
        self.total(Unit::Second, NANOS_PER_SECOND.into(), false)
    }

    /// Returns the total number of seconds in this period, treating every
    /// day as 24 hours, truncated toward zero.
    ///
    /// # Errors
    ///
    /// When this period has non-zero years or months.
    pub fn total_seconds_with_24_hour_days(&self) -> Result<i64, Error> {
        self.total(Unit::Second, NANOS_PER_SECOND.into(), true)
    }

    /// Returns the total number of nanoseconds in this period.
    ///
    /// # Errors
    ///
    /// When this period has non-zero years, months or days, or when the
    /// total overflows an `i64`.
    pub fn total_nanoseconds(&self) -> Result<i64, Error> {
        self.total(Unit::Nanosecond, 1, false)
    }

    /// Returns the total number of nanoseconds in this period, treating
    /// every day as 24 hours.
    ///
    /// # Errors
    ///
    /// When this period has non-zero years or months, or when the total
    /// overflows an `i64`.
    pub fn total_nanoseconds_with_24_hour_days(&self) -> Result<i64, Error> {
        self.total(Unit::Nanosecond, 1, true)
    }

    fn total(
        &self,
        unit: Unit,
        unit_nanos: i128,
        days_are_24_hours: bool,
    ) -> Result<i64, Error> {
        let nanos = self.fixed_nanoseconds(days_are_24_hours)?;
        math::to_i64(nanos / unit_nanos).context(E::FailedTotal { unit })
    }

    /// Returns the fixed length fields of this period as one number of
    /// nanoseconds. This cannot overflow an `i128`.
    fn fixed_nanoseconds(
        &self,
        days_are_24_hours: bool,
    ) -> Result<i128, Error> {
        if self.date.years != 0 {
            return Err(E::NonFixedUnit { unit: Unit::Year }.into());
        }
        if self.date.months != 0 {
            return Err(E::NonFixedUnit { unit: Unit::Month }.into());
        }
        if self.date.days != 0 && !days_are_24_hours {
            return Err(E::NonFixedUnit { unit: Unit::Day }.into());
        }
        Ok(i128::from(self.date.days) * NANOS_PER_DAY
            + i128::from(self.time.hours) * NANOS_PER_HOUR
            + i128::from(self.time.minutes) * NANOS_PER_MINUTE
            + self.time.seconds_and_nanos())
    }
}

/// Converts a period to a fixed length duration.
///
/// This is the same as [`Period::to_duration`]. Days are treated as exactly
/// 24 hours.
impl TryFrom<Period> for Duration {
    type Error = Error;

    #[inline]
    fn try_from(period: Period) -> Result<Duration, Error> {
        period.to_duration()
    }
}

/// Converts a period to an unsigned standard library duration.
///
/// # Errors
///
/// When the period has non-zero years or months, or when it is negative.
impl TryFrom<Period> for core::time::Duration {
    type Error = Error;

    #[inline]
    fn try_from(period: Period) -> Result<core::time::Duration, Error> {
        core::time::Duration::try_from(period.to_duration()?)
    }
}

/// Converts a fixed length duration to a period with hours, minutes,
/// seconds and nanoseconds.
///
/// Hours are the biggest unit used. The seconds and nanoseconds of the
/// period always have the same sign. For example, a duration of -1.5
/// seconds becomes a period of -1 seconds and -500,000,000 nanoseconds.
///
/// # Errors
///
/// When the number of hours overflows an `i32`.
///
/// # Example
///
/// ```
/// use calperiod::{Duration, Period, ToPeriod};
///
/// let p = Period::try_from(Duration::new(3_723, 4))?;
/// assert_eq!(p, 1.hour().minutes(2).seconds(3).nanoseconds(4));
///
/// let p = Period::try_from(Duration::new(-2, 500_000_000))?;
/// assert_eq!(p, (-1).second().nanoseconds(-500_000_000));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
impl TryFrom<Duration> for Period {
    type Error = Error;

    fn try_from(duration: Duration) -> Result<Period, Error> {
        let (mut secs, mut nanos) =
            (duration.as_secs(), i64::from(duration.subsec_nanos()));
        if secs < 0 && nanos > 0 {
            secs += 1;
            nanos -= NANOS_PER_SECOND;
        }
        let secs_per_hour = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
        let hours = math::to_i32(secs / secs_per_hour)
            .context(E::FailedFromDuration)?;
        let minutes = ((secs % secs_per_hour) / SECONDS_PER_MINUTE) as i32;
        let seconds = (secs % SECONDS_PER_MINUTE) as i32;
        Ok(Period::from_time_fields(hours, minutes, seconds, nanos))
    }
}

#[cfg(test)]
mod tests {
    use crate::ToPeriod;

    use super::*;

    #[test]
    fn to_duration_includes_days() {
        let p = Period::constant(0, 0, 1, 4, 5, 6, 7);
        assert_eq!(p.to_duration().unwrap(), Duration::new(101_106, 7));
        assert_eq!(Period::ZERO.to_duration().unwrap(), Duration::ZERO);
    }

    #[test]
    fn to_duration_floors_nanoseconds() {
        let d = (-1).nanosecond().to_duration().unwrap();
        assert_eq!((d.as_secs(), d.subsec_nanos()), (-1, 999_999_999));
        let d = 1.second().nanoseconds(-900_000_000).to_duration().unwrap();
        assert_eq!((d.as_secs(), d.subsec_nanos()), (0, 100_000_000));
    }

    #[test]
    fn to_duration_rejects_calendar_units() {
        let err = 1.year().to_duration().unwrap_err();
        assert!(err.is_non_fixed_unit());
        insta::assert_snapshot!(
            err,
            @"cannot convert period with non-zero years to a fixed length duration, since years do not have a fixed length",
        );
        assert!(1.month().to_duration().unwrap_err().is_non_fixed_unit());
    }

    #[test]
    fn to_duration_uses_wide_intermediates() {
        // Would overflow an `i32` number of seconds if multiplied naively.
        let p = Period::ZERO.days(i32::MAX).hours(i32::MAX);
        let d = p.to_duration().unwrap();
        assert_eq!(
            d.as_secs(),
            i64::from(i32::MAX) * 86_400 + i64::from(i32::MAX) * 3_600,
        );

        let p = Period::ZERO.seconds(i32::MAX).nanoseconds(i64::MAX);
        assert_eq!(p.to_duration().unwrap().as_secs(), 11_370_855_683);
    }

    #[test]
    fn totals() {
        let p = 2.years().months(14);
        assert_eq!(p.total_years().unwrap(), 3);
        assert_eq!(p.total_months().unwrap(), 38);

        let p = Period::constant(0, 0, 2, 3, 4, 5, 6);
        assert_eq!(p.total_days_with_24_hour_days().unwrap(), 2);
        assert_eq!(p.total_hours_with_24_hour_days().unwrap(), 51);
        assert_eq!(p.total_minutes_with_24_hour_days().unwrap(), 3_064);
        assert_eq!(p.total_seconds_with_24_hour_days().unwrap(), 183_845);
        assert_eq!(
            p.total_nanoseconds_with_24_hour_days().unwrap(),
            183_845_000_000_006,
        );
        assert!(p.total_hours().unwrap_err().is_non_fixed_unit());

        let p = p.without_date_fields();
        assert_eq!(p.total_hours().unwrap(), 3);
        assert_eq!(p.total_minutes().unwrap(), 184);
        assert_eq!(p.total_seconds().unwrap(), 11_045);
        assert_eq!(p.total_nanoseconds().unwrap(), 11_045_000_000_006);

        let p = (-90).minutes();
        assert_eq!(p.total_hours().unwrap(), -1);
    }

    #[test]
    fn total_overflow() {
        let p = Period::ZERO.hours(i32::MAX);
        let err = p.total_nanoseconds().unwrap_err();
        assert!(err.is_overflow());
        insta::assert_snapshot!(
            err,
            @"failed to compute total nanoseconds in period: value 7730941129200000000000 overflows `i64`",
        );
        assert!(1.year().total_days_with_24_hour_days().is_err());
    }

    #[test]
    fn from_duration() {
        let p = Period::try_from(Duration::new(-3_723, -4)).unwrap();
        assert_eq!(p, (-1).hour().minutes(-2).seconds(-3).nanoseconds(-4));
        let p = Period::try_from(Duration::new(59, 999_999_999)).unwrap();
        assert_eq!(p, 59.seconds().nanoseconds(999_999_999));
        let err = Period::try_from(Duration::new(i64::MAX, 0)).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn to_std_duration() {
        let d = core::time::Duration::try_from(90.seconds()).unwrap();
        assert_eq!(d, core::time::Duration::from_secs(90));
        let err = core::time::Duration::try_from((-1).second()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    quickcheck::quickcheck! {
        fn prop_duration_round_trip(secs: i32, nanos: i32) -> bool {
            let d = Duration::new(i64::from(secs), i64::from(nanos));
            Period::try_from(d).unwrap().to_duration().unwrap() == d
        }
    }
}
