/*!
The two groups of fields that make up a period.

Date fields (years, months, days) have a length that depends on where they
are applied in a calendar. Time fields (hours, minutes, seconds and
nanoseconds) always have a fixed length. The groups are kept apart because
they carry differently during normalization: months carry into years and
nanoseconds carry up to hours, but hours only carry into days when a caller
explicitly asks for 24 hour days.
*/

use crate::{
    error::Error,
    util::math::{self, SafeInt},
};

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const MINUTES_PER_HOUR: i64 = 60;
pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const MONTHS_PER_YEAR: i64 = 12;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct DateFields {
    pub(crate) years: i32,
    pub(crate) months: i32,
    pub(crate) days: i32,
}

impl DateFields {
    pub(crate) const ZERO: DateFields =
        DateFields { years: 0, months: 0, days: 0 };

    #[inline]
    pub(crate) const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Carries whole years out of the months field.
    ///
    /// The division truncates, so the months left behind have the same sign
    /// as the months given.
    pub(crate) fn normalized(self) -> Result<DateFields, Error> {
        let months = i64::from(self.months);
        let years = i64::from(self.years)
            .safe_add(months.safe_div(MONTHS_PER_YEAR)?)?;
        Ok(DateFields {
            years: math::to_i32(years)?,
            months: math::to_i32(months % MONTHS_PER_YEAR)?,
            days: self.days,
        })
    }

    pub(crate) fn checked_mul(self, scalar: i32) -> Result<DateFields, Error> {
        Ok(DateFields {
            years: self.years.safe_mul(scalar)?,
            months: self.months.safe_mul(scalar)?,
            days: self.days.safe_mul(scalar)?,
        })
    }

    pub(crate) fn checked_div(self, divisor: i32) -> Result<DateFields, Error> {
        Ok(DateFields {
            years: self.years.safe_div(divisor)?,
            months: self.months.safe_div(divisor)?,
            days: self.days.safe_div(divisor)?,
        })
    }

    pub(crate) fn checked_neg(self) -> Result<DateFields, Error> {
        Ok(DateFields {
            years: self.years.safe_neg()?,
            months: self.months.safe_neg()?,
            days: self.days.safe_neg()?,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct TimeFields {
    pub(crate) hours: i32,
    pub(crate) minutes: i32,
    pub(crate) seconds: i32,
    /// This is not bounded to a single second. It is only reduced into
    /// `[0, 1_000_000_000)` by normalization.
    pub(crate) nanoseconds: i64,
}

impl TimeFields {
    pub(crate) const ZERO: TimeFields =
        TimeFields { hours: 0, minutes: 0, seconds: 0, nanoseconds: 0 };

    #[inline]
    pub(crate) const fn is_zero(&self) -> bool {
        self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanoseconds == 0
    }

    /// Carries nanoseconds into seconds, seconds into minutes and minutes
    /// into hours.
    ///
    /// Nanoseconds are floored so that the remainder is always in the range
    /// `[0, 1_000_000_000)`. Seconds and minutes are truncated. Hours are
    /// returned as an `i64` and left to the caller to narrow, since they may
    /// carry further into days.
    fn carry_to_hours(self) -> Result<(i64, TimeFields), Error> {
        let seconds = i64::from(self.seconds)
            .safe_add(self.nanoseconds.floor_div(NANOS_PER_SECOND)?)?;
        let nanoseconds = self.nanoseconds.floor_mod(NANOS_PER_SECOND)?;
        let minutes = i64::from(self.minutes)
            .safe_add(seconds.safe_div(SECONDS_PER_MINUTE)?)?;
        let seconds = seconds % SECONDS_PER_MINUTE;
        let hours = i64::from(self.hours)
            .safe_add(minutes.safe_div(MINUTES_PER_HOUR)?)?;
        let minutes = minutes % MINUTES_PER_HOUR;
        let rest = TimeFields {
            hours: 0,
            minutes: math::to_i32(minutes)?,
            seconds: math::to_i32(seconds)?,
            nanoseconds,
        };
        Ok((hours, rest))
    }

    pub(crate) fn normalized(self) -> Result<TimeFields, Error> {
        let (hours, rest) = self.carry_to_hours()?;
        Ok(TimeFields { hours: math::to_i32(hours)?, ..rest })
    }

    /// Like `normalized`, but also carries whole 24 hour days out of the
    /// hours field. The days carried are returned separately.
    pub(crate) fn normalized_with_24_hour_days(
        self,
    ) -> Result<(i64, TimeFields), Error> {
        let (hours, rest) = self.carry_to_hours()?;
        let days = hours.safe_div(HOURS_PER_DAY)?;
        let hours = math::to_i32(hours % HOURS_PER_DAY)?;
        Ok((days, TimeFields { hours, ..rest }))
    }

    pub(crate) fn checked_mul(self, scalar: i32) -> Result<TimeFields, Error> {
        Ok(TimeFields {
            hours: self.hours.safe_mul(scalar)?,
            minutes: self.minutes.safe_mul(scalar)?,
            seconds: self.seconds.safe_mul(scalar)?,
            nanoseconds: self.nanoseconds.safe_mul(i64::from(scalar))?,
        })
    }

    pub(crate) fn checked_div(self, divisor: i32) -> Result<TimeFields, Error> {
        Ok(TimeFields {
            hours: self.hours.safe_div(divisor)?,
            minutes: self.minutes.safe_div(divisor)?,
            seconds: self.seconds.safe_div(divisor)?,
            nanoseconds: self.nanoseconds.safe_div(i64::from(divisor))?,
        })
    }

    pub(crate) fn checked_neg(self) -> Result<TimeFields, Error> {
        Ok(TimeFields {
            hours: self.hours.safe_neg()?,
            minutes: self.minutes.safe_neg()?,
            seconds: self.seconds.safe_neg()?,
            nanoseconds: self.nanoseconds.safe_neg()?,
        })
    }

    /// Returns the seconds and nanoseconds fields as a single number of
    /// nanoseconds.
    pub(crate) fn seconds_and_nanos(&self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_PER_SECOND)
            + i128::from(self.nanoseconds)
    }
}
