/// A unit of calendar or clock time.
///
/// Only seven of these units are stored in a [`Period`](crate::Period):
/// years, months, days, hours, minutes, seconds and nanoseconds. The rest
/// are accepted by [`Period::of`](crate::Period::of) and converted into one
/// of those by a fixed multiplier. For example, a quarter is 3 months and a
/// week is 7 days.
///
/// # Example: ordering
///
/// Bigger units compare greater than smaller units.
///
/// ```
/// use calperiod::Unit;
///
/// assert!(Unit::Millennium > Unit::Year);
/// assert!(Unit::Week > Unit::Day);
/// assert!(Unit::HalfDay > Unit::Hour);
/// assert!(Unit::Microsecond > Unit::Nanosecond);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Unit {
    /// The smallest unit stored in a period.
    Nanosecond = 0,
    /// 1,000 nanoseconds.
    Microsecond = 1,
    /// 1,000,000 nanoseconds.
    Millisecond = 2,
    /// A second is always 1,000,000,000 nanoseconds. Leap seconds are not
    /// modeled.
    Second = 3,
    /// A minute is always 60 seconds.
    Minute = 4,
    /// An hour is always 60 minutes.
    Hour = 5,
    /// 12 hours.
    HalfDay = 6,
    /// A calendar day. Its length is only fixed when a caller explicitly
    /// asks for 24 hour days.
    Day = 7,
    /// 7 days.
    Week = 8,
    /// A calendar month. It has one of 28, 29, 30 or 31 days.
    Month = 9,
    /// 3 months.
    Quarter = 10,
    /// 6 months.
    HalfYear = 11,
    /// A calendar year, usually with 365 days and 366 in leap years.
    Year = 12,
    /// 10 years.
    Decade = 13,
    /// 100 years.
    Century = 14,
    /// 1,000 years.
    Millennium = 15,
}

impl Unit {
    /// Returns the unit stored in a period that this unit converts to,
    /// along with the number of those units in one of this unit.
    pub(crate) fn stored(self) -> (Unit, i32) {
        match self {
            Unit::Nanosecond => (Unit::Nanosecond, 1),
            Unit::Microsecond => (Unit::Nanosecond, 1_000),
            Unit::Millisecond => (Unit::Nanosecond, 1_000_000),
            Unit::Second => (Unit::Second, 1),
            Unit::Minute => (Unit::Minute, 1),
            Unit::Hour => (Unit::Hour, 1),
            Unit::HalfDay => (Unit::Hour, 12),
            Unit::Day => (Unit::Day, 1),
            Unit::Week => (Unit::Day, 7),
            Unit::Month => (Unit::Month, 1),
            Unit::Quarter => (Unit::Month, 3),
            Unit::HalfYear => (Unit::Month, 6),
            Unit::Year => (Unit::Year, 1),
            Unit::Decade => (Unit::Year, 10),
            Unit::Century => (Unit::Year, 100),
            Unit::Millennium => (Unit::Year, 1_000),
        }
    }

    /// A human readable singular description of this unit of time.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::Unit;
    ///
    /// assert_eq!(Unit::HalfYear.singular(), "half-year");
    /// assert_eq!(Unit::Century.singular(), "century");
    /// ```
    pub fn singular(&self) -> &'static str {
        match *self {
            Unit::Nanosecond => "nanosecond",
            Unit::Microsecond => "microsecond",
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::HalfDay => "half-day",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Quarter => "quarter",
            Unit::HalfYear => "half-year",
            Unit::Year => "year",
            Unit::Decade => "decade",
            Unit::Century => "century",
            Unit::Millennium => "millennium",
        }
    }

    /// A human readable plural description of this unit of time.
    ///
    /// This is what error messages use, e.g., "non-zero months".
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::Unit;
    ///
    /// assert_eq!(Unit::Millennium.plural(), "millennia");
    /// assert_eq!(Unit::Day.plural(), "days");
    /// ```
    pub fn plural(&self) -> &'static str {
        match *self {
            Unit::Nanosecond => "nanoseconds",
            Unit::Microsecond => "microseconds",
            Unit::Millisecond => "milliseconds",
            Unit::Second => "seconds",
            Unit::Minute => "minutes",
            Unit::Hour => "hours",
            Unit::HalfDay => "half-days",
            Unit::Day => "days",
            Unit::Week => "weeks",
            Unit::Month => "months",
            Unit::Quarter => "quarters",
            Unit::HalfYear => "half-years",
            Unit::Year => "years",
            Unit::Decade => "decades",
            Unit::Century => "centuries",
            Unit::Millennium => "millennia",
        }
    }
}

#[cfg(test)]
impl Unit {
    const ALL: [Unit; 16] = [
        Unit::Nanosecond,
        Unit::Microsecond,
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::HalfDay,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Quarter,
        Unit::HalfYear,
        Unit::Year,
        Unit::Decade,
        Unit::Century,
        Unit::Millennium,
    ];
}

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        let n = <usize as quickcheck::Arbitrary>::arbitrary(g);
        Unit::ALL[n % Unit::ALL.len()]
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        let n = *self as usize;
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&n)
                .map(|n| Unit::ALL[n % Unit::ALL.len()]),
        )
    }
}
