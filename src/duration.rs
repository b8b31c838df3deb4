use crate::{
    error::{duration::Error as E, Error, ErrorContext},
    fmt::{
        iso8601::{DEFAULT_PERIOD_PARSER, DEFAULT_PERIOD_PRINTER},
        StdFmtWrite,
    },
    util::math::{self, SafeInt},
};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// A signed fixed length amount of time, with nanosecond precision.
///
/// Unlike a [`Period`](crate::Period), a duration has no calendar units. It
/// is a number of seconds along with a number of nanoseconds in the range
/// `[0, 1_000_000_000)`. A negative duration with a fractional part borrows
/// from its seconds, e.g., -1.5 seconds is -2 seconds plus 500,000,000
/// nanoseconds.
///
/// Durations are produced by [`Period::to_duration`](crate::Period::to_duration)
/// and can be converted back into a period with `Period::try_from`.
///
/// # Display
///
/// A duration prints as an ISO 8601 period with only seconds:
///
/// ```
/// use calperiod::Duration;
///
/// assert_eq!(Duration::new(90, 0).to_string(), "PT90S");
/// assert_eq!(Duration::new(-2, 500_000_000).to_string(), "PT-1.5S");
/// ```
///
/// Parsing accepts any period without years or months. Since a period's
/// seconds are an `i32`, durations of more than about 68 years print in a
/// form that does not parse back.
///
/// ```
/// use calperiod::Duration;
///
/// let d: Duration = "P1DT0.5S".parse()?;
/// assert_eq!(d, Duration::new(86_400, 500_000_000));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Duration {
    secs: i64,
    /// Always in `[0, 1_000_000_000)`.
    nanos: i32,
}

impl Duration {
    /// A duration of zero time.
    pub const ZERO: Duration = Duration { secs: 0, nanos: 0 };

    /// Creates a new duration from seconds and nanoseconds.
    ///
    /// The nanoseconds may be any value. Whole seconds are carried out of it
    /// with floor division, leaving a remainder in `[0, 1_000_000_000)`.
    ///
    /// # Panics
    ///
    /// When carrying the nanoseconds into the seconds overflows an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::Duration;
    ///
    /// let d = Duration::new(1, -1);
    /// assert_eq!((d.as_secs(), d.subsec_nanos()), (0, 999_999_999));
    ///
    /// let d = Duration::new(0, 2_500_000_000);
    /// assert_eq!((d.as_secs(), d.subsec_nanos()), (2, 500_000_000));
    /// ```
    #[inline]
    pub fn new(secs: i64, nanos: i64) -> Duration {
        Duration::try_new(secs, nanos)
            .expect("overflow when creating `Duration`")
    }

    fn try_new(secs: i64, nanos: i64) -> Result<Duration, Error> {
        let secs = secs.safe_add(nanos.floor_div(NANOS_PER_SECOND)?)?;
        let nanos = math::to_i32(nanos.floor_mod(NANOS_PER_SECOND)?)?;
        Ok(Duration { secs, nanos })
    }

    /// The caller must guarantee `nanos` is in `[0, 1_000_000_000)`.
    #[inline]
    pub(crate) const fn new_unchecked(secs: i64, nanos: i32) -> Duration {
        debug_assert!(0 <= nanos && nanos < NANOS_PER_SECOND as i32);
        Duration { secs, nanos }
    }

    /// Creates a duration from a whole number of seconds.
    #[inline]
    pub const fn from_secs(secs: i64) -> Duration {
        Duration { secs, nanos: 0 }
    }

    /// Returns the number of whole seconds in this duration, rounded toward
    /// negative infinity.
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.secs
    }

    /// Returns the fractional part of this duration in nanoseconds. This is
    /// never negative.
    #[inline]
    pub const fn subsec_nanos(&self) -> i32 {
        self.nanos
    }

    /// Returns the total number of nanoseconds in this duration.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::Duration;
    ///
    /// assert_eq!(Duration::new(-2, 500_000_000).as_nanos(), -1_500_000_000);
    /// ```
    #[inline]
    pub const fn as_nanos(&self) -> i128 {
        self.secs as i128 * NANOS_PER_SECOND as i128 + self.nanos as i128
    }

    /// Returns true if this duration is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    /// Returns true if this duration is less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.secs < 0
    }
}

impl core::fmt::Display for Duration {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_PERIOD_PRINTER
            .print_duration(self, StdFmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for Duration {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<Duration, Error> {
        DEFAULT_PERIOD_PARSER.parse_duration(string)
    }
}

/// Converts to an unsigned standard library duration.
///
/// # Errors
///
/// When this duration is negative.
impl TryFrom<Duration> for core::time::Duration {
    type Error = Error;

    fn try_from(d: Duration) -> Result<core::time::Duration, Error> {
        let secs = u64::try_from(d.secs)
            .map_err(|_| Error::from(E::NegativeUnsigned))
            .context(E::FailedToUnsigned)?;
        // Never negative, by the invariant on `Duration::nanos`.
        let nanos = d.nanos.unsigned_abs();
        Ok(core::time::Duration::new(secs, nanos))
    }
}

/// Converts from an unsigned standard library duration.
///
/// # Errors
///
/// When the number of seconds overflows an `i64`.
impl TryFrom<core::time::Duration> for Duration {
    type Error = Error;

    fn try_from(d: core::time::Duration) -> Result<Duration, Error> {
        let secs = math::to_i64(d.as_secs()).context(E::FailedFromUnsigned)?;
        // `subsec_nanos` is always less than one billion.
        let nanos = d.subsec_nanos() as i32;
        Ok(Duration::new_unchecked(secs, nanos))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Duration {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Duration {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        use serde::de;

        struct DurationVisitor;

        impl<'de> de::Visitor<'de> for DurationVisitor {
            type Value = Duration;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an ISO 8601 period string without years or months")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Duration, E> {
                DEFAULT_PERIOD_PARSER
                    .parse_duration(value)
                    .map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<Duration, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_bytes(DurationVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        let secs = <i64 as quickcheck::Arbitrary>::arbitrary(g);
        let nanos = <i32 as quickcheck::Arbitrary>::arbitrary(g);
        Duration::new_unchecked(secs, nanos.rem_euclid(1_000_000_000))
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&(self.secs, self.nanos))
                .map(|(secs, nanos)| Duration::new_unchecked(secs, nanos)),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn new_floors_nanoseconds() {
        let d = Duration::new(-3_723, -4);
        assert_eq!((d.as_secs(), d.subsec_nanos()), (-3_724, 999_999_996));
        let d = Duration::new(i64::MIN, 999_999_999);
        assert_eq!((d.as_secs(), d.subsec_nanos()), (i64::MIN, 999_999_999));
        assert!(Duration::try_new(i64::MAX, 1_000_000_000)
            .unwrap_err()
            .is_overflow());
        assert!(Duration::try_new(i64::MIN, -1).unwrap_err().is_overflow());
    }

    #[test]
    fn predicates() {
        assert!(Duration::ZERO.is_zero());
        assert!(!Duration::ZERO.is_negative());
        assert!(Duration::new(0, -1).is_negative());
        assert!(!Duration::new(0, 1).is_negative());
        assert!(Duration::new(-1, 0) < Duration::new(0, -1));
        assert_eq!(Duration::from_secs(5), Duration::new(4, 1_000_000_000));
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Duration::ZERO.to_string(), "PT0S");
        assert_eq!(Duration::new(0, -1).to_string(), "PT-0.000000001S");
        assert_eq!(
            "PT1H-0.5S".parse::<Duration>().unwrap(),
            Duration::new(3_599, 500_000_000),
        );
        let err = "P1Y".parse::<Duration>().unwrap_err();
        assert!(err.is_non_fixed_unit());
        insta::assert_snapshot!(
            err,
            @"cannot convert period with non-zero years to a fixed length duration, since years do not have a fixed length",
        );
    }

    #[test]
    fn to_unsigned() {
        let d = core::time::Duration::try_from(Duration::new(1, 5)).unwrap();
        assert_eq!(d, core::time::Duration::new(1, 5));

        let err =
            core::time::Duration::try_from(Duration::new(0, -1)).unwrap_err();
        assert!(err.is_invalid_argument());
        insta::assert_snapshot!(
            err,
            @"failed to convert signed duration to unsigned `core::time::Duration`: cannot convert negative duration to unsigned `core::time::Duration`",
        );
    }

    #[test]
    fn from_unsigned() {
        let d = Duration::try_from(core::time::Duration::new(7, 8)).unwrap();
        assert_eq!(d, Duration::new(7, 8));

        let big = core::time::Duration::new(u64::MAX, 0);
        let err = Duration::try_from(big).unwrap_err();
        assert!(err.is_overflow());
    }

    quickcheck::quickcheck! {
        fn prop_unsigned_round_trip(d: Duration) -> quickcheck::TestResult {
            let Ok(unsigned) = core::time::Duration::try_from(d) else {
                return quickcheck::TestResult::from_bool(d.is_negative());
            };
            quickcheck::TestResult::from_bool(
                Duration::try_from(unsigned).unwrap() == d,
            )
        }

        fn prop_display_parse_round_trip(d: Duration) -> quickcheck::TestResult {
            // Durations print as seconds only, and a period's seconds field
            // is an `i32`.
            if i32::try_from(d.as_secs()).is_err() {
                return quickcheck::TestResult::discard();
            }
            let parsed = d.to_string().parse::<Duration>().unwrap();
            quickcheck::TestResult::from_bool(parsed == d)
        }
    }
}
