/*!
A parser and printer for the ISO 8601 duration format, as used by periods.

The format starts with `P`, followed by date units and then, after a `T`,
time units. Each unit is an integer followed by a designator:

```text
P1Y2M3DT4H5M6.789S
```

The details that matter:

* `P` and `T` are case insensitive. The parser also accepts lowercase unit
designators, and the printer can be configured to write them.
* Each unit may have its own sign, e.g., `P1Y-2M`. A sign before `P`
negates every unit. The printer only ever writes signs on units.
* Units must appear from biggest to smallest, at most once each. Weeks are
not supported.
* Only seconds may have a fraction, separated by `.` or `,`, with at most 9
digits. The printer always uses `.`.
* A zero period prints as `PT0S`.

Parse errors report the position of the offending token via
[`Error::parse_position`](crate::Error::parse_position).

# Example

```
use calperiod::{fmt::iso8601::{PeriodParser, PeriodPrinter}, ToPeriod};

static PARSER: PeriodParser = PeriodParser::new();
static PRINTER: PeriodPrinter = PeriodPrinter::new().lowercase(true);

let period = PARSER.parse_period("P1Y2M3DT4H5M6,789S")?;
assert_eq!(
    period,
    1.year().months(2).days(3).hours(4).minutes(5).seconds(6).nanoseconds(789_000_000),
);
assert_eq!(PRINTER.period_to_string(&period), "P1y2m3dT4h5m6.789s");

let err = PARSER.parse_period("P1Y2Y").unwrap_err();
assert_eq!(err.parse_position(), Some(3));

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::string::String;

use crate::{error::Error, fmt::Write, Duration, Period};

mod parser;
mod printer;

/// The parser used by `FromStr` on [`Period`] and [`Duration`].
pub(crate) static DEFAULT_PERIOD_PARSER: PeriodParser = PeriodParser::new();

/// The printer used by `Display` on [`Period`] and [`Duration`].
pub(crate) static DEFAULT_PERIOD_PRINTER: PeriodPrinter =
    PeriodPrinter::new();

/// A parser for ISO 8601 periods.
///
/// This has no configuration. It exists so that parsing can be done from
/// bytes, and to mirror [`PeriodPrinter`].
#[derive(Debug)]
pub struct PeriodParser {
    p: parser::PeriodParser,
}

impl PeriodParser {
    /// Create a new parser.
    ///
    /// This is a `const` function so that it can be used in a `static`.
    #[inline]
    pub const fn new() -> PeriodParser {
        PeriodParser { p: parser::PeriodParser::new() }
    }

    /// Parse an ISO 8601 period.
    ///
    /// The input must be entirely consumed. Anything trailing the last unit
    /// is an error.
    ///
    /// # Errors
    ///
    /// When the input is not a valid period, or when a unit's value does not
    /// fit in its field. The error reports where the offending token starts.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{fmt::iso8601::PeriodParser, Period};
    ///
    /// let parser = PeriodParser::new();
    /// assert_eq!(parser.parse_period(b"PT0.1S")?, Period::ZERO.nanoseconds(100_000_000));
    ///
    /// let err = parser.parse_period("PT123456789123456789123456789S").unwrap_err();
    /// assert_eq!(err.parse_position(), Some(2));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse_period<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Period, Error> {
        self.p.parse_period(input)
    }

    /// Parse an ISO 8601 period and convert it to a fixed length duration.
    ///
    /// Days are treated as 24 hours.
    ///
    /// # Errors
    ///
    /// When parsing fails, or when the period has non-zero years or months,
    /// or when the duration overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{fmt::iso8601::PeriodParser, Duration};
    ///
    /// let parser = PeriodParser::new();
    /// assert_eq!(parser.parse_duration("P1DT1.5S")?, Duration::new(86_401, 500_000_000));
    /// assert!(parser.parse_duration("P1M").unwrap_err().is_non_fixed_unit());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse_duration<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Duration, Error> {
        self.p.parse_period(input)?.to_duration()
    }
}

impl Default for PeriodParser {
    fn default() -> PeriodParser {
        PeriodParser::new()
    }
}

/// A printer for ISO 8601 periods.
///
/// The output of this printer is accepted by [`PeriodParser`], unless the
/// seconds and nanoseconds of a period combine into more seconds than fit in
/// an `i32`.
#[derive(Debug)]
pub struct PeriodPrinter {
    p: printer::PeriodPrinter,
}

impl PeriodPrinter {
    /// Create a new printer that uses uppercase unit designators.
    #[inline]
    pub const fn new() -> PeriodPrinter {
        PeriodPrinter { p: printer::PeriodPrinter::new() }
    }

    /// When enabled, unit designators are written in lowercase, e.g.,
    /// `P1y2mT3h` instead of `P1Y2MT3H`. The `P` and `T` designators are
    /// always uppercase, since they are hard to tell apart from the units
    /// otherwise.
    ///
    /// This is disabled by default.
    #[inline]
    pub const fn lowercase(self, yes: bool) -> PeriodPrinter {
        PeriodPrinter { p: self.p.lowercase(yes) }
    }

    /// Print a period to the writer given.
    ///
    /// Seconds and nanoseconds are printed as a single seconds unit with a
    /// fraction. When they have different signs, they are combined before
    /// printing. This means the output may parse back into a period with a
    /// different split between the two fields, although the total is the
    /// same.
    ///
    /// # Errors
    ///
    /// Only when the writer returns an error.
    #[inline]
    pub fn print_period<W: Write>(
        &self,
        period: &Period,
        wtr: W,
    ) -> Result<(), Error> {
        self.p.print_period(period, wtr)
    }

    /// Print a period to a new string.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{fmt::iso8601::PeriodPrinter, Period};
    ///
    /// let printer = PeriodPrinter::new();
    /// let p = Period::from_time_fields(0, 0, 1, -900_000_000);
    /// assert_eq!(printer.period_to_string(&p), "PT0.1S");
    /// ```
    pub fn period_to_string(&self, period: &Period) -> String {
        let mut buf = String::with_capacity(8);
        // OK because writing to `String` never fails.
        self.print_period(period, &mut buf).unwrap();
        buf
    }

    /// Print a fixed length duration to the writer given, as a period with
    /// only a seconds unit.
    ///
    /// # Errors
    ///
    /// Only when the writer returns an error.
    #[inline]
    pub fn print_duration<W: Write>(
        &self,
        duration: &Duration,
        wtr: W,
    ) -> Result<(), Error> {
        self.p.print_duration(duration, wtr)
    }

    /// Print a fixed length duration to a new string.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{fmt::iso8601::PeriodPrinter, Duration};
    ///
    /// let printer = PeriodPrinter::new();
    /// assert_eq!(printer.duration_to_string(&Duration::new(-2, 250_000_000)), "PT-1.75S");
    /// ```
    pub fn duration_to_string(&self, duration: &Duration) -> String {
        let mut buf = String::with_capacity(8);
        // OK because writing to `String` never fails.
        self.print_duration(duration, &mut buf).unwrap();
        buf
    }
}

impl Default for PeriodPrinter {
    fn default() -> PeriodPrinter {
        PeriodPrinter::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::ToPeriod;

    use super::*;

    quickcheck::quickcheck! {
        fn prop_print_parse_round_trip(period: Period) -> quickcheck::TestResult {
            let (seconds, nanos) =
                (period.get_seconds(), period.get_nanoseconds());
            let same_sign = (seconds >= 0 && nanos >= 0)
                || (seconds <= 0 && nanos <= 0);
            if !same_sign || nanos.unsigned_abs() >= 1_000_000_000 {
                return quickcheck::TestResult::discard();
            }
            let printed = DEFAULT_PERIOD_PRINTER.period_to_string(&period);
            let parsed = DEFAULT_PERIOD_PARSER.parse_period(&printed).unwrap();
            quickcheck::TestResult::from_bool(parsed == period)
        }
    }

    #[test]
    fn extreme_nanoseconds() {
        let p = Period::ZERO.nanoseconds(-999_999_999);
        let printed = DEFAULT_PERIOD_PRINTER.period_to_string(&p);
        assert_eq!(printed, "PT-0.999999999S");
        assert_eq!(DEFAULT_PERIOD_PARSER.parse_period(&printed).unwrap(), p);

        // Combined with the seconds, this is more seconds than a period can
        // hold, so parsing reports an overflow instead of panicking.
        let p = Period::ZERO.nanoseconds(i64::MIN);
        let printed = DEFAULT_PERIOD_PRINTER.period_to_string(&p);
        assert_eq!(printed, "PT-9223372036.854775808S");
        let err = DEFAULT_PERIOD_PARSER.parse_period(&printed).unwrap_err();
        assert_eq!(err.parse_position(), Some(3));
    }

    #[test]
    fn duration_round_trip() {
        let d = Duration::new(-2, 250_000_000);
        let printed = DEFAULT_PERIOD_PRINTER.duration_to_string(&d);
        assert_eq!(DEFAULT_PERIOD_PARSER.parse_duration(printed).unwrap(), d);
    }

    #[test]
    fn lowercase_round_trip() {
        let p = 1.year().months(2).days(3).hours(4).minutes(5).seconds(6);
        let printer = PeriodPrinter::new().lowercase(true);
        let printed = printer.period_to_string(&p);
        assert_eq!(printed, "P1y2m3dT4h5m6s");
        assert_eq!(DEFAULT_PERIOD_PARSER.parse_period(printed).unwrap(), p);
    }
}
