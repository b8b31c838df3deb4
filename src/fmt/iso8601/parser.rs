use crate::{
    error::{
        fmt::{ParseError, ParseErrorKind as K},
        Error,
    },
    Period, Unit,
};

/// A parser for ISO 8601 periods.
#[derive(Debug)]
pub(super) struct PeriodParser {
    /// There are currently no configuration options for this parser.
    _priv: (),
}

impl PeriodParser {
    pub(super) const fn new() -> PeriodParser {
        PeriodParser { _priv: () }
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub(super) fn parse_period<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Period, Error> {
        #[inline(never)]
        fn imp(input: &[u8]) -> Result<Period, Error> {
            Scanner::new(input).period()
        }
        imp(input.as_ref())
    }
}

/// Which side of the `T` designator the scanner is on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Section {
    Date,
    Time,
}

/// A cursor over the input of a single parse.
///
/// Every error is built from `pos` (or a position saved from it) at the
/// moment the failure is detected.
struct Scanner<'i> {
    input: &'i [u8],
    pos: usize,
    /// Set by a leading `-` before `P`. Flips the sign of every unit.
    negate: bool,
    /// The smallest unit parsed so far. Units must strictly decrease.
    last: Option<Unit>,
    /// Years, months, days, hours, minutes and seconds.
    values: [i32; 6],
    nanoseconds: i64,
}

impl<'i> Scanner<'i> {
    fn new(input: &'i [u8]) -> Scanner<'i> {
        Scanner {
            input,
            pos: 0,
            negate: false,
            last: None,
            values: [0; 6],
            nanoseconds: 0,
        }
    }

    fn period(mut self) -> Result<Period, Error> {
        if self.input.is_empty() {
            return Err(self.error(0, K::Empty));
        }
        match self.peek() {
            Some(b'+') => self.pos += 1,
            Some(b'-') => {
                self.negate = true;
                self.pos += 1;
            }
            _ => {}
        }
        match self.peek() {
            Some(b'P' | b'p') => self.pos += 1,
            found => {
                return Err(
                    self.error(self.pos, K::ExpectedPeriodPrefix { found })
                );
            }
        }
        if self.input[self.pos..].eq_ignore_ascii_case(b"T0S") {
            return Ok(Period::ZERO);
        }

        while self.peek().map_or(false, |byte| !is_time_designator(byte)) {
            self.unit(Section::Date)?;
        }
        if self.peek().map_or(false, is_time_designator) {
            let designator = self.pos;
            self.pos += 1;
            while let Some(byte) = self.peek() {
                if is_time_designator(byte) {
                    return Err(
                        self.error(self.pos, K::DuplicateTimeDesignator)
                    );
                }
                self.unit(Section::Time)?;
            }
            if self.last.map_or(true, |unit| unit > Unit::Hour) {
                return Err(self.error(designator, K::TimeWithoutUnits));
            }
        }
        if self.last.is_none() {
            return Err(self.error(self.pos, K::NoUnits));
        }

        let [years, months, days, hours, minutes, seconds] = self.values;
        Ok(Period::constant(
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            self.nanoseconds,
        ))
    }

    /// Scans one signed unit value and its designator, e.g., `-12M`.
    fn unit(&mut self, section: Section) -> Result<(), Error> {
        let start = self.pos;
        let mut negative = self.negate;
        match self.peek() {
            Some(b'+') => self.pos += 1,
            Some(b'-') => {
                negative = !negative;
                self.pos += 1;
            }
            _ => {}
        }

        let first_digit = self.pos;
        let magnitude = self.digits();
        if self.pos == first_digit {
            let found = self.peek();
            return Err(self.error(start, K::ExpectedDigits { found }));
        }
        let fraction = self.fraction(start)?;
        let unit = self.designator(start, section)?;
        if self.last.map_or(false, |last| unit >= last) {
            return Err(self.error(start, K::UnitOutOfOrder { unit }));
        }
        if fraction.is_some() && unit != Unit::Second {
            return Err(self.error(start, K::FractionNotAllowed { unit }));
        }

        let value = magnitude
            .map(|m| if negative { -m } else { m })
            .and_then(|value| i32::try_from(value).ok())
            .ok_or_else(|| {
                self.error(first_digit, K::FieldOverflow { unit })
            })?;
        let index = match unit {
            Unit::Year => 0,
            Unit::Month => 1,
            Unit::Day => 2,
            Unit::Hour => 3,
            Unit::Minute => 4,
            _ => 5,
        };
        self.values[index] = value;
        if let Some(nanos) = fraction {
            self.nanoseconds = if negative { -nanos } else { nanos };
        }
        self.last = Some(unit);
        Ok(())
    }

    /// Consumes ASCII digits, returning `None` when their value does not
    /// fit in an `i64`. All digits are consumed either way.
    fn digits(&mut self) -> Option<i64> {
        let mut value = Some(0i64);
        while let Some(byte @ b'0'..=b'9') = self.peek() {
            let digit = i64::from(byte - b'0');
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(digit));
            self.pos += 1;
        }
        value
    }

    /// Consumes an optional `.` or `,` separated fraction, returning it
    /// scaled to nanoseconds.
    fn fraction(&mut self, start: usize) -> Result<Option<i64>, Error> {
        if !matches!(self.peek(), Some(b'.' | b',')) {
            return Ok(None);
        }
        self.pos += 1;
        let digits_start = self.pos;
        let mut nanos = 0i64;
        while let Some(byte @ b'0'..=b'9') = self.peek() {
            if self.pos - digits_start == 9 {
                return Err(self.error(start, K::FractionTooLong));
            }
            nanos = nanos * 10 + i64::from(byte - b'0');
            self.pos += 1;
        }
        let len = self.pos - digits_start;
        if len == 0 {
            return Err(self.error(start, K::ExpectedFractionDigits));
        }
        for _ in len..9 {
            nanos *= 10;
        }
        Ok(Some(nanos))
    }

    fn designator(
        &mut self,
        start: usize,
        section: Section,
    ) -> Result<Unit, Error> {
        let Some(byte) = self.peek() else {
            return Err(self.error(start, K::ExpectedDesignator { found: None }));
        };
        let unit = match (section, byte.to_ascii_uppercase()) {
            (Section::Date, b'Y') => Unit::Year,
            (Section::Date, b'M') => Unit::Month,
            (Section::Date, b'D') => Unit::Day,
            (Section::Time, b'H') => Unit::Hour,
            (Section::Time, b'M') => Unit::Minute,
            (Section::Time, b'S') => Unit::Second,
            (Section::Date, b'H') => {
                let unit = Unit::Hour;
                return Err(self.error(start, K::TimeUnitWithoutTime { unit }));
            }
            (Section::Date, b'S') => {
                let unit = Unit::Second;
                return Err(self.error(start, K::TimeUnitWithoutTime { unit }));
            }
            (Section::Time, b'Y') => {
                let unit = Unit::Year;
                return Err(self.error(start, K::UnitOutOfOrder { unit }));
            }
            (Section::Time, b'D') => {
                let unit = Unit::Day;
                return Err(self.error(start, K::UnitOutOfOrder { unit }));
            }
            (_, found) if found.is_ascii_alphabetic() => {
                let found = byte;
                return Err(
                    self.error(start, K::UnrecognizedDesignator { found })
                );
            }
            _ => {
                let found = Some(byte);
                return Err(self.error(start, K::ExpectedDesignator { found }));
            }
        };
        self.pos += 1;
        Ok(unit)
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[cold]
    #[inline(never)]
    fn error(&self, position: usize, kind: K) -> Error {
        Error::from(ParseError::new(self.input, position, kind))
    }
}

fn is_time_designator(byte: u8) -> bool {
    matches!(byte, b'T' | b't')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Period, Error> {
        PeriodParser::new().parse_period(input)
    }

    fn position(input: &str) -> usize {
        let err = parse(input).unwrap_err();
        assert!(err.is_parse(), "{input:?}: {err}");
        err.parse_position().unwrap()
    }

    #[test]
    fn ok_full() {
        assert_eq!(
            parse("P1Y2M3DT4H5M6.7S").unwrap(),
            Period::constant(1, 2, 3, 4, 5, 6, 700_000_000),
        );
        assert_eq!(
            parse("p1y2m3dt4h5m6,000000007s").unwrap(),
            Period::constant(1, 2, 3, 4, 5, 6, 7),
        );
        assert_eq!(parse("P1M").unwrap(), Period::constant(0, 1, 0, 0, 0, 0, 0));
        assert_eq!(parse("PT1M").unwrap(), Period::constant(0, 0, 0, 0, 1, 0, 0));
    }

    #[test]
    fn ok_zero() {
        assert_eq!(parse("PT0S").unwrap(), Period::ZERO);
        assert_eq!(parse("pt0s").unwrap(), Period::ZERO);
        assert_eq!(parse("-PT0S").unwrap(), Period::ZERO);
        assert_eq!(parse("P0Y0M0DT0H0M0.0S").unwrap(), Period::ZERO);
        assert_eq!(parse("P0D").unwrap(), Period::ZERO);
    }

    #[test]
    fn ok_signs() {
        assert_eq!(
            parse("P-1Y+2M-3D").unwrap(),
            Period::constant(-1, 2, -3, 0, 0, 0, 0),
        );
        assert_eq!(
            parse("-P1Y-2MT3H").unwrap(),
            Period::constant(-1, 2, 0, -3, 0, 0, 0),
        );
        assert_eq!(
            parse("+PT-1.5S").unwrap(),
            Period::constant(0, 0, 0, 0, 0, -1, -500_000_000),
        );
        assert_eq!(
            parse("PT-0.1S").unwrap(),
            Period::constant(0, 0, 0, 0, 0, 0, -100_000_000),
        );
    }

    #[test]
    fn ok_limits() {
        assert_eq!(parse("PT2147483647S").unwrap().get_seconds(), i32::MAX);
        assert_eq!(parse("PT-2147483648S").unwrap().get_seconds(), i32::MIN);
        assert_eq!(parse("-PT2147483648S").unwrap().get_seconds(), i32::MIN);
        assert_eq!(parse("P-0002147483648D").unwrap().get_days(), i32::MIN);
        assert_eq!(
            parse("PT0.999999999S").unwrap().get_nanoseconds(),
            999_999_999,
        );
    }

    #[test]
    fn err_positions() {
        assert_eq!(position(""), 0);
        assert_eq!(position("1D"), 0);
        assert_eq!(position("-"), 1);
        assert_eq!(position("P"), 1);
        assert_eq!(position("-P"), 2);
        assert_eq!(position("PT"), 1);
        assert_eq!(position("P1YT"), 3);
        assert_eq!(position("PT1HT1M"), 4);
        assert_eq!(position("P1Y1Y"), 3);
        assert_eq!(position("P1D1M"), 3);
        assert_eq!(position("PT1S1H"), 4);
        assert_eq!(position("P1H"), 1);
        assert_eq!(position("PT1D"), 2);
        assert_eq!(position("P1.5D"), 1);
        assert_eq!(position("PT1."), 2);
        assert_eq!(position("PT1.0000000001S"), 2);
        assert_eq!(position("P1"), 1);
        assert_eq!(position("P1W"), 1);
        assert_eq!(position("P1Y-"), 3);
        assert_eq!(position("P1Y-Y"), 3);
        assert_eq!(position("P1Y2"), 3);
        assert_eq!(position("PT123456789123456789123456789S"), 2);
        assert_eq!(position("PT-2147483649S"), 3);
        assert_eq!(position("P3Y99999999999M"), 3);
        assert_eq!(position("-PT-2147483648S"), 4);
    }

    #[test]
    fn err_messages() {
        insta::assert_snapshot!(
            parse("").unwrap_err(),
            @r###"failed to parse "" as an ISO 8601 period at position 0: an empty string is not a valid period"###,
        );
        insta::assert_snapshot!(
            parse("Q1D").unwrap_err(),
            @r###"failed to parse "Q1D" as an ISO 8601 period at position 0: expected `P` or `p` to start a period, but found `Q`"###,
        );
        insta::assert_snapshot!(
            parse("P").unwrap_err(),
            @r###"failed to parse "P" as an ISO 8601 period at position 1: found `P` prefix, but no unit values followed it"###,
        );
        insta::assert_snapshot!(
            parse("P1YT").unwrap_err(),
            @r###"failed to parse "P1YT" as an ISO 8601 period at position 3: found `T` designator, but no time unit values followed it"###,
        );
        insta::assert_snapshot!(
            parse("PT123456789123456789123456789S").unwrap_err(),
            @r###"failed to parse "PT123456789123456789123456789S" as an ISO 8601 period at position 2: value for seconds is too big or too small to fit into a period"###,
        );
        insta::assert_snapshot!(
            parse("P2H").unwrap_err(),
            @r###"failed to parse "P2H" as an ISO 8601 period at position 1: found hours before the `T` designator, but time units must come after it"###,
        );
        insta::assert_snapshot!(
            parse("P1M1Y").unwrap_err(),
            @r###"failed to parse "P1M1Y" as an ISO 8601 period at position 3: found years out of order, units must appear at most once and from largest to smallest"###,
        );
        insta::assert_snapshot!(
            parse("PT1.5M").unwrap_err(),
            @r###"failed to parse "PT1.5M" as an ISO 8601 period at position 2: a fractional value is only allowed on seconds, but found one on minutes"###,
        );
        insta::assert_snapshot!(
            parse("P1\x00").unwrap_err(),
            @r###"failed to parse "P1\0" as an ISO 8601 period at position 1: expected a unit designator after the unit value, but found `\x00`"###,
        );
    }

    #[test]
    fn err_input_is_kept() {
        let err = PeriodParser::new().parse_period(b"P1\xFFD").unwrap_err();
        assert_eq!(err.parse_input(), Some("P1\u{FFFD}D"));
        assert_eq!(err.parse_position(), Some(1));
    }
}
