use alloc::boxed::Box;

use crate::{error, util::escape, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    StdFmtWriteAdapter,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            StdFmtWriteAdapter => {
                f.write_str("an error occurred when formatting an argument")
            }
        }
    }
}

/// A failure to parse an ISO 8601 period, along with where it happened.
///
/// Unlike other errors in this crate, a parse error is never wrapped with
/// more context. Its position refers to the input it carries.
#[derive(Clone, Debug)]
pub(crate) struct ParseError {
    input: Box<str>,
    position: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(
        input: &[u8],
        position: usize,
        kind: ParseErrorKind,
    ) -> ParseError {
        let input = alloc::string::String::from_utf8_lossy(input);
        ParseError { input: input.into(), position, kind }
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }
}

impl From<ParseError> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: ParseError) -> error::Error {
        error::ErrorKind::Parse(err).into()
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to parse {input:?} as an ISO 8601 period \
             at position {position}: {kind}",
            input = self.input,
            position = self.position,
            kind = self.kind,
        )
    }
}

/// The specific reason a period failed to parse.
#[derive(Clone, Debug)]
pub(crate) enum ParseErrorKind {
    DuplicateTimeDesignator,
    Empty,
    ExpectedDesignator { found: Option<u8> },
    ExpectedDigits { found: Option<u8> },
    ExpectedFractionDigits,
    ExpectedPeriodPrefix { found: Option<u8> },
    FieldOverflow { unit: Unit },
    FractionNotAllowed { unit: Unit },
    FractionTooLong,
    NoUnits,
    TimeUnitWithoutTime { unit: Unit },
    TimeWithoutUnits,
    UnitOutOfOrder { unit: Unit },
    UnrecognizedDesignator { found: u8 },
}

impl core::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ParseErrorKind::*;

        match *self {
            DuplicateTimeDesignator => f.write_str(
                "found a second `T` designator, \
                 but a period may contain at most one",
            ),
            Empty => f.write_str("an empty string is not a valid period"),
            ExpectedDesignator { found: None } => f.write_str(
                "expected a unit designator after the unit value, \
                 but found end of input",
            ),
            ExpectedDesignator { found: Some(byte) } => write!(
                f,
                "expected a unit designator after the unit value, \
                 but found `{byte}`",
                byte = escape::Byte(byte),
            ),
            ExpectedDigits { found: None } => f.write_str(
                "expected an integer unit value, but found end of input",
            ),
            ExpectedDigits { found: Some(byte) } => write!(
                f,
                "expected an integer unit value, but found `{byte}`",
                byte = escape::Byte(byte),
            ),
            ExpectedFractionDigits => f.write_str(
                "found decimal separator after seconds, \
                 but no fractional digits followed it",
            ),
            ExpectedPeriodPrefix { found: None } => f.write_str(
                "expected `P` or `p` to start a period, \
                 but found end of input",
            ),
            ExpectedPeriodPrefix { found: Some(byte) } => write!(
                f,
                "expected `P` or `p` to start a period, but found `{byte}`",
                byte = escape::Byte(byte),
            ),
            FieldOverflow { unit } => write!(
                f,
                "value for {unit} is too big or too small \
                 to fit into a period",
                unit = unit.plural(),
            ),
            FractionNotAllowed { unit } => write!(
                f,
                "a fractional value is only allowed on seconds, \
                 but found one on {unit}",
                unit = unit.plural(),
            ),
            FractionTooLong => f.write_str(
                "fractional seconds may have at most 9 digits \
                 (nanosecond precision)",
            ),
            NoUnits => f.write_str(
                "found `P` prefix, but no unit values followed it",
            ),
            TimeUnitWithoutTime { unit } => write!(
                f,
                "found {unit} before the `T` designator, \
                 but time units must come after it",
                unit = unit.plural(),
            ),
            TimeWithoutUnits => f.write_str(
                "found `T` designator, but no time unit values followed it",
            ),
            UnitOutOfOrder { unit } => write!(
                f,
                "found {unit} out of order, units must appear \
                 at most once and from largest to smallest",
                unit = unit.plural(),
            ),
            UnrecognizedDesignator { found } => write!(
                f,
                "found unrecognized unit designator `{found}`",
                found = escape::Byte(found),
            ),
        }
    }
}
