/*!
Configurable support for printing and parsing periods.

The [`iso8601`] module contains a parser and a printer for the ISO 8601
duration format, which is what the `Display` and `FromStr` impls on
[`Period`](crate::Period) and [`Duration`](crate::Duration) use. Going
through the module directly allows some light configuration, and printing
to something other than a `core::fmt::Formatter` via the [`Write`] trait.
*/

use alloc::{string::String, vec::Vec};

use crate::error::{fmt::Error as E, Error};

use self::util::{Decimal, DecimalFormatter, Fractional, FractionalFormatter};

pub mod iso8601;
pub(crate) mod util;

/// A trait for printing periods.
///
/// This is similar to `core::fmt::Write`, but returns this crate's error
/// type. It is implemented for `String`, `Vec<u8>` and `&mut W` for any
/// `W: Write`. To print to a `core::fmt::Write` implementation, wrap it in
/// [`StdFmtWrite`].
///
/// # Example
///
/// ```
/// use calperiod::{fmt::iso8601::PeriodPrinter, ToPeriod};
///
/// let mut buf = vec![];
/// PeriodPrinter::new().print_period(&5.days().hours(3), &mut buf)?;
/// assert_eq!(buf, b"P5DT3H");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Write {
    /// Write the given string to this writer, returning whether the write
    /// succeeded or not.
    fn write_str(&mut self, string: &str) -> Result<(), Error>;

    /// Write the given character to this writer, returning whether the write
    /// succeeded or not.
    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        self.write_str(char.encode_utf8(&mut [0; 4]))
    }
}

impl Write for String {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.push_str(string);
        Ok(())
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.extend_from_slice(string.as_bytes());
        Ok(())
    }
}

impl<W: Write> Write for &mut W {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        (**self).write_str(string)
    }

    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        (**self).write_char(char)
    }
}

/// An adapter for using `core::fmt::Write` implementations with [`Write`].
///
/// This is what the `Display` impls in this crate use to print into a
/// `core::fmt::Formatter`.
#[derive(Clone, Debug)]
pub struct StdFmtWrite<W>(pub W);

impl<W: core::fmt::Write> Write for StdFmtWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0.write_str(string).map_err(|_| Error::from(E::StdFmtWriteAdapter))
    }

    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        self.0.write_char(char).map_err(|_| Error::from(E::StdFmtWriteAdapter))
    }
}

/// Convenience routines for writing numbers.
pub(crate) trait WriteExt: Write {
    /// Write the given number as a decimal using ASCII digits to this buffer.
    /// The given formatter controls how the decimal is formatted.
    #[inline]
    fn write_int(
        &mut self,
        formatter: &DecimalFormatter,
        n: impl Into<i64>,
    ) -> Result<(), Error> {
        self.write_decimal(&Decimal::new(formatter, n.into()))
    }

    /// Write the given fractional number using ASCII digits to this buffer.
    /// Trailing zeros are omitted.
    #[inline]
    fn write_fraction(
        &mut self,
        formatter: &FractionalFormatter,
        n: impl Into<i64>,
    ) -> Result<(), Error> {
        self.write_fractional(&Fractional::new(formatter, n.into()))
    }

    /// Write the given decimal number to this buffer.
    #[inline]
    fn write_decimal(&mut self, decimal: &Decimal) -> Result<(), Error> {
        self.write_str(decimal.as_str())
    }

    /// Write the given fractional number to this buffer.
    #[inline]
    fn write_fractional(
        &mut self,
        fractional: &Fractional,
    ) -> Result<(), Error> {
        self.write_str(fractional.as_str())
    }
}

impl<W: Write> WriteExt for W {}
