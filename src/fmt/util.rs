/// A formatter for writing integers as ASCII decimal digits.
///
/// This skips `core::fmt` entirely, which is noticeably faster when
/// printing many small fields. A minus sign is written for negative values
/// only.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecimalFormatter {
    minimum_digits: u8,
}

impl DecimalFormatter {
    pub(crate) const fn new() -> DecimalFormatter {
        DecimalFormatter { minimum_digits: 0 }
    }

    /// Left pads the digits with `0` until there are at least this many.
    /// The sign, if any, is not counted.
    ///
    /// This is capped at the number of digits in `u64::MAX`.
    pub(crate) const fn padding(self, digits: u8) -> DecimalFormatter {
        let minimum_digits = if digits > Decimal::MAX_DIGITS {
            Decimal::MAX_DIGITS
        } else {
            digits
        };
        DecimalFormatter { minimum_digits }
    }
}

impl Default for DecimalFormatter {
    fn default() -> DecimalFormatter {
        DecimalFormatter::new()
    }
}

/// The ASCII digits of a formatted integer.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Self::MAX_LEN as usize],
    start: u8,
}

impl Decimal {
    /// `u64::MAX` has 20 digits.
    const MAX_DIGITS: u8 = 20;
    /// Room for the digits and a sign.
    const MAX_LEN: u8 = Self::MAX_DIGITS + 1;

    pub(crate) const fn new(
        formatter: &DecimalFormatter,
        value: i64,
    ) -> Decimal {
        let mut decimal =
            Decimal { buf: [b'0'; Self::MAX_LEN as usize], start: Self::MAX_LEN };
        let mut magnitude = value.unsigned_abs();
        loop {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'0' + (magnitude % 10) as u8;
            magnitude /= 10;
            if magnitude == 0 {
                break;
            }
        }
        // The buffer is pre-filled with `0`, so padding only moves `start`.
        let min_start = Self::MAX_LEN - formatter.minimum_digits;
        if decimal.start > min_start {
            decimal.start = min_start;
        }
        if value < 0 {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'-';
        }
        decimal
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[usize::from(self.start)..]
    }

    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: Every byte in `buf` is either an ASCII digit or `-`, so
        // any subslice of it is valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

/// A formatter for the fractional digits of a second.
///
/// Only nanosecond precision is supported and trailing zeros are always
/// trimmed.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FractionalFormatter {
    _priv: (),
}

impl FractionalFormatter {
    pub(crate) const fn new() -> FractionalFormatter {
        FractionalFormatter { _priv: () }
    }
}

/// The ASCII digits after the decimal point of a fractional second.
///
/// This may be empty, which happens exactly when the value is zero.
#[derive(Debug)]
pub(crate) struct Fractional {
    buf: [u8; Self::MAX_LEN as usize],
    end: u8,
}

impl Fractional {
    const MAX_LEN: u8 = 9;

    /// Formats the given number of nanoseconds as up to 9 fractional digits.
    ///
    /// # Panics
    ///
    /// When `nanos` is not in the range `0..=999_999_999`.
    pub(crate) const fn new(
        _formatter: &FractionalFormatter,
        nanos: i64,
    ) -> Fractional {
        assert!(0 <= nanos && nanos <= 999_999_999);
        let mut fractional =
            Fractional { buf: [b'0'; Self::MAX_LEN as usize], end: 0 };
        let mut rest = nanos;
        let mut i = Self::MAX_LEN as usize;
        while rest > 0 {
            i -= 1;
            let digit = (rest % 10) as u8;
            fractional.buf[i] = b'0' + digit;
            if digit != 0 && fractional.end == 0 {
                fractional.end = i as u8 + 1;
            }
            rest /= 10;
        }
        fractional
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[..usize::from(self.end)]
    }

    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: Every byte in `buf` is an ASCII digit.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }
}
