use crate::error;

/// Errors from overflow checked integer arithmetic.
///
/// The operands are kept as `i128` so that one type can describe a failure
/// from any of the integer widths used in this crate.
#[derive(Clone, Debug)]
pub(crate) enum Error {
    DivideByZero,
    Narrow { value: i128, ty: &'static str },
    Negate { value: i128, ty: &'static str },
    Overflow { op: &'static str, lhs: i128, rhs: i128, ty: &'static str },
}

impl Error {
    pub(crate) fn is_overflow(&self) -> bool {
        !matches!(*self, Error::DivideByZero)
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Math(err).into()
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
            DivideByZero => f.write_str("attempted to divide by zero"),
            Narrow { value, ty } => {
                write!(f, "value {value} overflows `{ty}`")
            }
            Negate { value, ty } => {
                write!(f, "negating {value} overflows `{ty}`")
            }
            Overflow { op, lhs, rhs, ty } => {
                write!(f, "`{lhs} {op} {rhs}` overflows `{ty}`")
            }
        }
    }
}
