use alloc::{boxed::Box, sync::Arc};

pub(crate) mod civil;
pub(crate) mod duration;
pub(crate) mod fmt;
pub(crate) mod math;
pub(crate) mod period;

/// An error that can occur in this crate.
///
/// Almost every fallible operation in this crate returns this type. The
/// kinds of failure are:
///
/// * Overflow, when the exact result of some arithmetic does not fit into
/// the integer type of the field it is destined for.
/// * Division by zero, from [`Period::checked_div`](crate::Period::checked_div).
/// * Conversion of a period with years or months into a fixed length
/// [`Duration`](crate::Duration). Neither unit has a fixed length.
/// * Invalid arguments, like adding a period with time fields to a
/// [`civil::Date`](crate::civil::Date).
/// * Values out of range, like an invalid calendar date.
/// * Parse errors. These carry the input and the position of the offending
/// token. See [`Error::parse_position`].
///
/// Each of these can be detected with a predicate, e.g., [`Error::is_overflow`].
/// Predicates always look at the root cause of an error, so they keep working
/// when an operation wraps the underlying failure with more context.
///
/// # Design
///
/// There is only one error type for every operation. Errors are cheap to
/// clone and are the size of a single pointer. The message rendered by the
/// `Display` impl is the full causal chain, with the highest level context
/// first.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheap to clone and to keep
    /// `Result<T, Error>` small.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from
    /// Rust's standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error is the result of integer overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{Period, Unit};
    ///
    /// let p = Period::of(i32::MAX as i64, Unit::Year)?;
    /// assert!(p.checked_add((Unit::Year, 1)).unwrap_err().is_overflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_overflow(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Math(ref err) if err.is_overflow())
    }

    /// Returns true when this error is the result of dividing by zero.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::Period;
    ///
    /// assert!(Period::ZERO.checked_div(0).unwrap_err().is_division_by_zero());
    /// ```
    pub fn is_division_by_zero(&self) -> bool {
        use self::math::Error as MathError;

        matches!(*self.root().kind(), ErrorKind::Math(MathError::DivideByZero))
    }

    /// Returns true when this error occurred because a period with years or
    /// months was converted to something with a fixed length.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::ToPeriod;
    ///
    /// let err = 1.month().to_duration().unwrap_err();
    /// assert!(err.is_non_fixed_unit());
    /// ```
    pub fn is_non_fixed_unit(&self) -> bool {
        use self::period::Error as PeriodError;

        matches!(
            *self.root().kind(),
            ErrorKind::Period(PeriodError::NonFixedUnit { .. })
        )
    }

    /// Returns true when this error occurred because an argument given to
    /// a function was not acceptable.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::{civil::date, ToPeriod};
    ///
    /// let err = date(2024, 1, 1).checked_add(1.hour()).unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    pub fn is_invalid_argument(&self) -> bool {
        use self::{civil::Error as CivilError, duration::Error as DurError};

        matches!(
            *self.root().kind(),
            ErrorKind::Civil(CivilError::TimeFieldsNotAllowed { .. })
                | ErrorKind::Duration(DurError::NegativeUnsigned)
        )
    }

    /// Returns true when this error occurred because a value was not in its
    /// allowed range.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::civil::Date;
    ///
    /// assert!(Date::new(2025, 2, 29).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Range(_))
    }

    /// Returns true when this error occurred while parsing a period from
    /// text.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::Period;
    ///
    /// assert!("P1X".parse::<Period>().unwrap_err().is_parse());
    /// ```
    pub fn is_parse(&self) -> bool {
        self.parse_error().is_some()
    }

    /// Returns the zero based position in the input where parsing failed.
    ///
    /// This points to the start of the offending token. For example, if a
    /// field's value overflows, then this is the position of the field's
    /// sign or first digit.
    ///
    /// This returns `None` when this isn't a parse error.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::Period;
    ///
    /// let err = "PT123456789123456789123456789S"
    ///     .parse::<Period>()
    ///     .unwrap_err();
    /// assert_eq!(err.parse_position(), Some(2));
    /// ```
    pub fn parse_position(&self) -> Option<usize> {
        self.parse_error().map(|err| err.position())
    }

    /// Returns the input that failed to parse.
    ///
    /// This returns `None` when this isn't a parse error.
    ///
    /// # Example
    ///
    /// ```
    /// use calperiod::Period;
    ///
    /// let err = "P1Y1Y".parse::<Period>().unwrap_err();
    /// assert_eq!(err.parse_input(), Some("P1Y1Y"));
    /// ```
    pub fn parse_input(&self) -> Option<&str> {
        self.parse_error().map(|err| err.input())
    }

    fn parse_error(&self) -> Option<&fmt::ParseError> {
        match *self.root().kind() {
            ErrorKind::Parse(ref err) => Some(err),
            _ => None,
        }
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "day")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        let inner = err.inner.get_or_insert_with(|| {
            Arc::new(ErrorInner { kind: ErrorKind::Unknown, cause: None })
        });
        match Arc::get_mut(inner) {
            // A freshly built consequent has exactly one reference and no
            // cause of its own.
            Some(inner) if inner.cause.is_none() => {
                inner.cause = Some(self);
                err
            }
            // Otherwise the chain would become a tree. Keep the root cause
            // since that's what the predicates inspect.
            _ => self,
        }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) =
            err.inner.as_ref().and_then(|inner| inner.cause.as_ref())
        {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f
                    .debug_struct("Error")
                    .field("kind", &"None")
                    .finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Civil(self::civil::Error),
    Duration(self::duration::Error),
    Fmt(self::fmt::Error),
    Math(self::math::Error),
    Parse(self::fmt::ParseError),
    Period(self::period::Error),
    Range(RangeError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Civil(ref err) => err.fmt(f),
            Duration(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            Math(ref err) => err.fmt(f),
            Parse(ref err) => err.fmt(f),
            Period(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Unknown => f.write_str("unknown calperiod error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

/// A generic error message.
///
/// This backs the `Error::from_args` public API, which permits callers to
/// manifest their own `Error` values from an arbitrary message.
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError { what, given: given.into(), min: min.into(), max: max.into() }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This exists so that `Error::context` works with the structured error
/// types of each module without exposing public `From` impls for them.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure.
    ///
    /// The closure is only called in the error path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| err.into_error().context(consequent))
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| err.into_error().context(consequent()))
    }
}
