use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedAdd { unit: Unit },
    FailedDivide,
    FailedFromDuration,
    FailedMultiply,
    FailedNegate,
    FailedNormalize,
    FailedOf { unit: Unit },
    FailedSubtract { unit: Unit },
    FailedToDuration,
    FailedTotal { unit: Unit },
    NonFixedUnit { unit: Unit },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Period(err).into()
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
            FailedAdd { unit } => write!(
                f,
                "failed to add {unit} to period",
                unit = unit.plural(),
            ),
            FailedDivide => f.write_str("failed to divide period"),
            FailedFromDuration => {
                f.write_str("failed to convert duration to period")
            }
            FailedMultiply => f.write_str("failed to multiply period"),
            FailedNegate => f.write_str("failed to negate period"),
            FailedNormalize => f.write_str("failed to normalize period"),
            FailedOf { unit } => write!(
                f,
                "failed to create period from {unit}",
                unit = unit.plural(),
            ),
            FailedSubtract { unit } => write!(
                f,
                "failed to subtract {unit} from period",
                unit = unit.plural(),
            ),
            FailedToDuration => {
                f.write_str("failed to convert period to duration")
            }
            FailedTotal { unit } => write!(
                f,
                "failed to compute total {unit} in period",
                unit = unit.plural(),
            ),
            NonFixedUnit { unit } => write!(
                f,
                "cannot convert period with non-zero {unit} \
                 to a fixed length duration, \
                 since {unit} do not have a fixed length",
                unit = unit.plural(),
            ),
        }
    }
}
