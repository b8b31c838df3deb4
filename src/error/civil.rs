use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedAddPeriod,
    FailedSubPeriod,
    TimeFieldsNotAllowed { unit: Unit },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Civil(err).into()
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
            FailedAddPeriod => f.write_str("failed to add period to date"),
            FailedSubPeriod => {
                f.write_str("failed to subtract period from date")
            }
            TimeFieldsNotAllowed { unit } => write!(
                f,
                "a date can only be adjusted by years, months or days, \
                 but found non-zero {unit} in period",
                unit = unit.plural(),
            ),
        }
    }
}
