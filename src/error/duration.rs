use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedFromUnsigned,
    FailedToUnsigned,
    NegativeUnsigned,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
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
            FailedFromUnsigned => f.write_str(
                "failed to convert unsigned `core::time::Duration` \
                 to signed duration",
            ),
            FailedToUnsigned => f.write_str(
                "failed to convert signed duration \
                 to unsigned `core::time::Duration`",
            ),
            NegativeUnsigned => f.write_str(
                "cannot convert negative duration \
                 to unsigned `core::time::Duration`",
            ),
        }
    }
}
