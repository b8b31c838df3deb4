/*!
Internal logging macros.

These forward to the `log` crate when the `logging` feature is enabled and
expand to nothing otherwise. Nothing in this crate logs errors. Errors are
always returned to the caller. Logging is reserved for tracing the handful of
decisions that are otherwise invisible from the outside, like borrowing a
month's worth of days when computing the period between two dates.
*/

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!(target: "calperiod", $($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!(target: "calperiod", $($tt)*)) }
}
