use crate::{
    error::Error,
    fmt::{
        util::{DecimalFormatter, FractionalFormatter},
        Write, WriteExt,
    },
    util::math,
    Duration, Period,
};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// A printer for ISO 8601 periods.
#[derive(Debug)]
pub(super) struct PeriodPrinter {
    lowercase: bool,
}

impl PeriodPrinter {
    pub(super) const fn new() -> PeriodPrinter {
        PeriodPrinter { lowercase: false }
    }

    pub(super) const fn lowercase(self, yes: bool) -> PeriodPrinter {
        PeriodPrinter { lowercase: yes }
    }

    /// Print the given period to the writer given.
    ///
    /// This only returns an error when the given writer returns an error.
    pub(super) fn print_period<W: Write>(
        &self,
        period: &Period,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_INT: DecimalFormatter = DecimalFormatter::new();

        if period.is_zero() {
            return wtr.write_str("PT0S");
        }
        wtr.write_str("P")?;

        let date = period.date_fields();
        for (value, designator) in
            [(date.years, 'Y'), (date.months, 'M'), (date.days, 'D')]
        {
            if value != 0 {
                wtr.write_int(&FMT_INT, value)?;
                wtr.write_char(self.designator(designator))?;
            }
        }

        let time = period.time_fields();
        if time.is_zero() {
            return Ok(());
        }
        wtr.write_str("T")?;
        if time.hours != 0 {
            wtr.write_int(&FMT_INT, time.hours)?;
            wtr.write_char(self.designator('H'))?;
        }
        if time.minutes != 0 {
            wtr.write_int(&FMT_INT, time.minutes)?;
            wtr.write_char(self.designator('M'))?;
        }
        // Seconds and nanoseconds are combined, so that they share one sign
        // when printed. This is only for display and can lose the split
        // between the two fields, e.g., 1s and -900ms prints as `0.1S`.
        let nanos = time.seconds_and_nanos();
        if nanos != 0 || (time.hours == 0 && time.minutes == 0) {
            self.print_seconds(nanos, &mut wtr)?;
        }
        Ok(())
    }

    /// Print the given duration to the writer given as a period with only
    /// seconds, e.g., `PT-1.5S`.
    pub(super) fn print_duration<W: Write>(
        &self,
        duration: &Duration,
        mut wtr: W,
    ) -> Result<(), Error> {
        if duration.is_zero() {
            return wtr.write_str("PT0S");
        }
        wtr.write_str("PT")?;
        self.print_seconds(duration.as_nanos(), &mut wtr)
    }

    /// Prints a number of nanoseconds as a seconds unit, with a fraction
    /// when it isn't a whole number of seconds.
    fn print_seconds<W: Write>(
        &self,
        nanos: i128,
        wtr: &mut W,
    ) -> Result<(), Error> {
        static FMT_INT: DecimalFormatter = DecimalFormatter::new();
        static FMT_FRACTION: FractionalFormatter = FractionalFormatter::new();

        let seconds = math::to_i64(nanos / NANOS_PER_SECOND)?;
        let fraction = math::to_i64((nanos % NANOS_PER_SECOND).abs())?;
        // `-0.5` has no sign in its integer part.
        if seconds == 0 && nanos < 0 {
            wtr.write_str("-")?;
        }
        wtr.write_int(&FMT_INT, seconds)?;
        if fraction != 0 {
            wtr.write_str(".")?;
            wtr.write_fraction(&FMT_FRACTION, fraction)?;
        }
        wtr.write_char(self.designator('S'))
    }

    fn designator(&self, upper: char) -> char {
        if self.lowercase {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }
}
