/*!
An immutable calendar period type with overflow checked arithmetic.

A [`Period`] is an amount of calendar time made up of seven independently
signed fields: years, months, days, hours, minutes, seconds and nanoseconds.
Unlike a fixed length [`Duration`], a period remembers how it was expressed.
One month is not 30 days and one day is not 24 hours until something decides
that it is.

This crate provides:

* Construction of periods from fields, from a single [`Unit`] via
[`Period::of`] or with the [`ToPeriod`] extension trait, e.g., `5.days()`.
* Field-wise arithmetic where every operation checks for overflow and
returns an [`Error`] instead of wrapping.
* Normalization, i.e., carrying smaller units into bigger ones, with
an explicit policy for whether days are 24 hours long.
* The calendar aware period between two [`civil::Date`] values, and adding a
period to a date.
* Conversion to a fixed length [`Duration`] and totals in a single unit.
* Parsing and printing the ISO 8601 duration format, e.g., `P1Y2M3DT4H`. See
the [`fmt::iso8601`] module.

# Example

```
use calperiod::{civil::date, Period, ToPeriod};

let period: Period = "P1Y2M10DT2H30M".parse()?;
assert_eq!(period, 1.year().months(2).days(10).hours(2).minutes(30));

let start = date(2024, 1, 31);
assert_eq!(start.checked_add(1.month())?, date(2024, 2, 29));
assert_eq!(Period::between(start, date(2025, 3, 31)), 1.year().months(2));

let p = 13.months().minutes(90);
assert_eq!(p.normalized()?.to_string(), "P1Y1MT1H30M");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Overflow

Every field of a period accepts its full integer range: `i32` for everything
except nanoseconds, which is an `i64`. Operations that would produce a value
outside of that range return an error. The operator overloads, such as `-p` or
`p * 2`, panic instead.

```
use calperiod::{Period, Unit};

let max = Period::of(i32::MAX as i64, Unit::Year)?;
assert!(max.checked_add((Unit::Year, 1)).unwrap_err().is_overflow());
assert!(Period::ZERO.checked_div(0).unwrap_err().is_division_by_zero());

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - When enabled, `Error` implements
`std::error::Error`.
* **logging** - When enabled, the `log` crate is used to emit trace records
for calendar decisions, like borrowing days from a month when computing the
period between two dates. This is meant for debugging.
* **serde** - When enabled, [`Period`] and [`Duration`] implement
`Serialize` and `Deserialize` using the ISO 8601 format.
* **perf-inline** (enabled by default) - When enabled, a handful of hot
paths are annotated with `#[inline(always)]`.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors carry their cause chain on the heap, and printing to a string
// needs `String`. There is no core-only mode.
extern crate alloc;

pub use crate::{
    duration::Duration,
    error::Error,
    period::{Period, PeriodArithmetic, ToPeriod},
    unit::Unit,
};

#[macro_use]
mod logging;

pub mod civil;
mod duration;
mod error;
pub mod fmt;
mod period;
mod unit;
mod util;
