/*!
A collection of proleptic Gregorian calendar utility functions.

These are `const` and work on primitive integers so that they can back
both `civil::Date` and the `civil::Iso` calendar without any ceremony.

# Algorithms

Epoch day conversions are taken from
Neri C, Schneider L. "Euclidean affine functions and their application to calendar algorithms":
- https://github.com/cassioneri/eaf/
*/

/// Returns true if and only if the given year is a leap year.
///
/// A leap year is a year with 366 days. Typical years have 365 days.
#[inline]
pub(crate) const fn is_leap_year(year: i16) -> bool {
    let d = if year % 25 != 0 { 4 } else { 16 };
    (year % d) == 0
}

/// Return the number of days in the given month.
///
/// This correctly returns `29` when the year is a leap year and the month is
/// February. When the given month is invalid, this returns `0`.
#[inline]
pub(crate) const fn days_in_month(year: i16, month: i8) -> i8 {
    if month < 1 || month > 12 {
        return 0;
    }
    if month == 2 {
        if is_leap_year(year) {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ month >> 3)
    }
}

/// Converts a Gregorian date to days since 1970-01-01.
///
/// The date must be valid.
#[inline]
#[allow(non_upper_case_globals, non_snake_case)] // to mimic the paper
pub(crate) const fn to_epoch_day(year: i16, month: i8, day: i8) -> i32 {
    const s: u32 = 82;
    const K: u32 = 719468 + 146097 * s;
    const L: u32 = 400 * s;

    let year = year as u32;
    let month = month as u32;
    let day = day as u32;

    let J = month <= 2;
    let Y = year.wrapping_add(L).wrapping_sub(J as u32);
    let M = if J { month + 12 } else { month };
    let D = day - 1;
    let C = Y / 100;

    let y_star = 1461 * Y / 4 - C + C / 4;
    let m_star = (979 * M - 2919) / 32;
    let N = y_star + m_star + D;

    N.wrapping_sub(K) as i32
}

/// Converts days since 1970-01-01 to a Gregorian `(year, month, day)`.
///
/// The result is only meaningful when the epoch day corresponds to a year
/// that fits in an `i16`. Callers check the year range themselves.
#[inline]
#[allow(non_upper_case_globals, non_snake_case)] // to mimic the paper
pub(crate) const fn from_epoch_day(epoch_day: i32) -> (i16, i8, i8) {
    const s: u32 = 82;
    const K: u32 = 719468 + 146097 * s;
    const L: u32 = 400 * s;

    let N_U = epoch_day as u32;
    let N = N_U.wrapping_add(K);

    let N_1 = 4 * N + 3;
    let C = N_1 / 146097;
    let N_C = (N_1 % 146097) / 4;

    let N_2 = 4 * N_C + 3;
    let P_2 = 2939745 * (N_2 as u64);
    let Z = (P_2 / 4294967296) as u32;
    let N_Y = (P_2 % 4294967296) as u32 / 2939745 / 4;
    let Y = 100 * C + Z;

    let N_3 = 2141 * N_Y + 197913;
    let M = N_3 / 65536;
    let D = (N_3 % 65536) / 2141;

    let J = N_Y >= 306;
    let year = Y.wrapping_sub(L).wrapping_add(J as u32) as i16;
    let month = (if J { M - 12 } else { M }) as i8;
    let day = (D + 1) as i8;
    (year, month, day)
}
