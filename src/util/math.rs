/*!
Overflow checked integer arithmetic.

Every routine here either returns the mathematically exact result or an
error. Nothing wraps and nothing saturates. Errors describe the operation
and operands so that a failure deep inside, say, normalization can still be
understood from its message.
*/

use crate::error::{math::Error as E, Error};

/// Checked arithmetic on the primitive integer types used by periods.
pub(crate) trait SafeInt: Copy + Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, Error>;
    fn safe_sub(self, rhs: Self) -> Result<Self, Error>;
    fn safe_mul(self, rhs: Self) -> Result<Self, Error>;
    fn safe_neg(self) -> Result<Self, Error>;
    fn safe_dec(self) -> Result<Self, Error>;
    /// Division that truncates toward zero.
    fn safe_div(self, rhs: Self) -> Result<Self, Error>;
    /// Division that rounds toward negative infinity.
    fn floor_div(self, rhs: Self) -> Result<Self, Error>;
    /// The remainder of `floor_div`. It has the same sign as `rhs`.
    fn floor_mod(self, rhs: Self) -> Result<Self, Error>;
}

macro_rules! impl_safe_int {
    ($($ty:ident),*) => {
        $(
            impl SafeInt for $ty {
                #[cfg_attr(feature = "perf-inline", inline(always))]
                fn safe_add(self, rhs: $ty) -> Result<$ty, Error> {
                    self.checked_add(rhs)
                        .ok_or_else(|| overflow("+", self, rhs, stringify!($ty)))
                }

                #[cfg_attr(feature = "perf-inline", inline(always))]
                fn safe_sub(self, rhs: $ty) -> Result<$ty, Error> {
                    self.checked_sub(rhs)
                        .ok_or_else(|| overflow("-", self, rhs, stringify!($ty)))
                }

                #[cfg_attr(feature = "perf-inline", inline(always))]
                fn safe_mul(self, rhs: $ty) -> Result<$ty, Error> {
                    self.checked_mul(rhs)
                        .ok_or_else(|| overflow("*", self, rhs, stringify!($ty)))
                }

                #[cfg_attr(feature = "perf-inline", inline(always))]
                fn safe_neg(self) -> Result<$ty, Error> {
                    self.checked_neg().ok_or_else(|| {
                        Error::from(E::Negate {
                            value: i128::try_from(self).unwrap_or(i128::MIN),
                            ty: stringify!($ty),
                        })
                    })
                }

                #[cfg_attr(feature = "perf-inline", inline(always))]
                fn safe_dec(self) -> Result<$ty, Error> {
                    self.safe_sub(1)
                }

                #[cfg_attr(feature = "perf-inline", inline(always))]
                fn safe_div(self, rhs: $ty) -> Result<$ty, Error> {
                    if rhs == 0 {
                        return Err(Error::from(E::DivideByZero));
                    }
                    self.checked_div(rhs)
                        .ok_or_else(|| overflow("/", self, rhs, stringify!($ty)))
                }

                #[cfg_attr(feature = "perf-inline", inline(always))]
                fn floor_div(self, rhs: $ty) -> Result<$ty, Error> {
                    let quotient = self.safe_div(rhs)?;
                    if (self % rhs != 0) && ((self < 0) != (rhs < 0)) {
                        quotient.safe_dec()
                    } else {
                        Ok(quotient)
                    }
                }

                #[cfg_attr(feature = "perf-inline", inline(always))]
                fn floor_mod(self, rhs: $ty) -> Result<$ty, Error> {
                    if rhs == 0 {
                        return Err(Error::from(E::DivideByZero));
                    }
                    // `MIN % -1` overflows in Rust even though the answer
                    // is zero.
                    let rem = self.checked_rem(rhs).unwrap_or(0);
                    if rem != 0 && ((rem < 0) != (rhs < 0)) {
                        rem.safe_add(rhs)
                    } else {
                        Ok(rem)
                    }
                }
            }
        )*
    }
}

impl_safe_int!(i32, i64, i128);

/// Narrows the given integer to an `i32`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn to_i32(value: impl Into<i128>) -> Result<i32, Error> {
    let value = value.into();
    i32::try_from(value)
        .map_err(|_| Error::from(E::Narrow { value, ty: "i32" }))
}

/// Narrows the given integer to an `i64`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn to_i64(value: impl Into<i128>) -> Result<i64, Error> {
    let value = value.into();
    i64::try_from(value)
        .map_err(|_| Error::from(E::Narrow { value, ty: "i64" }))
}

#[cold]
#[inline(never)]
fn overflow<T: TryInto<i128>>(
    op: &'static str,
    lhs: T,
    rhs: T,
    ty: &'static str,
) -> Error {
    // Infallible for every type this is used with.
    let lhs = lhs.try_into().unwrap_or(i128::MIN);
    let rhs = rhs.try_into().unwrap_or(i128::MIN);
    Error::from(E::Overflow { op, lhs, rhs, ty })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_is_detected() {
        assert!(i32::MAX.safe_add(1).unwrap_err().is_overflow());
        assert!(i32::MIN.safe_sub(1).unwrap_err().is_overflow());
        assert!(i32::MAX.safe_mul(2).unwrap_err().is_overflow());
        assert!(i32::MIN.safe_neg().unwrap_err().is_overflow());
        assert!(i64::MIN.safe_dec().unwrap_err().is_overflow());
        assert!(i32::MIN.safe_div(-1).unwrap_err().is_overflow());
        assert_eq!(i32::MAX.safe_add(0).unwrap(), i32::MAX);
        assert_eq!((-5i32).safe_neg().unwrap(), 5);
    }

    #[test]
    fn divide_by_zero() {
        assert!(5i32.safe_div(0).unwrap_err().is_division_by_zero());
        assert!(5i64.floor_div(0).unwrap_err().is_division_by_zero());
        assert!(5i64.floor_mod(0).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn floor_semantics() {
        assert_eq!(7i64.floor_div(2).unwrap(), 3);
        assert_eq!((-7i64).floor_div(2).unwrap(), -4);
        assert_eq!(7i64.floor_div(-2).unwrap(), -4);
        assert_eq!((-7i64).floor_div(-2).unwrap(), 3);
        assert_eq!((-8i64).floor_div(2).unwrap(), -4);

        assert_eq!(7i64.floor_mod(2).unwrap(), 1);
        assert_eq!((-7i64).floor_mod(2).unwrap(), 1);
        assert_eq!(7i64.floor_mod(-2).unwrap(), -1);
        assert_eq!((-7i64).floor_mod(-2).unwrap(), -1);
        assert_eq!(i64::MIN.floor_mod(-1).unwrap(), 0);

        assert_eq!((-7i32).safe_div(2).unwrap(), -3);
    }

    #[test]
    fn narrowing() {
        assert_eq!(to_i32(i64::from(i32::MAX)).unwrap(), i32::MAX);
        assert!(to_i32(i64::from(i32::MAX) + 1).unwrap_err().is_overflow());
        assert!(to_i64(i128::from(i64::MIN) - 1).unwrap_err().is_overflow());
        insta::assert_snapshot!(
            to_i32(1i64 << 40).unwrap_err(),
            @"value 1099511627776 overflows `i32`",
        );
    }

    #[test]
    fn overflow_message() {
        insta::assert_snapshot!(
            i32::MAX.safe_add(1).unwrap_err(),
            @"`2147483647 + 1` overflows `i32`",
        );
    }

    quickcheck::quickcheck! {
        fn prop_floor_div_mod_identity(a: i64, b: i64) -> quickcheck::TestResult {
            if b == 0 || (a == i64::MIN && b == -1) {
                return quickcheck::TestResult::discard();
            }
            let q = a.floor_div(b).unwrap();
            let r = a.floor_mod(b).unwrap();
            let ok = i128::from(q) * i128::from(b) + i128::from(r) == i128::from(a)
                && (r == 0 || (r < 0) == (b < 0));
            quickcheck::TestResult::from_bool(ok)
        }
    }
}
