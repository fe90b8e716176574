use {
    crate::{IsZero, MathError, MathResult, NextNumber, NumberConst},
    std::{
        fmt::{Debug, Display},
        hash::Hash,
    },
};

/// Describes the signed primitive integers a [`Fraction`](crate::Fraction)
/// can be built on.
pub trait Integer:
    Copy + Ord + Hash + Debug + Display + NumberConst + IsZero + NextNumber + Sized
{
    fn checked_add(self, other: Self) -> MathResult<Self>;

    fn checked_mul(self, other: Self) -> MathResult<Self>;

    fn checked_neg(self) -> MathResult<Self>;

    fn checked_abs(self) -> MathResult<Self>;

    fn is_negative(self) -> bool;

    /// Euclidean quotient. Equals the floored quotient for a positive divisor.
    ///
    /// Panics if `other` is zero, like the primitive operator.
    fn div_euclid(self, other: Self) -> Self;

    /// Euclidean remainder, always non-negative.
    ///
    /// Panics if `other` is zero, like the primitive operator.
    fn rem_euclid(self, other: Self) -> Self;

    /// Greatest common divisor of the absolute values, by the iterative
    /// Euclidean algorithm. `gcd(0, 0)` is zero.
    ///
    /// The result only fails to fit in `Self` when both operands are `MIN` or
    /// zero; a positive operand bounds it from above.
    fn checked_gcd(self, other: Self) -> MathResult<Self>;

    /// Least common multiple, as `(self / gcd) * other`.
    fn checked_lcm(self, other: Self) -> MathResult<Self>;

    fn to_f64(self) -> f64;

    /// Convert an integral float. Any fractional part is truncated.
    fn checked_from_f64(value: f64) -> MathResult<Self>;
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_integer {
    ($t:ty) => {
        impl Integer for $t {
            fn checked_add(self, other: Self) -> MathResult<Self> {
                self.checked_add(other)
                    .ok_or_else(|| MathError::overflow_add(self, other))
            }

            fn checked_mul(self, other: Self) -> MathResult<Self> {
                self.checked_mul(other)
                    .ok_or_else(|| MathError::overflow_mul(self, other))
            }

            fn checked_neg(self) -> MathResult<Self> {
                self.checked_neg()
                    .ok_or_else(|| MathError::overflow_neg(self))
            }

            fn checked_abs(self) -> MathResult<Self> {
                self.checked_abs()
                    .ok_or_else(|| MathError::overflow_neg(self))
            }

            fn is_negative(self) -> bool {
                self < 0
            }

            fn div_euclid(self, other: Self) -> Self {
                <$t>::div_euclid(self, other)
            }

            fn rem_euclid(self, other: Self) -> Self {
                <$t>::rem_euclid(self, other)
            }

            fn checked_gcd(self, other: Self) -> MathResult<Self> {
                let mut a = self.unsigned_abs();
                let mut b = other.unsigned_abs();

                while b != 0 {
                    (a, b) = (b, a % b);
                }

                <$t>::try_from(a).map_err(|_| MathError::overflow_conversion::<_, $t>(a))
            }

            fn checked_lcm(self, other: Self) -> MathResult<Self> {
                let gcd = Integer::checked_gcd(self, other)?;

                if gcd.is_zero() {
                    return Ok(Self::ZERO);
                }

                Integer::checked_mul(self / gcd, other)
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn checked_from_f64(value: f64) -> MathResult<Self> {
                if !value.is_finite() {
                    return Err(MathError::non_finite_float(value));
                }

                // `MIN` is a negated power of two, so both bounds are exact.
                let lower = <$t>::MIN as f64;
                if value < lower || value >= -lower {
                    return Err(MathError::overflow_conversion::<f64, $t>(value));
                }

                Ok(value as $t)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_integer!($t);
        )+
    };
}

impl_integer! {
    i8, i16, i32, i64, i128,
}

// ----------------------------------- tests -----------------------------------
