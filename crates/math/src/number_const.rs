use crate::{Fraction, Integer};

/// Describes a number's associated constants: minimum and maximum; zero, one,
/// and ten.
pub trait NumberConst {
    const MIN: Self;
    const MAX: Self;
    const ONE: Self;
    const TEN: Self;
    const ZERO: Self;
}

// --------------------------------- fraction ----------------------------------

impl<U> NumberConst for Fraction<U>
where
    U: Integer,
{
    const MAX: Self = Self::from_integer(U::MAX);
    const MIN: Self = Self::from_integer(U::MIN);
    const ONE: Self = Self::from_integer(U::ONE);
    const TEN: Self = Self::from_integer(U::TEN);
    const ZERO: Self = Self::from_integer(U::ZERO);
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_number_const {
    ($t:ty, $min:expr, $max:expr, $zero:expr, $one:expr, $ten:expr) => {
        impl NumberConst for $t {
            const MAX: Self = $max;
            const MIN: Self = $min;
            const ONE: Self = $one;
            const TEN: Self = $ten;
            const ZERO: Self = $zero;
        }

        /// A compile-time check to ensure that the constants are of the correct types.
        const _: () = {
            const fn _check_type(_: $t) {}
            _check_type($min);
            _check_type($max);
            _check_type($zero);
            _check_type($one);
            _check_type($ten);
        };
    };
}

impl_number_const!(i8, i8::MIN, i8::MAX, 0, 1, 10);
impl_number_const!(i16, i16::MIN, i16::MAX, 0, 1, 10);
impl_number_const!(i32, i32::MIN, i32::MAX, 0, 1, 10);
impl_number_const!(i64, i64::MIN, i64::MAX, 0, 1, 10);
impl_number_const!(i128, i128::MIN, i128::MAX, 0, 1, 10);

// ----------------------------------- tests -----------------------------------
