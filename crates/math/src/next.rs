use {
    bnum::types::I256,
    std::ops::Mul,
};

/// Describes a number type can be cast into another type of a bigger word size.
///
/// Cross-multiplying two fractions multiplies a numerator by a denominator.
/// Doing it in the next word size means the product of any two values of the
/// smaller type fits, so comparisons never overflow.
pub trait NextNumber {
    type Next: Copy + Ord + Mul<Output = Self::Next>;

    fn into_next(self) -> Self::Next;
}

macro_rules! impl_next {
    ($this:ty => $next:ty) => {
        impl NextNumber for $this {
            type Next = $next;

            fn into_next(self) -> Self::Next {
                self.into()
            }
        }
    };
    ($($this:ty => $next:ty),+ $(,)?) => {
        $(
            impl_next!($this => $next);
        )+
    };
}

impl_next! {
    i8   => i16,
    i16  => i32,
    i32  => i64,
    i64  => i128,
    i128 => I256,
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_fit_in_next() {
        let max = i64::MAX.into_next();
        let min = i64::MIN.into_next();
        assert_eq!(max * max, (i64::MAX as i128) * (i64::MAX as i128));
        assert_eq!(min * min, (i64::MIN as i128) * (i64::MIN as i128));

        let max = i128::MAX.into_next();
        let min = i128::MIN.into_next();
        assert!(min * min > max * max);
        assert_eq!((-1_i128).into_next(), I256::from(-1_i128));
    }
}
