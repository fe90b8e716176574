use {
    crate::{Fraction, Integer, NextNumber},
    std::{
        cmp::Ordering,
        hash::{Hash, Hasher},
    },
};

// ---------------------------- fraction ⊕ fraction ----------------------------

/// Compare by cross-multiplication, which is correct whether or not either
/// side is simplified. Denominators are positive, so the inequality doesn't
/// flip.
impl<U> Ord for Fraction<U>
where
    U: Integer,
{
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator().into_next() * other.denominator().into_next();
        let rhs = self.denominator().into_next() * other.numerator().into_next();
        lhs.cmp(&rhs)
    }
}

impl<U> PartialOrd for Fraction<U>
where
    U: Integer,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U> PartialEq for Fraction<U>
where
    U: Integer,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<U> Eq for Fraction<U> where U: Integer {}

/// Equal fractions have equal simplified forms, so hash those.
impl<U> Hash for Fraction<U>
where
    U: Integer,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let simplified = self.simplify();
        simplified.numerator().hash(state);
        simplified.denominator().hash(state);
    }
}

// --------------------------- integer and float rhs ---------------------------

macro_rules! impl_primitive_cmp {
    ($t:ty) => {
        /// Exact: the integer is compared as `n/1`.
        impl PartialEq<$t> for Fraction<$t> {
            fn eq(&self, other: &$t) -> bool {
                *self == Fraction::from_integer(*other)
            }
        }

        impl PartialOrd<$t> for Fraction<$t> {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp(&Fraction::from_integer(*other)))
            }
        }

        impl PartialEq<Fraction<$t>> for $t {
            fn eq(&self, other: &Fraction<$t>) -> bool {
                other == self
            }
        }

        impl PartialOrd<Fraction<$t>> for $t {
            fn partial_cmp(&self, other: &Fraction<$t>) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }

        /// Through float division, so subject to rounding.
        impl PartialEq<f64> for Fraction<$t> {
            fn eq(&self, other: &f64) -> bool {
                self.to_f64() == *other
            }
        }

        impl PartialOrd<f64> for Fraction<$t> {
            fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
                self.to_f64().partial_cmp(other)
            }
        }

        impl PartialEq<Fraction<$t>> for f64 {
            fn eq(&self, other: &Fraction<$t>) -> bool {
                other == self
            }
        }

        impl PartialOrd<Fraction<$t>> for f64 {
            fn partial_cmp(&self, other: &Fraction<$t>) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_primitive_cmp!($t);
        )+
    };
}

impl_primitive_cmp! {
    i8, i16, i32, i64, i128,
}

// ----------------------------------- tests -----------------------------------
