use crate::{Fraction, Integer, IsZero, MathError};

/// Past this many decimal places rounding can no longer change an `f64`.
const MAX_ROUND_DIGITS: i32 = 323;

/// Below this many decimal places every finite `f64` rounds to zero.
const MIN_ROUND_DIGITS: i32 = -308;

/// Fractional digits in the exact decimal expansion of the smallest subnormal.
const EXACT_FRACTION_DIGITS: usize = 1074;

impl<U> Fraction<U>
where
    U: Integer,
{
    pub fn to_f64(&self) -> f64 {
        self.numerator().to_f64() / self.denominator().to_f64()
    }

    /// Floored integer division of the numerator by the denominator.
    pub fn to_int(&self) -> U {
        self.numerator().div_euclid(self.denominator())
    }

    pub fn floor(&self) -> U {
        self.to_int()
    }

    /// The integer just above, unless the fraction is already an integer.
    ///
    /// Never overflows: a fraction with a remainder has a denominator of at
    /// least two, so its floor is at most half of `U::MAX`.
    pub fn ceil(&self) -> U {
        let floor = self.to_int();

        if self.numerator().rem_euclid(self.denominator()).is_zero() {
            return floor;
        }

        floor
            .checked_add(U::ONE)
            .expect("floor of a fraction with a remainder is below the maximum")
    }

    /// Round [`Fraction::to_f64`] to `digits` decimal places, half to even.
    ///
    /// The rounding is decided on the exact value of the `f64`, so a float
    /// that merely prints as a tie is not treated as one. Negative `digits`
    /// round to tens, hundreds, and so on.
    ///
    /// ```rust
    /// use fraction_math::Fraction64;
    ///
    /// let fraction = Fraction64::new(5, 8).unwrap();
    /// assert_eq!(fraction.round_to(2), 0.62);
    /// assert_eq!(fraction.round_to(0), 1.0);
    ///
    /// // 2.675 is stored as 2.67499999...
    /// assert_eq!(Fraction64::new(2675, 1000).unwrap().round_to(2), 2.67);
    /// ```
    pub fn round_to(&self, digits: i32) -> f64 {
        round_ties_even(self.to_f64(), digits)
    }

    pub fn round(&self) -> f64 {
        self.round_to(0)
    }
}

/// Round a float at a decimal position using its exact decimal expansion.
fn round_ties_even(value: f64, digits: i32) -> f64 {
    if !value.is_finite() || digits > MAX_ROUND_DIGITS {
        return value;
    }

    if digits < MIN_ROUND_DIGITS {
        return 0.0 * value;
    }

    // Precision covers every fractional digit, so formatting does not round.
    let expansion = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let point = expansion.find('.').unwrap_or(expansion.len());
    let decimal: Vec<u8> = expansion.bytes().filter(u8::is_ascii_digit).collect();

    // Everything, including the leading digit, is below half a unit.
    let Ok(cut) = usize::try_from(point as i32 + digits) else {
        return 0.0 * value;
    };

    let (kept, rest) = decimal.split_at(cut.min(decimal.len()));

    let round_up = match rest.split_first() {
        Some((b'5', tail)) if tail.iter().all(|digit| *digit == b'0') => {
            kept.last().is_some_and(|digit| (digit - b'0') % 2 == 1)
        },
        Some((first, _)) => *first >= b'5',
        None => false,
    };

    let mut mantissa = kept.to_vec();

    if round_up {
        match mantissa.iter().rposition(|digit| *digit != b'9') {
            Some(index) => {
                mantissa[index] += 1;
                mantissa[index + 1..].fill(b'0');
            },
            None => {
                mantissa.fill(b'0');
                mantissa.insert(0, b'1');
            },
        }
    }

    if mantissa.is_empty() {
        mantissa.push(b'0');
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let mantissa: String = mantissa.into_iter().map(char::from).collect();

    format!("{sign}{mantissa}e{}", -digits)
        .parse()
        .expect("decimal digits with an exponent always parse")
}

macro_rules! impl_conversions {
    ($t:ty) => {
        impl From<$t> for Fraction<$t> {
            fn from(integer: $t) -> Self {
                Self::from_integer(integer)
            }
        }

        impl From<Fraction<$t>> for f64 {
            fn from(fraction: Fraction<$t>) -> Self {
                fraction.to_f64()
            }
        }

        impl TryFrom<f64> for Fraction<$t> {
            type Error = MathError;

            fn try_from(decimal: f64) -> Result<Self, Self::Error> {
                Self::to_fraction(decimal)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_conversions!($t);
        )+
    };
}

impl_conversions! {
    i8, i16, i32, i64, i128,
}

// ----------------------------------- tests -----------------------------------
