use {
    crate::{Integer, IsZero, MathError, MathResult, NumberConst, Operand},
    std::fmt,
};

// ------------------------------- generic type --------------------------------

/// An exact ratio of two integers.
///
/// The denominator is never zero, and construction moves its sign onto the
/// numerator, so a stored denominator is always positive. Construction does
/// _not_ reduce to lowest terms; use [`Fraction::simplify`] for that. Results
/// of arithmetic are always simplified.
///
/// ```rust
/// use fraction_math::Fraction64;
///
/// let half = Fraction64::new(2, -4).unwrap();
/// assert_eq!(half.to_string(), "-2/4");
/// assert_eq!(half.simplify().to_string(), "-1/2");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fraction<U> {
    numerator: U,
    denominator: U,
}

impl<U> Fraction<U>
where
    U: Integer,
{
    /// Upper bound on the number of times [`Fraction::to_fraction`] scales its
    /// input by ten before giving up on finding an exact integer.
    pub const MAX_SCALE_STEPS: u32 = 18;

    pub fn new(numerator: U, denominator: U) -> MathResult<Self> {
        if denominator.is_zero() {
            return Err(MathError::zero_denominator(numerator));
        }

        if denominator.is_negative() {
            return Ok(Self {
                numerator: numerator.checked_neg()?,
                denominator: denominator.checked_neg()?,
            });
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Create a fraction with a denominator of one.
    pub const fn from_integer(numerator: U) -> Self {
        Self {
            numerator,
            denominator: U::ONE,
        }
    }

    /// Create a fraction from a numerator and a denominator that may each be
    /// either an integer or another fraction.
    ///
    /// Two integers take the same path as [`Fraction::new`]. Otherwise the
    /// result is `numerator / denominator`, which is simplified.
    ///
    /// ```rust
    /// use fraction_math::Fraction64;
    ///
    /// let half = Fraction64::new(1, 2).unwrap();
    /// let third = Fraction64::new(1, 3).unwrap();
    /// let ratio = Fraction64::from_operands(half, third).unwrap();
    /// assert_eq!(ratio, Fraction64::new(3, 2).unwrap());
    /// ```
    pub fn from_operands<N, D>(numerator: N, denominator: D) -> MathResult<Self>
    where
        N: Into<Operand<U>>,
        D: Into<Operand<U>>,
    {
        match (numerator.into(), denominator.into()) {
            (Operand::Integer(numerator), Operand::Integer(denominator)) => {
                Self::new(numerator, denominator)
            },
            (numerator, denominator) => numerator
                .into_fraction("construction")?
                .checked_div(denominator.into_fraction("construction")?),
        }
    }

    pub fn numerator(&self) -> U {
        self.numerator
    }

    pub fn denominator(&self) -> U {
        self.denominator
    }

    /// Return the fraction in lowest terms.
    pub fn simplify(&self) -> Self {
        if self.numerator.is_zero() {
            return Self::ZERO;
        }

        let gcd = self
            .numerator
            .checked_gcd(self.denominator)
            .expect("gcd is bounded by the positive denominator");

        Self {
            numerator: self.numerator.div_euclid(gcd),
            denominator: self.denominator.div_euclid(gcd),
        }
    }

    pub fn checked_reciprocal(&self) -> MathResult<Self> {
        if self.numerator.is_zero() {
            return Err(MathError::division_by_zero(self));
        }

        Self::new(self.denominator, self.numerator)
    }

    /// Split into an integer part and a proper fraction, such that
    /// `self == integer + proper` and `0 <= proper < 1`.
    ///
    /// The integer part is the floored quotient, so for negative fractions the
    /// proper part is still non-negative:
    ///
    /// ```rust
    /// use fraction_math::Fraction64;
    ///
    /// let (integer, proper) = Fraction64::new(-7, 2).unwrap().get_proper();
    /// assert_eq!(integer, -4);
    /// assert_eq!(proper, Fraction64::new(1, 2).unwrap());
    /// ```
    pub fn get_proper(&self) -> (U, Self) {
        let integer = self.numerator.div_euclid(self.denominator);
        let proper = Self {
            numerator: self.numerator.rem_euclid(self.denominator),
            denominator: self.denominator,
        };

        (integer, proper.simplify())
    }

    /// Convert a decimal into a fraction, by scaling it by ten until it's an
    /// integer.
    ///
    /// Binary floats that never become integral (e.g. `0.1 + 0.2`) stop after
    /// [`Fraction::MAX_SCALE_STEPS`] steps, or earlier if the next power of ten
    /// no longer fits in `U`. The scaled value is then rounded, making the
    /// result an approximation.
    pub fn to_fraction(decimal: f64) -> MathResult<Self> {
        if !decimal.is_finite() {
            return Err(MathError::non_finite_float(decimal));
        }

        let mut scaled = decimal;
        let mut magnitude = U::ONE;

        for _ in 0..Self::MAX_SCALE_STEPS {
            if scaled.fract() == 0.0 {
                break;
            }

            let Ok(next_magnitude) = magnitude.checked_mul(U::TEN) else {
                break;
            };

            scaled *= 10.0;
            magnitude = next_magnitude;
        }

        if scaled.fract() != 0.0 {
            tracing::debug!(
                decimal,
                scaled,
                magnitude = %magnitude,
                "Decimal is not exact after scaling; rounding"
            );

            scaled = scaled.round_ties_even();
        }

        let numerator = U::checked_from_f64(scaled)?;

        Self::new(numerator, magnitude).map(|fraction| fraction.simplify())
    }
}

impl<U> Default for Fraction<U>
where
    U: Integer,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U> fmt::Display for Fraction<U>
where
    U: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// ------------------------------ concrete types -------------------------------

/// Fraction of 32-bit signed integers.
pub type Fraction32 = Fraction<i32>;

/// Fraction of 64-bit signed integers.
pub type Fraction64 = Fraction<i64>;

/// Fraction of 128-bit signed integers.
pub type Fraction128 = Fraction<i128>;

// ----------------------------------- tests -----------------------------------
