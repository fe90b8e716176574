use {
    crate::{Fraction, Integer, IsZero, MathError, MathResult, NumberConst, Operand},
    std::{
        iter::{Product, Sum},
        ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    },
};

// ------------------------------ checked methods ------------------------------

impl<U> Fraction<U>
where
    U: Integer,
{
    /// Add over the least common multiple of the denominators.
    pub fn checked_add(self, rhs: impl Into<Operand<U>>) -> MathResult<Self> {
        let rhs = rhs.into().into_fraction("addition")?;
        let denominator = self.denominator().checked_lcm(rhs.denominator())?;

        let lhs_numerator = denominator
            .div_euclid(self.denominator())
            .checked_mul(self.numerator())?;
        let rhs_numerator = denominator
            .div_euclid(rhs.denominator())
            .checked_mul(rhs.numerator())?;

        Self::new(lhs_numerator.checked_add(rhs_numerator)?, denominator).map(|sum| sum.simplify())
    }

    /// Subtract, as the addition of the negated right hand side.
    pub fn checked_sub(self, rhs: impl Into<Operand<U>>) -> MathResult<Self> {
        let rhs = rhs.into().into_fraction("subtraction")?;
        self.checked_add(rhs.checked_neg()?)
    }

    pub fn checked_mul(self, rhs: impl Into<Operand<U>>) -> MathResult<Self> {
        let rhs = rhs.into().into_fraction("multiplication")?;

        // Cancel across first. The product simplifies to the same value, but
        // the intermediate values stay small. Both gcds are at least one since
        // denominators are positive.
        let lhs_gcd = self.numerator().checked_gcd(rhs.denominator())?;
        let rhs_gcd = rhs.numerator().checked_gcd(self.denominator())?;

        let numerator = self
            .numerator()
            .div_euclid(lhs_gcd)
            .checked_mul(rhs.numerator().div_euclid(rhs_gcd))?;
        let denominator = self
            .denominator()
            .div_euclid(rhs_gcd)
            .checked_mul(rhs.denominator().div_euclid(lhs_gcd))?;

        Self::new(numerator, denominator).map(|product| product.simplify())
    }

    /// Divide, as the multiplication with the reciprocal of the right hand side.
    pub fn checked_div(self, rhs: impl Into<Operand<U>>) -> MathResult<Self> {
        let rhs = rhs.into().into_fraction("division")?;

        if rhs.is_zero() {
            return Err(MathError::division_by_zero(self));
        }

        self.checked_mul(rhs.checked_reciprocal()?)
    }

    /// Negate, as the multiplication with minus one. The result is simplified.
    pub fn checked_neg(self) -> MathResult<Self> {
        Self::new(self.numerator().checked_neg()?, self.denominator()).map(|neg| neg.simplify())
    }

    /// Absolute value. Unlike the arithmetic operations, this does _not_
    /// simplify.
    pub fn checked_abs(self) -> MathResult<Self> {
        Self::new(self.numerator().checked_abs()?, self.denominator())
    }

    pub fn abs(self) -> Self {
        self.checked_abs().unwrap_or_else(|err| panic!("{err}"))
    }
}

// ---------------------------- fraction ⊕ fraction ----------------------------

impl<U> Neg for Fraction<U>
where
    U: Integer,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.checked_neg().unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Add for Fraction<U>
where
    U: Integer,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Sub for Fraction<U>
where
    U: Integer,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Mul for Fraction<U>
where
    U: Integer,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Div for Fraction<U>
where
    U: Integer,
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> AddAssign for Fraction<U>
where
    U: Integer,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<U> SubAssign for Fraction<U>
where
    U: Integer,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<U> MulAssign for Fraction<U>
where
    U: Integer,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<U> DivAssign for Fraction<U>
where
    U: Integer,
{
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<U> Sum for Fraction<U>
where
    U: Integer,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        let mut sum = Self::ZERO;
        for fraction in iter {
            sum += fraction;
        }
        sum
    }
}

impl<U> Product for Fraction<U>
where
    U: Integer,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        let mut product = Self::ONE;
        for fraction in iter {
            product *= fraction;
        }
        product
    }
}

// ----------------------------- integer operands ------------------------------

macro_rules! impl_integer_ops {
    ($t:ty) => {
        impl Add<$t> for Fraction<$t> {
            type Output = Self;

            fn add(self, rhs: $t) -> Self::Output {
                self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl Sub<$t> for Fraction<$t> {
            type Output = Self;

            fn sub(self, rhs: $t) -> Self::Output {
                self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl Mul<$t> for Fraction<$t> {
            type Output = Self;

            fn mul(self, rhs: $t) -> Self::Output {
                self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl Div<$t> for Fraction<$t> {
            type Output = Self;

            fn div(self, rhs: $t) -> Self::Output {
                self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl Add<Fraction<$t>> for $t {
            type Output = Fraction<$t>;

            fn add(self, rhs: Fraction<$t>) -> Self::Output {
                rhs + self
            }
        }

        /// `int - frac` is `-frac + int`.
        impl Sub<Fraction<$t>> for $t {
            type Output = Fraction<$t>;

            fn sub(self, rhs: Fraction<$t>) -> Self::Output {
                -rhs + self
            }
        }

        impl Mul<Fraction<$t>> for $t {
            type Output = Fraction<$t>;

            fn mul(self, rhs: Fraction<$t>) -> Self::Output {
                rhs * self
            }
        }

        /// `int / frac` is `reciprocal(frac) * int`.
        impl Div<Fraction<$t>> for $t {
            type Output = Fraction<$t>;

            fn div(self, rhs: Fraction<$t>) -> Self::Output {
                rhs.checked_reciprocal()
                    .and_then(|reciprocal| reciprocal.checked_mul(self))
                    .unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl AddAssign<$t> for Fraction<$t> {
            fn add_assign(&mut self, rhs: $t) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<$t> for Fraction<$t> {
            fn sub_assign(&mut self, rhs: $t) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<$t> for Fraction<$t> {
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }

        impl DivAssign<$t> for Fraction<$t> {
            fn div_assign(&mut self, rhs: $t) {
                *self = *self / rhs;
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_integer_ops!($t);
        )+
    };
}

impl_integer_ops! {
    i8, i16, i32, i64, i128,
}

// ----------------------------------- tests -----------------------------------
