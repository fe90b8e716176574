use {
    crate::{Fraction, Integer, MathError, MathResult},
    std::fmt,
};

/// The right-hand side of a fraction operation.
///
/// Arithmetic accepts integers and fractions; comparisons additionally accept
/// floats. The `std::ops` impls only exist for the accepted combinations, so
/// the runtime check in [`Operand::into_fraction`] is only reachable from the
/// `checked_*` methods, which take anything convertible into an operand.
#[derive(Debug, Clone, Copy)]
pub enum Operand<U> {
    Integer(U),
    Fraction(Fraction<U>),
    Float(f64),
}

impl<U> Operand<U>
where
    U: Integer,
{
    /// Interpret the operand as an exact fraction, failing with
    /// [`MathError::UnsupportedOperand`] for floats.
    pub fn into_fraction(self, op: &'static str) -> MathResult<Fraction<U>> {
        match self {
            Operand::Integer(integer) => Ok(Fraction::from_integer(integer)),
            Operand::Fraction(fraction) => Ok(fraction),
            Operand::Float(float) => Err(MathError::unsupported_operand(op, float)),
        }
    }
}

impl<U> fmt::Display for Operand<U>
where
    U: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(integer) => write!(f, "{integer}"),
            Operand::Fraction(fraction) => write!(f, "{fraction}"),
            Operand::Float(float) => write!(f, "{float}"),
        }
    }
}

impl<U> From<Fraction<U>> for Operand<U> {
    fn from(fraction: Fraction<U>) -> Self {
        Operand::Fraction(fraction)
    }
}

macro_rules! impl_from_primitive {
    ($t:ty) => {
        impl From<$t> for Operand<$t> {
            fn from(integer: $t) -> Self {
                Operand::Integer(integer)
            }
        }

        impl From<f64> for Operand<$t> {
            fn from(float: f64) -> Self {
                Operand::Float(float)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_from_primitive!($t);
        )+
    };
}

impl_from_primitive! {
    i8, i16, i32, i64, i128,
}

// ----------------------------------- tests -----------------------------------
