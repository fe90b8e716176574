use {std::any::type_name, thiserror::Error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("denominator cannot be zero: {numerator}/0")]
    ZeroDenominator { numerator: String },

    #[error("cannot convert non-finite float `{value}` into a fraction")]
    NonFiniteFloat { value: String },

    #[error("unsupported operand for {op}: {operand}")]
    UnsupportedOperand { op: &'static str, operand: String },

    #[error("conversion overflow: {source_type}({value}) > {target_type}::MAX")]
    OverflowConversion {
        source_type: &'static str,
        target_type: &'static str,
        value: String,
    },

    #[error("addition overflow: {a} + {b} > {ty}::MAX")]
    OverflowAdd {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("multiplication overflow: {a} * {b} > {ty}::MAX")]
    OverflowMul {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("negation overflow: -({a}) > {ty}::MAX")]
    OverflowNeg { ty: &'static str, a: String },

    #[error("division by zero: {a} / 0")]
    DivisionByZero { a: String },
}

impl MathError {
    pub fn zero_denominator(numerator: impl ToString) -> Self {
        Self::ZeroDenominator {
            numerator: numerator.to_string(),
        }
    }

    pub fn non_finite_float(value: f64) -> Self {
        Self::NonFiniteFloat {
            value: value.to_string(),
        }
    }

    pub fn unsupported_operand(op: &'static str, operand: impl ToString) -> Self {
        Self::UnsupportedOperand {
            op,
            operand: operand.to_string(),
        }
    }

    pub fn overflow_conversion<A: ToString, B>(source: A) -> Self {
        Self::OverflowConversion {
            source_type: type_name::<A>(),
            target_type: type_name::<B>(),
            value: source.to_string(),
        }
    }

    pub fn overflow_add<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowAdd {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_mul<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowMul {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_neg<T: ToString>(a: T) -> Self {
        Self::OverflowNeg {
            ty: type_name::<T>(),
            a: a.to_string(),
        }
    }

    pub fn division_by_zero(a: impl ToString) -> Self {
        Self::DivisionByZero { a: a.to_string() }
    }
}

pub type MathResult<T> = core::result::Result<T, MathError>;

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case(
        MathError::zero_denominator(1),
        "denominator cannot be zero: 1/0";
        "zero denominator"
    )]
    #[test_case(
        MathError::unsupported_operand("add", 0.5),
        "unsupported operand for add: 0.5";
        "unsupported operand"
    )]
    #[test_case(
        MathError::overflow_mul(i64::MAX, 2),
        "multiplication overflow: 9223372036854775807 * 2 > i64::MAX";
        "overflow mul"
    )]
    #[test_case(
        MathError::overflow_neg(i8::MIN),
        "negation overflow: -(-128) > i8::MAX";
        "overflow neg"
    )]
    #[test_case(
        MathError::division_by_zero("3/4"),
        "division by zero: 3/4 / 0";
        "division by zero"
    )]
    fn display(err: MathError, expected: &str) {
        assert_eq!(err.to_string(), expected);
    }
}
