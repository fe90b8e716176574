mod arithmetic;
mod compare;
mod conversions;
mod error;
mod fraction;
mod integer;
mod is_zero;
mod next;
mod number_const;
mod operand;
#[cfg(test)]
mod test_utils;

pub use {
    error::*, fraction::*, integer::*, is_zero::*, next::*, number_const::*, operand::*,
};
